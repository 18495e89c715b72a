//! Predeclared I/O routines of the global environment

use super::object::{ObjectAttrs, ObjectId, ParamMode};
use super::scope::add_object;
use super::table::SymTab;
use crate::types::Type;

/// Declare `READC`, `READI`, `WRITEI`, `WRITEC` and `WRITELN` into the
/// global object list
pub(super) fn declare_builtins(table: &mut SymTab) {
    let readc = table.new_function("READC", Some(Type::char()));
    table.push_global(readc);

    let readi = table.new_function("READI", Some(Type::int()));
    table.push_global(readi);

    let writei = declare_writer(table, "WRITEI", "i", Type::int());
    table.push_global(writei);

    let writec = declare_writer(table, "WRITEC", "ch", Type::char());
    table.push_global(writec);

    let writeln = table.new_procedure("WRITELN");
    table.push_global(writeln);
}

/// Procedure taking a single by-value parameter
fn declare_writer(table: &mut SymTab, name: &str, param_name: &str, ty: Type) -> ObjectId {
    let proc = table.new_procedure(name);
    let param = table.push_object(
        param_name,
        ObjectAttrs::Parameter {
            ty: Some(ty),
            mode: ParamMode::ByValue,
            owner: proc,
        },
    );

    // Owned by the body scope, indexed by the parameter list
    if let ObjectAttrs::Procedure { params, scope } = &mut table.objects[proc.index()].attrs {
        add_object(params, param);
        let scope = *scope;
        add_object(&mut table.scopes[scope.index()].objects, param);
    }
    table.objects[param.index()].registered = true;
    proc
}
