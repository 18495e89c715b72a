//! Session driver
//!
//! Replays the declaration sequence a parser would issue for a small
//! program touching every object kind, nested routine scopes and the
//! shadowing of outer names.

use crate::common::{SemResult, SemanticError};
use crate::symtab::{ObjectId, ParamMode, SymTab};
use crate::types::{ConstantValue, Type};

/// Declare the reference program into `table` and leave its block.
///
/// The session is equivalent to:
///
/// ```text
/// PROGRAM PRG;
///   CONST c1 = 10; c2 = 'a';
///   TYPE t1 = ARRAY(.10.) OF INTEGER;
///   VAR v1 : INTEGER; v2 : ARRAY(.10.) OF ARRAY(.10.) OF INTEGER;
///   FUNCTION f(p1 : INTEGER; VAR p2 : CHAR) : INTEGER;
///   PROCEDURE p(v1 : INTEGER);
///     CONST c1 = 'a'; c3 = 10;
///     TYPE t1 = INTEGER; t2 = ARRAY(.10.) OF INTEGER;
///     VAR v2 : ARRAY(.10.) OF INTEGER; v3 : CHAR;
/// ```
pub fn declare_reference_program(table: &mut SymTab) -> SemResult<ObjectId> {
    let program = table.create_program_object("PRG")?;
    table.enter_block(table.body_scope(program)?)?;

    declare_constant(table, "c1", ConstantValue::int(10))?;
    declare_constant(table, "c2", ConstantValue::char('a'))?;
    declare_type(table, "t1", Type::array(10, Type::int()))?;
    declare_variable(table, "v1", Type::int())?;
    declare_variable(table, "v2", Type::array(10, Type::array(10, Type::int())))?;

    let func = table.create_function_object("f")?;
    table.set_return_type(func, Type::int())?;
    table.declare_object(func)?;
    table.enter_block(table.body_scope(func)?)?;
    declare_parameter(table, "p1", ParamMode::ByValue, Type::int())?;
    declare_parameter(table, "p2", ParamMode::ByReference, Type::char())?;
    table.exit_block()?;

    let proc = table.create_procedure_object("p")?;
    table.declare_object(proc)?;
    table.enter_block(table.body_scope(proc)?)?;
    declare_parameter(table, "v1", ParamMode::ByValue, Type::int())?;
    declare_constant(table, "c1", ConstantValue::char('a'))?;
    declare_constant(table, "c3", ConstantValue::int(10))?;
    declare_type(table, "t1", Type::int())?;
    declare_type(table, "t2", Type::array(10, Type::int()))?;
    declare_variable(table, "v2", Type::array(10, Type::int()))?;
    declare_variable(table, "v3", Type::char())?;
    table.exit_block()?;

    table.exit_block()?;
    Ok(program)
}

fn declare_constant(table: &mut SymTab, name: &str, value: ConstantValue) -> SemResult<ObjectId> {
    let obj = table.create_constant_object(name)?;
    table.set_constant_value(obj, value)?;
    table.declare_object(obj)?;
    Ok(obj)
}

fn declare_type(table: &mut SymTab, name: &str, ty: Type) -> SemResult<ObjectId> {
    let obj = table.create_type_object(name)?;
    table.set_alias_type(obj, ty)?;
    table.declare_object(obj)?;
    Ok(obj)
}

fn declare_variable(table: &mut SymTab, name: &str, ty: Type) -> SemResult<ObjectId> {
    let obj = table.create_variable_object(name)?;
    table.set_variable_type(obj, ty)?;
    table.declare_object(obj)?;
    Ok(obj)
}

/// Parameter of the routine owning the current scope
fn declare_parameter(
    table: &mut SymTab,
    name: &str,
    mode: ParamMode,
    ty: Type,
) -> SemResult<ObjectId> {
    let scope = table
        .current_scope()
        .ok_or_else(|| SemanticError::no_current_scope("declare_parameter"))?;
    let owner = table.scope(scope).owner();
    let obj = table.create_parameter_object(name, mode, owner)?;
    table.set_parameter_type(obj, ty)?;
    table.declare_object(obj)?;
    Ok(obj)
}
