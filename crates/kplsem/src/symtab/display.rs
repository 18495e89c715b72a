//! Textual dump of declarations, one object per line

use std::fmt;

use super::object::{ObjectAttrs, ObjectId, ParamMode, ScopeId};
use super::table::SymTab;

const INDENT_STEP: usize = 4;

/// Display adapter for an object and, for routines, its body
pub struct ObjectDump<'a> {
    table: &'a SymTab,
    id: ObjectId,
    indent: usize,
}

/// Display adapter for a list of objects at the same depth
pub struct ListDump<'a> {
    table: &'a SymTab,
    list: &'a [ObjectId],
    indent: usize,
}

fn write_opt<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: Option<&T>) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{}", v),
        None => f.write_str("?"),
    }
}

impl fmt::Display for ObjectDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        let name = table.name(self.id);
        write!(f, "{:width$}", "", width = self.indent)?;

        match table.object(self.id).attrs() {
            ObjectAttrs::Program { scope } => {
                writeln!(f, "Program {}", name)?;
                write!(f, "{}", table.display_scope(*scope, self.indent + INDENT_STEP))
            }
            ObjectAttrs::Constant { value } => {
                write!(f, "Const {} = ", name)?;
                write_opt(f, value.as_ref())?;
                writeln!(f)
            }
            ObjectAttrs::TypeAlias { actual } => {
                write!(f, "Type {} = ", name)?;
                write_opt(f, actual.as_ref())?;
                writeln!(f)
            }
            ObjectAttrs::Variable { ty, .. } => {
                write!(f, "Var {} : ", name)?;
                write_opt(f, ty.as_ref())?;
                writeln!(f)
            }
            ObjectAttrs::Parameter { ty, mode, .. } => {
                match mode {
                    ParamMode::ByValue => write!(f, "Param {} : ", name)?,
                    ParamMode::ByReference => write!(f, "Param VAR {} : ", name)?,
                }
                write_opt(f, ty.as_ref())?;
                writeln!(f)
            }
            ObjectAttrs::Function {
                return_type, scope, ..
            } => {
                write!(f, "Function {} : ", name)?;
                write_opt(f, return_type.as_ref())?;
                writeln!(f)?;
                write!(f, "{}", table.display_scope(*scope, self.indent + INDENT_STEP))
            }
            ObjectAttrs::Procedure { scope, .. } => {
                writeln!(f, "Procedure {}", name)?;
                write!(f, "{}", table.display_scope(*scope, self.indent + INDENT_STEP))
            }
        }
    }
}

impl fmt::Display for ListDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.list {
            write!(f, "{}", self.table.dump_object(*id, self.indent))?;
        }
        Ok(())
    }
}

impl SymTab {
    pub fn dump_object(&self, id: ObjectId, indent: usize) -> ObjectDump<'_> {
        ObjectDump {
            table: self,
            id,
            indent,
        }
    }

    pub fn display_list<'a>(&'a self, list: &'a [ObjectId], indent: usize) -> ListDump<'a> {
        ListDump {
            table: self,
            list,
            indent,
        }
    }

    pub fn display_scope(&self, scope: ScopeId, indent: usize) -> ListDump<'_> {
        self.display_list(self.scope(scope).objects(), indent)
    }

    /// Dump of the program and everything nested in it
    pub fn dump_program(&self) -> String {
        self.program()
            .map(|program| self.dump_object(program, 0).to_string())
            .unwrap_or_default()
    }

    /// Dump of the predeclared global environment
    pub fn dump_globals(&self) -> String {
        self.display_list(self.globals(), 0).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConstantValue, Type};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dump_globals() {
        let table = SymTab::new();
        let expected = "\
Function READC : Char
Function READI : Int
Procedure WRITEI
    Param i : Int
Procedure WRITEC
    Param ch : Char
Procedure WRITELN
";
        assert_eq!(table.dump_globals(), expected);
    }

    #[test]
    fn test_dump_unset_attributes() {
        let mut table = SymTab::new();
        let program = table.create_program_object("P").unwrap();
        table.enter_block(table.body_scope(program).unwrap()).unwrap();

        let konst = table.create_constant_object("c").unwrap();
        table.declare_object(konst).unwrap();
        let alias = table.create_type_object("t").unwrap();
        table.declare_object(alias).unwrap();
        let func = table.create_function_object("f").unwrap();
        table.declare_object(func).unwrap();

        let expected = "\
Program P
    Const c = ?
    Type t = ?
    Function f : ?
";
        assert_eq!(table.dump_program(), expected);
    }

    #[test]
    fn test_dump_by_reference_param() {
        let mut table = SymTab::new();
        let program = table.create_program_object("P").unwrap();
        table.enter_block(table.body_scope(program).unwrap()).unwrap();
        let proc = table.create_procedure_object("swap").unwrap();
        table.declare_object(proc).unwrap();
        table.enter_block(table.body_scope(proc).unwrap()).unwrap();
        let a = table.create_parameter_object("a", ParamMode::ByReference, proc).unwrap();
        table.set_parameter_type(a, Type::array(2, Type::char())).unwrap();
        table.declare_object(a).unwrap();
        let k = table.create_constant_object("k").unwrap();
        table.set_constant_value(k, ConstantValue::char('x')).unwrap();
        table.declare_object(k).unwrap();

        let expected = "\
Program P
    Procedure swap
        Param VAR a : Arr(2,Char)
        Const k = 'x'
";
        assert_eq!(table.dump_program(), expected);
    }

    #[test]
    fn test_dump_without_program() {
        assert_eq!(SymTab::new().dump_program(), "");
    }
}
