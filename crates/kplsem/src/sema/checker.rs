//! Identifier and type checks against the current scope chain

use crate::common::{SemResult, SemanticError};
use crate::symtab::{ObjectId, ObjectKind, SymTab};
use crate::types::{Type, TypeClass, compare_type};

/// Read-only checker over a symbol table
pub struct DeclChecker<'a> {
    table: &'a SymTab,
}

impl<'a> DeclChecker<'a> {
    pub fn new(table: &'a SymTab) -> Self {
        Self { table }
    }

    /// `name` must not already be declared in the current scope
    pub fn check_fresh_ident(&self, name: &str) -> SemResult<()> {
        let scope = self
            .table
            .current_scope()
            .ok_or_else(|| SemanticError::no_current_scope("check_fresh_ident"))?;
        match self.table.find_in_scope(scope, name) {
            Some(_) => Err(SemanticError::duplicate(name)),
            None => Ok(()),
        }
    }

    pub fn check_declared_ident(&self, name: &str) -> SemResult<ObjectId> {
        self.table
            .lookup_object(name)
            .ok_or_else(|| SemanticError::undeclared("identifier", name))
    }

    pub fn check_declared_constant(&self, name: &str) -> SemResult<ObjectId> {
        self.check_declared_kind(name, ObjectKind::Constant)
    }

    pub fn check_declared_type(&self, name: &str) -> SemResult<ObjectId> {
        self.check_declared_kind(name, ObjectKind::TypeAlias)
    }

    pub fn check_declared_variable(&self, name: &str) -> SemResult<ObjectId> {
        self.check_declared_kind(name, ObjectKind::Variable)
    }

    pub fn check_declared_function(&self, name: &str) -> SemResult<ObjectId> {
        self.check_declared_kind(name, ObjectKind::Function)
    }

    pub fn check_declared_procedure(&self, name: &str) -> SemResult<ObjectId> {
        self.check_declared_kind(name, ObjectKind::Procedure)
    }

    /// Something that can appear on the left of an assignment: a variable, a
    /// parameter, or the function whose body is being analyzed (assigning
    /// its result)
    pub fn check_declared_lvalue_ident(&self, name: &str) -> SemResult<ObjectId> {
        let id = self.check_declared_ident(name)?;
        match self.table.object(id).kind() {
            ObjectKind::Variable | ObjectKind::Parameter => Ok(id),
            ObjectKind::Function if self.current_owner() == Some(id) => Ok(id),
            _ => Err(SemanticError::invalid_kind(name, "an l-value")),
        }
    }

    fn check_declared_kind(&self, name: &str, kind: ObjectKind) -> SemResult<ObjectId> {
        let id = self
            .table
            .lookup_object(name)
            .ok_or_else(|| SemanticError::undeclared(kind.describe(), name))?;
        if self.table.object(id).kind() != kind {
            return Err(SemanticError::invalid_kind(name, kind.describe()));
        }
        Ok(id)
    }

    fn current_owner(&self) -> Option<ObjectId> {
        self.table
            .current_scope()
            .map(|scope| self.table.scope(scope).owner())
    }

    pub fn check_int_type(&self, ty: &Type) -> SemResult<()> {
        self.check_class(ty, TypeClass::Int)
    }

    pub fn check_char_type(&self, ty: &Type) -> SemResult<()> {
        self.check_class(ty, TypeClass::Char)
    }

    pub fn check_array_type(&self, ty: &Type) -> SemResult<()> {
        self.check_class(ty, TypeClass::Array)
    }

    pub fn check_basic_type(&self, ty: &Type) -> SemResult<()> {
        if ty.is_basic() {
            Ok(())
        } else {
            Err(SemanticError::type_inconsistency("Int or Char", ty))
        }
    }

    pub fn check_type_equality(&self, expected: &Type, found: &Type) -> SemResult<()> {
        if compare_type(expected, found) {
            Ok(())
        } else {
            Err(SemanticError::type_inconsistency(expected, found))
        }
    }

    fn check_class(&self, ty: &Type, class: TypeClass) -> SemResult<()> {
        if ty.class() == class {
            Ok(())
        } else {
            Err(SemanticError::type_inconsistency(class, ty))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symtab::ParamMode;

    /// PROGRAM P; VAR v : INT; FUNCTION f(x : CHAR) : INT; CONST k = 1;
    /// with the current scope left inside `f`
    fn sample() -> SymTab {
        let mut table = SymTab::new();
        let program = table.create_program_object("P").unwrap();
        table.enter_block(table.body_scope(program).unwrap()).unwrap();

        let var = table.create_variable_object("v").unwrap();
        table.set_variable_type(var, Type::int()).unwrap();
        table.declare_object(var).unwrap();

        let func = table.create_function_object("f").unwrap();
        table.set_return_type(func, Type::int()).unwrap();
        table.declare_object(func).unwrap();
        table.enter_block(table.body_scope(func).unwrap()).unwrap();

        let param = table.create_parameter_object("x", ParamMode::ByValue, func).unwrap();
        table.set_parameter_type(param, Type::char()).unwrap();
        table.declare_object(param).unwrap();

        let konst = table.create_constant_object("k").unwrap();
        table.declare_object(konst).unwrap();
        table
    }

    #[test]
    fn test_fresh_ident() {
        let table = sample();
        let checker = DeclChecker::new(&table);
        assert!(checker.check_fresh_ident("y").is_ok());
        // `v` lives in the enclosing scope, so it may be redeclared here
        assert!(checker.check_fresh_ident("v").is_ok());
        assert_eq!(checker.check_fresh_ident("x"), Err(SemanticError::duplicate("x")));
    }

    #[test]
    fn test_declared_kinds() {
        let table = sample();
        let checker = DeclChecker::new(&table);

        assert!(checker.check_declared_variable("v").is_ok());
        assert!(checker.check_declared_constant("k").is_ok());
        assert!(checker.check_declared_function("READI").is_ok());
        assert!(checker.check_declared_procedure("WRITELN").is_ok());
        assert_eq!(
            checker.check_declared_type("v"),
            Err(SemanticError::invalid_kind("v", "type"))
        );
        assert_eq!(
            checker.check_declared_variable("nope"),
            Err(SemanticError::undeclared("variable", "nope"))
        );
        assert_eq!(
            checker.check_declared_ident("nope"),
            Err(SemanticError::undeclared("identifier", "nope"))
        );
    }

    #[test]
    fn test_lvalues() {
        let table = sample();
        let checker = DeclChecker::new(&table);

        assert!(checker.check_declared_lvalue_ident("v").is_ok());
        assert!(checker.check_declared_lvalue_ident("x").is_ok());
        // Inside `f`, assigning to `f` sets its result
        assert!(checker.check_declared_lvalue_ident("f").is_ok());
        assert_eq!(
            checker.check_declared_lvalue_ident("READI"),
            Err(SemanticError::invalid_kind("READI", "an l-value"))
        );
        assert!(checker.check_declared_lvalue_ident("k").is_err());
    }

    #[test]
    fn test_type_checks() {
        let table = SymTab::new();
        let checker = DeclChecker::new(&table);
        let arr = Type::array(10, Type::int());

        assert!(checker.check_int_type(table.int_type()).is_ok());
        assert!(checker.check_char_type(table.char_type()).is_ok());
        assert!(checker.check_array_type(&arr).is_ok());
        assert!(checker.check_basic_type(&Type::char()).is_ok());
        assert_eq!(
            checker.check_basic_type(&arr),
            Err(SemanticError::type_inconsistency("Int or Char", "Arr(10,Int)"))
        );
        assert_eq!(
            checker.check_int_type(&Type::char()),
            Err(SemanticError::type_inconsistency("Int", "Char"))
        );
    }

    #[test]
    fn test_type_equality() {
        let table = SymTab::new();
        let checker = DeclChecker::new(&table);
        let a = Type::array(10, Type::int());

        assert!(checker.check_type_equality(&a, &Type::array(10, Type::int())).is_ok());
        assert_eq!(
            checker.check_type_equality(&a, &Type::array(9, Type::int())),
            Err(SemanticError::type_inconsistency("Arr(10,Int)", "Arr(9,Int)"))
        );
    }
}
