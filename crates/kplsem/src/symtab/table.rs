//! Symbol table state and the declare/lookup/enter/exit protocol

use string_interner::DefaultStringInterner;

use super::SymTabConfig;
use super::builtins;
use super::object::{Object, ObjectAttrs, ObjectId, ObjectKind, ParamMode, ScopeId};
use super::scope::{Scope, add_object};
use crate::common::{SemResult, SemanticError};
use crate::types::{ConstantValue, Type};

/// Symbol table for one compilation pass.
///
/// Objects and scopes live in two arenas owned by the table. Scopes,
/// parameter lists and back-references only hold handles, so releasing the
/// table frees every object and scope exactly once.
#[derive(Debug)]
pub struct SymTab {
    config: SymTabConfig,
    names: DefaultStringInterner,
    pub(crate) objects: Vec<Object>,
    pub(crate) scopes: Vec<Scope>,
    program: Option<ObjectId>,
    globals: Vec<ObjectId>,
    current: Option<ScopeId>,
    int_type: Type,
    char_type: Type,
}

impl SymTab {
    /// Create a symbol table holding the built-in routines
    pub fn new() -> Self {
        Self::with_config(SymTabConfig::default())
    }

    pub fn with_config(config: SymTabConfig) -> Self {
        let mut table = Self {
            config,
            names: DefaultStringInterner::default(),
            objects: Vec::new(),
            scopes: Vec::new(),
            program: None,
            globals: Vec::new(),
            current: None,
            int_type: Type::int(),
            char_type: Type::char(),
        };
        builtins::declare_builtins(&mut table);
        log::debug!("symbol table initialized with {} built-ins", table.globals.len());
        table
    }

    pub fn config(&self) -> &SymTabConfig {
        &self.config
    }

    /// Shared `Int` instance
    pub fn int_type(&self) -> &Type {
        &self.int_type
    }

    /// Shared `Char` instance
    pub fn char_type(&self) -> &Type {
        &self.char_type
    }

    pub fn program(&self) -> Option<ObjectId> {
        self.program
    }

    /// Predeclared global objects, in declaration order
    pub fn globals(&self) -> &[ObjectId] {
        &self.globals
    }

    pub fn current_scope(&self) -> Option<ScopeId> {
        self.current
    }

    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.index()]
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn name(&self, id: ObjectId) -> &str {
        self.names.resolve(self.object(id).name).unwrap_or("")
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    // ==================== Construction ====================

    /// New empty scope. Both links are non-owning.
    pub fn create_scope(&mut self, owner: ObjectId, outer: Option<ScopeId>) -> ScopeId {
        let id = ScopeId::from_index(self.scopes.len());
        self.scopes.push(Scope::new(owner, outer));
        id
    }

    /// Create the program object together with its root scope.
    ///
    /// The program is owned by the table itself and can only be created once.
    pub fn create_program_object(&mut self, name: &str) -> SemResult<ObjectId> {
        self.check_ident_len(name)?;
        if let Some(existing) = self.program {
            return Err(SemanticError::ProgramAlreadyDefined {
                name: self.name(existing).to_string(),
            });
        }

        let id = self.next_object_id();
        let scope = self.create_scope(id, None);
        let id = self.push_object(name, ObjectAttrs::Program { scope });
        self.objects[id.index()].registered = true;
        self.program = Some(id);
        Ok(id)
    }

    pub fn create_constant_object(&mut self, name: &str) -> SemResult<ObjectId> {
        self.check_ident_len(name)?;
        Ok(self.push_object(name, ObjectAttrs::Constant { value: None }))
    }

    pub fn create_type_object(&mut self, name: &str) -> SemResult<ObjectId> {
        self.check_ident_len(name)?;
        Ok(self.push_object(name, ObjectAttrs::TypeAlias { actual: None }))
    }

    /// Create a variable, remembering the scope that is current right now
    pub fn create_variable_object(&mut self, name: &str) -> SemResult<ObjectId> {
        self.check_ident_len(name)?;
        let scope = self.current;
        Ok(self.push_object(name, ObjectAttrs::Variable { ty: None, scope }))
    }

    /// Create a function whose body scope is chained to the current scope.
    ///
    /// The enclosing scope must already be current when this is called.
    pub fn create_function_object(&mut self, name: &str) -> SemResult<ObjectId> {
        self.check_ident_len(name)?;
        Ok(self.new_function(name, None))
    }

    /// Create a procedure whose body scope is chained to the current scope
    pub fn create_procedure_object(&mut self, name: &str) -> SemResult<ObjectId> {
        self.check_ident_len(name)?;
        Ok(self.new_procedure(name))
    }

    /// Create a parameter of `owner`. Registration is left to `declare_object`.
    pub fn create_parameter_object(
        &mut self,
        name: &str,
        mode: ParamMode,
        owner: ObjectId,
    ) -> SemResult<ObjectId> {
        self.check_ident_len(name)?;
        Ok(self.push_object(name, ObjectAttrs::Parameter { ty: None, mode, owner }))
    }

    pub(crate) fn new_function(&mut self, name: &str, return_type: Option<Type>) -> ObjectId {
        let id = self.next_object_id();
        let scope = self.create_scope(id, self.current);
        self.push_object(
            name,
            ObjectAttrs::Function {
                params: Vec::new(),
                return_type,
                scope,
            },
        )
    }

    pub(crate) fn new_procedure(&mut self, name: &str) -> ObjectId {
        let id = self.next_object_id();
        let scope = self.create_scope(id, self.current);
        self.push_object(
            name,
            ObjectAttrs::Procedure {
                params: Vec::new(),
                scope,
            },
        )
    }

    pub(crate) fn push_object(&mut self, name: &str, attrs: ObjectAttrs) -> ObjectId {
        let id = self.next_object_id();
        let name = self.names.get_or_intern(name);
        self.objects.push(Object::new(name, attrs));
        id
    }

    /// Register a built-in routine into the global list
    pub(crate) fn push_global(&mut self, id: ObjectId) {
        self.objects[id.index()].registered = true;
        add_object(&mut self.globals, id);
    }

    fn next_object_id(&self) -> ObjectId {
        ObjectId::from_index(self.objects.len())
    }

    fn check_ident_len(&self, name: &str) -> SemResult<()> {
        let max = self.config().max_ident_len;
        if name.chars().count() > max {
            return Err(SemanticError::IdentTooLong {
                name: name.to_string(),
                max,
            });
        }
        Ok(())
    }

    // ==================== Attributes ====================

    pub fn set_constant_value(&mut self, id: ObjectId, new_value: ConstantValue) -> SemResult<()> {
        match &mut self.objects[id.index()].attrs {
            ObjectAttrs::Constant { value } => {
                *value = Some(new_value);
                Ok(())
            }
            _ => Err(self.mismatch(id, ObjectKind::Constant)),
        }
    }

    pub fn set_alias_type(&mut self, id: ObjectId, ty: Type) -> SemResult<()> {
        match &mut self.objects[id.index()].attrs {
            ObjectAttrs::TypeAlias { actual } => {
                *actual = Some(ty);
                Ok(())
            }
            _ => Err(self.mismatch(id, ObjectKind::TypeAlias)),
        }
    }

    pub fn set_variable_type(&mut self, id: ObjectId, new_ty: Type) -> SemResult<()> {
        match &mut self.objects[id.index()].attrs {
            ObjectAttrs::Variable { ty, .. } => {
                *ty = Some(new_ty);
                Ok(())
            }
            _ => Err(self.mismatch(id, ObjectKind::Variable)),
        }
    }

    pub fn set_return_type(&mut self, id: ObjectId, ty: Type) -> SemResult<()> {
        match &mut self.objects[id.index()].attrs {
            ObjectAttrs::Function { return_type, .. } => {
                *return_type = Some(ty);
                Ok(())
            }
            _ => Err(self.mismatch(id, ObjectKind::Function)),
        }
    }

    pub fn set_parameter_type(&mut self, id: ObjectId, new_ty: Type) -> SemResult<()> {
        match &mut self.objects[id.index()].attrs {
            ObjectAttrs::Parameter { ty, .. } => {
                *ty = Some(new_ty);
                Ok(())
            }
            _ => Err(self.mismatch(id, ObjectKind::Parameter)),
        }
    }

    /// Value of a constant
    pub fn constant_value(&self, id: ObjectId) -> SemResult<ConstantValue> {
        match &self.object(id).attrs {
            ObjectAttrs::Constant { value: Some(value) } => Ok(*value),
            ObjectAttrs::Constant { value: None } => Err(self.unresolved(id)),
            _ => Err(self.mismatch(id, ObjectKind::Constant)),
        }
    }

    /// Declared type of a variable or parameter, or the aliased type of a type
    pub fn declared_type(&self, id: ObjectId) -> SemResult<&Type> {
        match &self.object(id).attrs {
            ObjectAttrs::Variable { ty, .. } | ObjectAttrs::Parameter { ty, .. } => {
                ty.as_ref().ok_or_else(|| self.unresolved(id))
            }
            ObjectAttrs::TypeAlias { actual } => actual.as_ref().ok_or_else(|| self.unresolved(id)),
            _ => Err(SemanticError::kind_mismatch(
                self.name(id),
                "typed declaration",
                self.object(id).kind().describe(),
            )),
        }
    }

    pub fn return_type(&self, id: ObjectId) -> SemResult<&Type> {
        match &self.object(id).attrs {
            ObjectAttrs::Function { return_type, .. } => {
                return_type.as_ref().ok_or_else(|| self.unresolved(id))
            }
            _ => Err(self.mismatch(id, ObjectKind::Function)),
        }
    }

    /// Parameter list of a function or procedure
    pub fn params(&self, id: ObjectId) -> SemResult<&[ObjectId]> {
        self.object(id).params().ok_or_else(|| {
            SemanticError::kind_mismatch(
                self.name(id),
                "function or procedure",
                self.object(id).kind().describe(),
            )
        })
    }

    /// Body scope of a program, function or procedure
    pub fn body_scope(&self, id: ObjectId) -> SemResult<ScopeId> {
        self.object(id).body_scope().ok_or_else(|| {
            SemanticError::kind_mismatch(
                self.name(id),
                "program, function or procedure",
                self.object(id).kind().describe(),
            )
        })
    }

    fn mismatch(&self, id: ObjectId, expected: ObjectKind) -> SemanticError {
        SemanticError::kind_mismatch(
            self.name(id),
            expected.describe(),
            self.object(id).kind().describe(),
        )
    }

    fn unresolved(&self, id: ObjectId) -> SemanticError {
        SemanticError::unresolved(self.name(id))
    }

    // ==================== Blocks and declarations ====================

    /// Make `scope` current. It must be nested directly in the current scope.
    ///
    /// Bodies of the built-in routines are sealed and cannot be entered.
    pub fn enter_block(&mut self, scope: ScopeId) -> SemResult<()> {
        let owner = self.scope(scope).owner;
        if self.globals.contains(&owner) {
            return Err(SemanticError::SealedScope {
                name: self.name(owner).to_string(),
            });
        }
        if self.scope(scope).outer != self.current {
            return Err(SemanticError::UnbalancedBlock);
        }
        log::trace!(
            "enter block of '{}' ({:?})",
            self.name(self.scope(scope).owner),
            scope
        );
        self.current = Some(scope);
        Ok(())
    }

    /// Return to the enclosing scope.
    ///
    /// Leaving the outermost scope leaves no current scope.
    pub fn exit_block(&mut self) -> SemResult<()> {
        let scope = self
            .current
            .ok_or_else(|| SemanticError::no_current_scope("exit_block"))?;
        log::trace!(
            "exit block of '{}' ({:?})",
            self.name(self.scope(scope).owner),
            scope
        );
        self.current = self.scope(scope).outer;
        Ok(())
    }

    /// Register `obj` into the current scope, which takes ownership of it.
    ///
    /// A parameter is also appended to the parameter list of the routine
    /// owning the current scope.
    pub fn declare_object(&mut self, obj: ObjectId) -> SemResult<()> {
        let scope = self
            .current
            .ok_or_else(|| SemanticError::no_current_scope("declare_object"))?;
        if self.object(obj).is_registered() {
            return Err(SemanticError::AlreadyDeclared {
                name: self.name(obj).to_string(),
            });
        }

        if self.object(obj).kind() == ObjectKind::Parameter {
            let owner = self.scope(scope).owner;
            let owner_kind = self.object(owner).kind();
            if matches!(owner_kind, ObjectKind::Function | ObjectKind::Procedure) {
                if let Some(params) = self.objects[owner.index()].params_mut() {
                    add_object(params, obj);
                }
            } else {
                log::warn!(
                    "parameter '{}' declared in a {} scope; not added to any parameter list",
                    self.name(obj),
                    owner_kind
                );
            }
        }

        add_object(&mut self.scopes[scope.index()].objects, obj);
        self.objects[obj.index()].registered = true;
        log::debug!(
            "declared {} '{}' in scope of '{}'",
            self.object(obj).kind(),
            self.name(obj),
            self.name(self.scope(scope).owner)
        );
        Ok(())
    }

    // ==================== Lookup ====================

    /// First object in `list` named exactly `name`
    pub fn find_object(&self, list: &[ObjectId], name: &str) -> Option<ObjectId> {
        // A name that was never interned cannot match any object
        let symbol = self.names.get(name)?;
        list.iter()
            .copied()
            .find(|id| self.object(*id).name == symbol)
    }

    /// Object declared directly in `scope`
    pub fn find_in_scope(&self, scope: ScopeId, name: &str) -> Option<ObjectId> {
        self.find_object(&self.scope(scope).objects, name)
    }

    /// Resolve `name` through the current scope chain, then the globals
    pub fn lookup_object(&self, name: &str) -> Option<ObjectId> {
        let mut scope = self.current;
        while let Some(id) = scope {
            if let Some(obj) = self.find_in_scope(id, name) {
                return Some(obj);
            }
            scope = self.scope(id).outer;
        }
        self.find_object(&self.globals, name)
    }
}

impl Default for SymTab {
    fn default() -> Self {
        Self::new()
    }
}
