//! Declarable entities and their kind-specific attributes

use std::fmt;

use string_interner::DefaultSymbol;

use crate::types::{ConstantValue, Type};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
        pub struct $name(u32);

        impl $name {
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            pub(crate) fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(ObjectId);
define_id!(ScopeId);

/// Parameter passing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    ByValue,
    ByReference,
}

/// Kind discriminator of an object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Program,
    Constant,
    TypeAlias,
    Variable,
    Function,
    Procedure,
    Parameter,
}

impl ObjectKind {
    pub fn describe(self) -> &'static str {
        match self {
            ObjectKind::Program => "program",
            ObjectKind::Constant => "constant",
            ObjectKind::TypeAlias => "type",
            ObjectKind::Variable => "variable",
            ObjectKind::Function => "function",
            ObjectKind::Procedure => "procedure",
            ObjectKind::Parameter => "parameter",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Kind-specific attributes.
///
/// Types and constant values are owned. Every id is a non-owning handle into
/// the symbol table's arenas: the parameter list indexes objects owned by the
/// routine's body scope, and `owner`/`scope` fields point back up the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectAttrs {
    Program {
        scope: ScopeId,
    },
    Constant {
        value: Option<ConstantValue>,
    },
    TypeAlias {
        actual: Option<Type>,
    },
    Variable {
        ty: Option<Type>,
        /// Scope that was current when the variable was created
        scope: Option<ScopeId>,
    },
    Function {
        params: Vec<ObjectId>,
        return_type: Option<Type>,
        scope: ScopeId,
    },
    Procedure {
        params: Vec<ObjectId>,
        scope: ScopeId,
    },
    Parameter {
        ty: Option<Type>,
        mode: ParamMode,
        owner: ObjectId,
    },
}

impl ObjectAttrs {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectAttrs::Program { .. } => ObjectKind::Program,
            ObjectAttrs::Constant { .. } => ObjectKind::Constant,
            ObjectAttrs::TypeAlias { .. } => ObjectKind::TypeAlias,
            ObjectAttrs::Variable { .. } => ObjectKind::Variable,
            ObjectAttrs::Function { .. } => ObjectKind::Function,
            ObjectAttrs::Procedure { .. } => ObjectKind::Procedure,
            ObjectAttrs::Parameter { .. } => ObjectKind::Parameter,
        }
    }
}

/// A named, declarable entity
#[derive(Debug, Clone)]
pub struct Object {
    pub(crate) name: DefaultSymbol,
    pub(crate) attrs: ObjectAttrs,
    /// Set once the object has an owning container (a scope, the global list,
    /// or the table itself for the program)
    pub(crate) registered: bool,
}

impl Object {
    pub(crate) fn new(name: DefaultSymbol, attrs: ObjectAttrs) -> Self {
        Self {
            name,
            attrs,
            registered: false,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.attrs.kind()
    }

    pub fn attrs(&self) -> &ObjectAttrs {
        &self.attrs
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Body scope of a program, function or procedure
    pub fn body_scope(&self) -> Option<ScopeId> {
        match &self.attrs {
            ObjectAttrs::Program { scope }
            | ObjectAttrs::Function { scope, .. }
            | ObjectAttrs::Procedure { scope, .. } => Some(*scope),
            _ => None,
        }
    }

    /// Parameter list of a function or procedure, in declaration order
    pub fn params(&self) -> Option<&[ObjectId]> {
        match &self.attrs {
            ObjectAttrs::Function { params, .. } | ObjectAttrs::Procedure { params, .. } => {
                Some(params)
            }
            _ => None,
        }
    }

    pub(crate) fn params_mut(&mut self) -> Option<&mut Vec<ObjectId>> {
        match &mut self.attrs {
            ObjectAttrs::Function { params, .. } | ObjectAttrs::Procedure { params, .. } => {
                Some(params)
            }
            _ => None,
        }
    }

    pub fn param_mode(&self) -> Option<ParamMode> {
        match &self.attrs {
            ObjectAttrs::Parameter { mode, .. } => Some(*mode),
            _ => None,
        }
    }
}
