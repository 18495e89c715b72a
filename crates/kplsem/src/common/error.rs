//! Error types for symbol table misuse and declaration checks

use thiserror::Error;

/// Semantic error raised by the symbol table or the declaration checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("identifier '{name}' exceeds {max} characters")]
    IdentTooLong { name: String, max: usize },

    #[error("program object already defined as '{name}'")]
    ProgramAlreadyDefined { name: String },

    #[error("no current scope: {operation} requires an entered block")]
    NoCurrentScope { operation: &'static str },

    #[error("cannot enter a block that is not nested in the current scope")]
    UnbalancedBlock,

    #[error("built-in routine '{name}' cannot be extended")]
    SealedScope { name: String },

    #[error("object '{name}' is already declared in a scope")]
    AlreadyDeclared { name: String },

    #[error("'{name}' is a {found}, expected {expected}")]
    KindMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("use of not-yet-typed declaration '{name}'")]
    UnresolvedDeclaration { name: String },

    #[error("duplicate identifier '{name}'")]
    DuplicateIdent { name: String },

    #[error("undeclared {what} '{name}'")]
    Undeclared { what: &'static str, name: String },

    #[error("'{name}' cannot be used as {expected}")]
    InvalidKind { name: String, expected: &'static str },

    #[error("type inconsistency: expected {expected}, found {found}")]
    TypeInconsistency { expected: String, found: String },

    #[error("ownership violation: object '{name}' is reachable from more than one owner")]
    OwnershipViolation { name: String },
}

impl SemanticError {
    pub fn no_current_scope(operation: &'static str) -> Self {
        Self::NoCurrentScope { operation }
    }

    pub fn kind_mismatch(
        name: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::KindMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedDeclaration { name: name.into() }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateIdent { name: name.into() }
    }

    pub fn undeclared(what: &'static str, name: impl Into<String>) -> Self {
        Self::Undeclared {
            what,
            name: name.into(),
        }
    }

    pub fn invalid_kind(name: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidKind {
            name: name.into(),
            expected,
        }
    }

    pub fn type_inconsistency(expected: impl ToString, found: impl ToString) -> Self {
        Self::TypeInconsistency {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

pub type SemResult<T> = Result<T, SemanticError>;
