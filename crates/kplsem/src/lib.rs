//! KPL Semantics - symbol table core of the KPL semantic analyzer
//!
//! KPL is a small block-structured, Pascal-like language. This library keeps
//! track of declared names, their types and the lexical scope chain in which
//! each name is visible.
//!
//! ## Architecture
//!
//! - **Types** (`types/`): `Int`, `Char` and arrays, plus constant literals
//! - **Symbol table** (`symtab/`): objects, scopes, built-ins and the
//!   declare/lookup/enter/exit protocol
//! - **Checks** (`sema/`): declaration-level name and type checks
//! - **Driver** (`driver/`): reference declaration session
//! - **Common** (`common/`): shared error type

pub mod common;
pub mod types;
pub mod symtab;
pub mod sema;
pub mod driver;

// Re-exports for convenience
pub use common::{SemResult, SemanticError};
pub use sema::DeclChecker;
pub use symtab::{ObjectId, ObjectKind, ParamMode, ScopeId, SymTab, SymTabConfig, TeardownReport};
pub use types::{ConstantValue, Type, compare_type, duplicate_type};
