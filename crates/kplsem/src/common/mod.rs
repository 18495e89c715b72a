//! Common infrastructure shared across the symbol table and its checks

mod error;

pub use error::{SemResult, SemanticError};
