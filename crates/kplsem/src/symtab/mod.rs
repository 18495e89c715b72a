//! Symbol table: objects, scopes and the declaration protocol
//!
//! The parser drives the table with one `create_*_object` plus one
//! `declare_object` per declaration, bracketing routine bodies with
//! `enter_block` / `exit_block`. Lookups resolve names against a single
//! object list or the whole current scope chain.

mod builtins;
mod display;
mod object;
mod scope;
mod table;
mod teardown;

pub use display::{ListDump, ObjectDump};
pub use object::{Object, ObjectAttrs, ObjectId, ObjectKind, ParamMode, ScopeId};
pub use scope::{Scope, add_object};
pub use table::SymTab;
pub use teardown::TeardownReport;

/// Default identifier bound of the language
pub const DEFAULT_MAX_IDENT_LEN: usize = 15;

/// Symbol table configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymTabConfig {
    /// Longest accepted identifier, in characters
    pub max_ident_len: usize,
}

impl Default for SymTabConfig {
    fn default() -> Self {
        Self {
            max_ident_len: DEFAULT_MAX_IDENT_LEN,
        }
    }
}
