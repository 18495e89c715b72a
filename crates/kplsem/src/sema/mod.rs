//! Declaration checks
//!
//! Name and type checks the parser runs before registering or using a
//! declaration, built on top of symbol table lookups.

mod checker;

pub use checker::DeclChecker;
