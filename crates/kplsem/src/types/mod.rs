//! Type and constant models
//!
//! KPL has two primitive types, `Int` and `Char`, plus arrays of any type.
//! Constants carry a literal of one of the primitive types.

mod kpl_type;
mod constant;

pub use kpl_type::{Type, TypeClass, compare_type, duplicate_type};
pub use constant::{ConstantValue, duplicate_constant_value};
