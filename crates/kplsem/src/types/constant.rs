//! Literal values attached to constant declarations

use std::fmt;

/// A constant's literal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    Int(i32),
    Char(char),
}

impl ConstantValue {
    pub fn int(value: i32) -> Self {
        ConstantValue::Int(value)
    }

    pub fn char(value: char) -> Self {
        ConstantValue::Char(value)
    }
}

/// Values are scalars, so the copy is always deep
pub fn duplicate_constant_value(value: &ConstantValue) -> ConstantValue {
    *value
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(i) => write!(f, "{}", i),
            ConstantValue::Char(c) => write!(f, "'{}'", c),
        }
    }
}
