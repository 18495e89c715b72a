//! Structural type representation for KPL declarations

use std::fmt;

/// Type class discriminator, useful when only the shape matters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Int,
    Char,
    Array,
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeClass::Int => write!(f, "Int"),
            TypeClass::Char => write!(f, "Char"),
            TypeClass::Array => write!(f, "Arr"),
        }
    }
}

/// A KPL type tree
///
/// An array exclusively owns its element type, so a type is always a tree:
/// never shared, never cyclic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Integer type
    Int,

    /// Character type
    Char,

    /// Array type. `size` is recorded as given, without validation.
    Array {
        size: i32,
        element: Box<Type>,
    },
}

impl Type {
    pub fn int() -> Self {
        Type::Int
    }

    pub fn char() -> Self {
        Type::Char
    }

    /// Array type taking ownership of `element`
    pub fn array(size: i32, element: Type) -> Self {
        Type::Array {
            size,
            element: Box::new(element),
        }
    }

    pub fn class(&self) -> TypeClass {
        match self {
            Type::Int => TypeClass::Int,
            Type::Char => TypeClass::Char,
            Type::Array { .. } => TypeClass::Array,
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Type::Int | Type::Char)
    }

    /// Declared array size, `None` for primitives
    pub fn array_size(&self) -> Option<i32> {
        match self {
            Type::Array { size, .. } => Some(*size),
            _ => None,
        }
    }

    /// Element type, `None` for primitives
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Number of nodes in this type tree (one per array level plus the leaf)
    pub fn node_count(&self) -> usize {
        match self {
            Type::Array { element, .. } => 1 + element.node_count(),
            _ => 1,
        }
    }
}

/// Structural copy of a type.
///
/// The copy is deep: an array's element tree is cloned, never aliased,
/// so the original and the copy are released independently.
pub fn duplicate_type(ty: &Type) -> Type {
    ty.clone()
}

/// Structural type equality.
///
/// Different classes never match and primitives of the same class always do.
/// Two arrays match when their sizes are equal and their element types match.
pub fn compare_type(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Int, Type::Int) | (Type::Char, Type::Char) => true,
        (
            Type::Array { size: size_a, element: elem_a },
            Type::Array { size: size_b, element: elem_b },
        ) => size_a == size_b && compare_type(elem_a, elem_b),
        _ => false,
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Char => write!(f, "Char"),
            Type::Array { size, element } => write!(f, "Arr({},{})", size, element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_primitives() {
        assert!(compare_type(&Type::int(), &Type::int()));
        assert!(compare_type(&Type::char(), &Type::char()));
        assert!(!compare_type(&Type::int(), &Type::char()));
        assert!(!compare_type(&Type::char(), &Type::int()));
    }

    #[test]
    fn test_compare_array_with_primitive() {
        let arr = Type::array(10, Type::int());
        assert!(!compare_type(&arr, &Type::int()));
        assert!(!compare_type(&Type::int(), &arr));
    }

    #[test]
    fn test_compare_arrays_same_shape() {
        let a = Type::array(10, Type::array(5, Type::char()));
        let b = Type::array(10, Type::array(5, Type::char()));
        assert!(compare_type(&a, &b));
    }

    #[test]
    fn test_compare_arrays_size_differs() {
        let a = Type::array(10, Type::int());
        let b = Type::array(11, Type::int());
        assert!(!compare_type(&a, &b));
    }

    #[test]
    fn test_compare_arrays_element_differs() {
        let a = Type::array(10, Type::int());
        let b = Type::array(10, Type::char());
        assert!(!compare_type(&a, &b));

        // Mismatch buried one level down
        let c = Type::array(3, Type::array(4, Type::int()));
        let d = Type::array(3, Type::array(5, Type::int()));
        assert!(!compare_type(&c, &d));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Type::array(4, Type::array(2, Type::int()));
        let copy = duplicate_type(&original);
        assert!(compare_type(&original, &copy));
        drop(original);
        assert_eq!(copy.array_size(), Some(4));
        assert_eq!(copy.element_type(), Some(&Type::array(2, Type::int())));
    }

    #[test]
    fn test_duplicate_primitive() {
        let copy = duplicate_type(&Type::char());
        assert!(compare_type(&copy, &Type::char()));
    }

    #[test]
    fn test_array_size_not_validated() {
        let arr = Type::array(-1, Type::int());
        assert_eq!(arr.array_size(), Some(-1));
    }

    #[test]
    fn test_node_count() {
        assert_eq!(Type::int().node_count(), 1);
        assert_eq!(Type::array(10, Type::array(10, Type::int())).node_count(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Type::int().to_string(), "Int");
        assert_eq!(
            Type::array(10, Type::array(2, Type::char())).to_string(),
            "Arr(10,Arr(2,Char))"
        );
    }
}
