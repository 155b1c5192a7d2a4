//! Type references.

use std::fmt;

/// A reference to a schema type as written at a use site.
///
/// `List` and `NonNull` each wrap exactly one inner reference. Wrapper chains
/// are finite trees, so any recursion over them terminates; cycles in a schema
/// only ever pass through [`TypeRef::Named`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named type (`Int`, `User`).
    Named(String),
    /// A list of the inner type (`[T]`).
    List(Box<TypeRef>),
    /// The inner type, required (`T!`).
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Create a named reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap in a list.
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wrap as non-null.
    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// The innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base_name(),
        }
    }

    /// Whether the outermost position is required.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Whether any position along the wrapper chain is a list.
    pub fn has_list(&self) -> bool {
        match self {
            TypeRef::Named(_) => false,
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.has_list(),
        }
    }

    /// Whether any position along the wrapper chain is nullable.
    pub fn has_nullable_position(&self) -> bool {
        match self {
            TypeRef::NonNull(inner) => match inner.as_ref() {
                TypeRef::List(item) => item.has_nullable_position(),
                _ => false,
            },
            _ => true,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeRef {
        TypeRef::named("Int")
    }

    #[test]
    fn test_display_matches_graphql_notation() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(int())));
        assert_eq!(ty.to_string(), "[Int!]!");
        assert_eq!(TypeRef::list(int()).to_string(), "[Int]");
    }

    #[test]
    fn test_base_name_unwraps_every_level() {
        let ty = TypeRef::list(TypeRef::non_null(TypeRef::list(TypeRef::named("User"))));
        assert_eq!(ty.base_name(), "User");
    }

    #[test]
    fn test_nullable_positions() {
        let all_required = TypeRef::non_null(TypeRef::list(TypeRef::non_null(int())));
        assert!(!all_required.has_nullable_position());

        let nullable_items = TypeRef::non_null(TypeRef::list(int()));
        assert!(nullable_items.has_nullable_position());

        assert!(int().has_nullable_position());
        assert!(!TypeRef::non_null(int()).has_nullable_position());
    }

    #[test]
    fn test_has_list() {
        assert!(TypeRef::non_null(TypeRef::list(int())).has_list());
        assert!(!TypeRef::non_null(int()).has_list());
    }
}
