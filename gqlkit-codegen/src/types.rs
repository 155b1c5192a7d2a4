//! Mapping GraphQL type references to target type expressions.

use gqlkit_ast::TypeRef;
use indexmap::IndexMap;
use tracing::debug;

/// How a target language spells the pieces of a type expression.
pub trait TypeSyntax {
    /// Target type for a built-in GraphQL scalar, if the language has one.
    fn builtin_scalar(&self, name: &str) -> Option<&'static str>;

    /// Permissive type used for unmapped scalars and unknown names.
    fn fallback(&self) -> &'static str;

    /// Array/list type around an already resolved element type.
    fn list(&self, inner: &str) -> String;

    /// Nullable form of an already resolved type.
    fn nullable(&self, inner: &str) -> String;
}

/// Resolves [`TypeRef`]s for one language and one scalar table.
///
/// Pure and shareable: resolution never fails and never records anything.
/// Named types other than scalars are left to the caller's `leaf` closure,
/// since only the generation module knows how it spells them.
#[derive(Debug, Clone)]
pub struct TypeResolver<S> {
    syntax: S,
    scalars: IndexMap<String, String>,
}

impl<S: TypeSyntax> TypeResolver<S> {
    /// Create a resolver; `scalars` overrides the built-in defaults.
    pub fn new(syntax: S, scalars: IndexMap<String, String>) -> Self {
        Self { syntax, scalars }
    }

    pub fn syntax(&self) -> &S {
        &self.syntax
    }

    /// Target type for a scalar: configured, then built-in, then fallback.
    pub fn scalar(&self, name: &str) -> String {
        if let Some(mapped) = self.scalars.get(name) {
            return mapped.clone();
        }
        if let Some(builtin) = self.syntax.builtin_scalar(name) {
            return builtin.to_string();
        }
        debug!(scalar = name, fallback = self.syntax.fallback(), "unmapped scalar");
        self.syntax.fallback().to_string()
    }

    /// Whether a scalar has an explicit mapping in the configured table.
    pub fn is_configured(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Resolve a reference; `leaf` spells each named type.
    ///
    /// Every wrapper level without `NonNull` is made nullable, so `[Int!]!`,
    /// `[Int]!`, `[Int!]` and `[Int]` give four distinct expressions.
    pub fn resolve(&self, ty: &TypeRef, mut leaf: impl FnMut(&str) -> String) -> String {
        self.resolve_position(ty, &mut leaf)
    }

    fn resolve_position(&self, ty: &TypeRef, leaf: &mut dyn FnMut(&str) -> String) -> String {
        match ty {
            TypeRef::NonNull(inner) => self.resolve_required(inner, leaf),
            other => {
                let required = self.resolve_required(other, leaf);
                self.syntax.nullable(&required)
            }
        }
    }

    fn resolve_required(&self, ty: &TypeRef, leaf: &mut dyn FnMut(&str) -> String) -> String {
        match ty {
            TypeRef::Named(name) => leaf(name),
            TypeRef::List(inner) => {
                let element = self.resolve_position(inner, leaf);
                self.syntax.list(&element)
            }
            TypeRef::NonNull(inner) => self.resolve_required(inner, leaf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ts;

    impl TypeSyntax for Ts {
        fn builtin_scalar(&self, name: &str) -> Option<&'static str> {
            match name {
                "Int" | "Float" => Some("number"),
                "String" | "ID" => Some("string"),
                "Boolean" => Some("boolean"),
                _ => None,
            }
        }

        fn fallback(&self) -> &'static str {
            "any"
        }

        fn list(&self, inner: &str) -> String {
            format!("Array<{}>", inner)
        }

        fn nullable(&self, inner: &str) -> String {
            format!("{} | null", inner)
        }
    }

    fn resolver() -> TypeResolver<Ts> {
        let mut scalars = IndexMap::new();
        scalars.insert("DateTime".to_string(), "string".to_string());
        TypeResolver::new(Ts, scalars)
    }

    fn int() -> TypeRef {
        TypeRef::named("Int")
    }

    #[test]
    fn test_nullability_at_every_level() {
        let r = resolver();
        let scalar = |name: &str| r.scalar(name);

        let cases = [
            (
                TypeRef::non_null(TypeRef::list(TypeRef::non_null(int()))),
                "Array<number>",
            ),
            (
                TypeRef::non_null(TypeRef::list(int())),
                "Array<number | null>",
            ),
            (
                TypeRef::list(TypeRef::non_null(int())),
                "Array<number> | null",
            ),
            (TypeRef::list(int()), "Array<number | null> | null"),
        ];
        for (ty, expected) in cases {
            assert_eq!(r.resolve(&ty, scalar), expected, "for {}", ty);
        }
    }

    #[test]
    fn test_scalar_table_layers() {
        let r = resolver();
        assert_eq!(r.scalar("DateTime"), "string");
        assert_eq!(r.scalar("Boolean"), "boolean");
        assert_eq!(r.scalar("JSON"), "any");
        assert!(r.is_configured("DateTime"));
        assert!(!r.is_configured("Int"));
    }

    #[test]
    fn test_leaf_spells_named_types() {
        let r = resolver();
        let ty = TypeRef::non_null(TypeRef::named("User"));
        assert_eq!(r.resolve(&ty, |name| format!("Types.{}", name)), "Types.User");
    }
}
