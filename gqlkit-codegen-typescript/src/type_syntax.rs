//! TypeScript spelling of GraphQL type references.

use gqlkit_codegen::TypeSyntax;

/// `T | null` for nullable positions and `Array<T>` for lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsTypeSyntax;

impl TypeSyntax for TsTypeSyntax {
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

#[cfg(test)]
mod tests {
    use gqlkit_ast::TypeRef;
    use gqlkit_codegen::TypeResolver;
    use indexmap::IndexMap;

    use super::*;

    #[test]
    fn test_nested_nullability() {
        let resolver = TypeResolver::new(TsTypeSyntax, IndexMap::new());
        let ty = TypeRef::list(TypeRef::list(TypeRef::non_null(TypeRef::named("ID"))));
        assert_eq!(
            resolver.resolve(&ty, |name| resolver.scalar(name)),
            "Array<Array<string> | null> | null"
        );
    }

    #[test]
    fn test_unmapped_scalar_is_any() {
        let resolver = TypeResolver::new(TsTypeSyntax, IndexMap::new());
        assert_eq!(resolver.scalar("JSON"), "any");
    }
}
