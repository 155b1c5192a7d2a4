//! Names of schema types in the generated module and reference resolution.

use gqlkit_ast::{Schema, TypeDefinition, TypeKind, TypeRef};
use gqlkit_codegen::{Diagnostic, Diagnostics, SymbolTable, TypeResolver, TypeSyntax};
use indexmap::IndexMap;

use crate::{PLUGIN_NAME, naming::TS_NAMING, type_syntax::TsTypeSyntax};

/// Alias under which externally generated types are imported.
pub(crate) const TYPES_ALIAS: &str = "Types";

/// Resolves type references to TypeScript expressions for one module.
///
/// Schema types are declared under names claimed from the module's symbol
/// table. When types come from another module they keep their plain names
/// and are referenced through the `Types.` namespace instead.
#[derive(Debug)]
pub(crate) struct TypeScope<'a> {
    schema: &'a Schema,
    resolver: TypeResolver<TsTypeSyntax>,
    declared: IndexMap<String, String>,
    prefix: String,
}

impl<'a> TypeScope<'a> {
    pub(crate) fn new(
        schema: &'a Schema,
        scalars: IndexMap<String, String>,
        symbols: &mut SymbolTable,
        external_types: bool,
    ) -> Self {
        let mut declared = IndexMap::new();
        for def in schema.types() {
            if matches!(def, TypeDefinition::Scalar(_)) || declared.contains_key(def.name()) {
                continue;
            }
            let name = TS_NAMING.type_name(def.name());
            let name = if external_types {
                name
            } else {
                symbols.claim(&name)
            };
            declared.insert(def.name().to_string(), name);
        }

        Self {
            schema,
            resolver: TypeResolver::new(TsTypeSyntax, scalars),
            declared,
            prefix: if external_types {
                format!("{}.", TYPES_ALIAS)
            } else {
                String::new()
            },
        }
    }

    pub(crate) fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub(crate) fn syntax(&self) -> &TsTypeSyntax {
        self.resolver.syntax()
    }

    /// The declared name of a schema type, without any namespace prefix.
    pub(crate) fn declared_name(&self, graphql_name: &str) -> String {
        self.declared
            .get(graphql_name)
            .cloned()
            .unwrap_or_else(|| TS_NAMING.type_name(graphql_name))
    }

    /// A reference to a generated type, prefixed when types are external.
    pub(crate) fn reference(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Resolve a reference whose named types are scalars, enums or inputs
    /// (or schema types referenced by name).
    pub(crate) fn resolve(
        &self,
        ty: &TypeRef,
        diagnostics: &mut Diagnostics,
        location: Option<&str>,
    ) -> String {
        self.resolver.resolve(ty, |name| match self.schema.kind_of(name) {
            Some(TypeKind::Scalar) => self.resolver.scalar(name),
            Some(_) => self.reference(&self.declared_name(name)),
            None => {
                diagnostics.push(
                    Diagnostic::warning(
                        PLUGIN_NAME,
                        format!("unknown type '{}' mapped to any", name),
                    )
                    .at_opt(location),
                );
                self.syntax().fallback().to_string()
            }
        })
    }

    /// Resolve a reference, spelling its named type with `leaf`.
    pub(crate) fn resolve_with(&self, ty: &TypeRef, leaf: impl FnMut(&str) -> String) -> String {
        self.resolver.resolve(ty, leaf)
    }

    /// Object types an abstract type can resolve to, in schema order.
    pub(crate) fn possible_types(&self, name: &str) -> Vec<&'a str> {
        match self.schema.get(name) {
            Some(TypeDefinition::Union(union)) => {
                union.members.iter().map(String::as_str).collect()
            }
            Some(TypeDefinition::Interface(_)) => self
                .schema
                .types()
                .iter()
                .filter_map(|def| match def {
                    TypeDefinition::Object(object)
                        if object.interfaces.iter().any(|i| i == name) =>
                    {
                        Some(object.name.as_str())
                    }
                    _ => None,
                })
                .collect(),
            Some(TypeDefinition::Object(object)) => vec![object.name.as_str()],
            _ => Vec::new(),
        }
    }

    /// The `__typename` literal type for a selection scope.
    pub(crate) fn typename_literal(&self, name: &str) -> String {
        let possible = self.possible_types(name);
        if possible.is_empty() {
            return "string".to_string();
        }
        possible
            .iter()
            .map(|name| format!("\"{}\"", name))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Whether a fragment on `condition` always applies to `scope`.
    pub(crate) fn always_applies(&self, scope: &str, condition: &str) -> bool {
        scope == condition
            || (self.schema.kind_of(scope) == Some(TypeKind::Object)
                && self.possible_types(condition).contains(&scope))
    }
}

#[cfg(test)]
mod tests {
    use gqlkit_codegen::testing::{CATALOG_SCHEMA, schema};

    use super::*;

    #[test]
    fn test_possible_types() {
        let schema = schema(CATALOG_SCHEMA);
        let mut symbols = SymbolTable::new();
        let scope = TypeScope::new(&schema, IndexMap::new(), &mut symbols, false);

        assert_eq!(scope.possible_types("Node"), vec!["User", "Post"]);
        assert_eq!(scope.possible_types("SearchResult"), vec!["User", "Post"]);
        assert_eq!(scope.typename_literal("User"), "\"User\"");
        assert_eq!(scope.typename_literal("Node"), "\"User\" | \"Post\"");
        assert!(scope.always_applies("User", "Node"));
        assert!(!scope.always_applies("SearchResult", "User"));
    }

    #[test]
    fn test_external_types_are_prefixed() {
        let schema = schema(CATALOG_SCHEMA);
        let mut symbols = SymbolTable::new();
        let scope = TypeScope::new(&schema, IndexMap::new(), &mut symbols, true);
        let mut diagnostics = Diagnostics::new();

        let ty = TypeRef::non_null(TypeRef::named("Role"));
        assert_eq!(scope.resolve(&ty, &mut diagnostics, None), "Types.Role");
        assert!(!symbols.is_taken("Role"));
    }

    #[test]
    fn test_claimed_names_avoid_reserved_symbols() {
        let schema = schema("type GraphQLClient { id: ID }");
        let mut symbols = SymbolTable::new();
        symbols.reserve("GraphQLClient");
        let scope = TypeScope::new(&schema, IndexMap::new(), &mut symbols, false);
        assert_eq!(scope.declared_name("GraphQLClient"), "GraphQLClient_1");
    }

    #[test]
    fn test_unknown_types_are_reported() {
        let schema = schema("type Query { a: Int }");
        let mut symbols = SymbolTable::new();
        let scope = TypeScope::new(&schema, IndexMap::new(), &mut symbols, false);
        let mut diagnostics = Diagnostics::new();

        let ty = TypeRef::named("Missing");
        assert_eq!(
            scope.resolve(&ty, &mut diagnostics, Some("ops.graphql:1:1")),
            "any | null"
        );
        assert_eq!(diagnostics.warning_count(), 1);
    }
}
