//! Java spelling of GraphQL type references.

use gqlkit_codegen::TypeSyntax;

pub(crate) const LIST_FQN: &str = "java.util.List";
pub(crate) const NULLABLE_FQN: &str = "org.jspecify.annotations.Nullable";

/// Java type syntax with JSpecify nullness.
///
/// Lists are `List<T>` and nullable positions carry the `@Nullable`
/// type-use annotation. Both names are spelled fully qualified when the
/// schema declares a type with the same simple name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaTypeSyntax {
    list: String,
    nullable: String,
}

impl JavaTypeSyntax {
    pub fn new(qualify_list: bool, qualify_nullable: bool) -> Self {
        Self {
            list: if qualify_list { LIST_FQN } else { "List" }.to_string(),
            nullable: if qualify_nullable {
                NULLABLE_FQN
            } else {
                "Nullable"
            }
            .to_string(),
        }
    }

    /// Whether `List` is referenced through an import.
    pub fn imports_list(&self) -> bool {
        self.list == "List"
    }

    /// Whether `Nullable` is referenced through an import.
    pub fn imports_nullable(&self) -> bool {
        self.nullable == "Nullable"
    }
}

impl Default for JavaTypeSyntax {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl TypeSyntax for JavaTypeSyntax {
    fn builtin_scalar(&self, name: &str) -> Option<&'static str> {
        match name {
            "Int" => Some("Integer"),
            "Float" => Some("Double"),
            "String" | "ID" => Some("String"),
            "Boolean" => Some("Boolean"),
            _ => None,
        }
    }

    fn fallback(&self) -> &'static str {
        "Object"
    }

    fn list(&self, inner: &str) -> String {
        format!("{}<{}>", self.list, inner)
    }

    /// A type-use annotation on a qualified name goes before the simple
    /// name: `java.time.@Nullable OffsetDateTime`.
    fn nullable(&self, inner: &str) -> String {
        let head_end = inner.find('<').unwrap_or(inner.len());
        match inner[..head_end].rfind('.') {
            Some(dot) => format!(
                "{}@{} {}",
                &inner[..=dot],
                self.nullable,
                &inner[dot + 1..]
            ),
            None => format!("@{} {}", self.nullable, inner),
        }
    }
}
