//! TypeScript import builder.

use gqlkit_codegen::builder::CodeBuilder;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    namespace: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            namespace: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import the whole module under an alias (`* as Alias`).
    pub fn namespace(mut self, alias: impl Into<String>) -> Self {
        self.namespace = Some(alias.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import a named export with an inline `type` modifier.
    pub fn named_type(mut self, name: impl Into<String>) -> Self {
        self.named.push(format!("type {}", name.into()));
        self
    }

    /// Make this a type-only import (`import type ...`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&self.statement())
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }

    /// The statement without a trailing newline.
    pub fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        match (&self.namespace, self.named.is_empty()) {
            (Some(alias), _) => {
                format!("import {}* as {} from \"{}\";", type_kw, alias, self.from)
            }
            (None, false) => {
                format!(
                    "import {}{{ {} }} from \"{}\";",
                    type_kw,
                    self.named.join(", "),
                    self.from
                )
            }
            (None, true) => {
                format!("import \"{}\";", self.from)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("graphql").named("print").named("parse").build();
        assert_eq!(i, "import { print, parse } from \"graphql\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("graphql")
            .named("DocumentNode")
            .type_only()
            .build();
        assert_eq!(i, "import type { DocumentNode } from \"graphql\";\n");
    }

    #[test]
    fn test_inline_type_modifier() {
        let i = Import::new("graphql")
            .named_type("DocumentNode")
            .named("print")
            .build();
        assert_eq!(i, "import { type DocumentNode, print } from \"graphql\";\n");
    }

    #[test]
    fn test_namespace_import() {
        let i = Import::new("./types").namespace("Types").type_only().build();
        assert_eq!(i, "import type * as Types from \"./types\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill").build();
        assert_eq!(i, "import \"./polyfill\";\n");
    }
}
