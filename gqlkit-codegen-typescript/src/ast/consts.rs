//! TypeScript const declaration builder.

use gqlkit_codegen::builder::CodeBuilder;

/// Builder for exported TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
        }
    }

    /// Annotate the binding (`DocumentNode` for parsed documents).
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Multi-line values (document template literals) are written at the
    /// builder's depth, so they must only be rendered at the top level.
    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        builder.line(&format!(
            "export const {}{} = {};",
            self.name, type_annotation, self.value
        ))
    }

    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
