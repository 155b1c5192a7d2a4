//! The `typescript-client` generation module.

use gqlkit_codegen::{
    Assembler, GenerateError, GeneratedOutput, GenerationInput, Layout, Plugin, Traversal,
    builder::Indent, generated_banner,
};
use gqlkit_config::DocumentMode;
use tracing::debug;

use crate::{PLUGIN_NAME, visitor::ClientVisitor};

/// Generates one TypeScript module: schema types, per-operation result and
/// variables types, documents, and a typed helper per named operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for Generator {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn generate(&self, input: &GenerationInput<'_>) -> eyre::Result<GeneratedOutput> {
        let config = input.config;
        if config.document_mode == DocumentMode::External && config.import_documents_from.is_none()
        {
            return Err(GenerateError::MissingDocumentsModule.into());
        }
        debug!(
            document_mode = %config.document_mode,
            external_types = config.import_operation_types_from.is_some(),
            "generating client"
        );

        let mut visitor = ClientVisitor::new(input.schema, input.documents, config);
        let types = Traversal::new(input.schema, input.documents).walk(&mut visitor);

        let content = Assembler::new(Layout::Module, Indent::TYPESCRIPT)
            .banner(generated_banner(PLUGIN_NAME))
            .imports(visitor.imports())
            .body(visitor.prelude().into_iter().chain(types).collect())
            .extras(visitor.extras())
            .assemble();

        Ok(GeneratedOutput {
            content,
            diagnostics: visitor.into_diagnostics().into_vec(),
        })
    }
}
