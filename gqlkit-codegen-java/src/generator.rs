//! The `java-resolvers` generation module.

use gqlkit_codegen::{
    Assembler, GenerateError, GeneratedOutput, GenerationInput, Layout, Plugin, Traversal,
    builder::Indent, default_namespace, generated_banner,
};
use gqlkit_core::is_identifier;
use tracing::debug;

use crate::{PLUGIN_NAME, naming::JAVA_NAMING, visitor::ResolverVisitor};

/// Generates one Java file holding resolver interfaces for every schema type.
///
/// The file declares a single public class (named after the output file, or
/// `class_name`) in the package derived from the output path (or
/// `package`). Operation documents are not used.
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
        let namespace = default_namespace(input.output_path).map_err(|source| {
            GenerateError::InvalidOutputPath {
                path: input.output_path.to_string(),
                source,
            }
        })?;
        let package = input.config.package.clone().unwrap_or(namespace);
        let class_name = class_name(input)?;
        debug!(%package, %class_name, "generating resolvers");

        let mut visitor = ResolverVisitor::new(input.schema, input.config, &class_name);
        let body = Traversal::new(input.schema, input.documents).walk(&mut visitor);

        let content = Assembler::new(
            Layout::Enclosed {
                header: format!("public class {} {{", class_name),
                close: "}".to_string(),
            },
            Indent::JAVA,
        )
        .banner(generated_banner(PLUGIN_NAME))
        .namespace(format!("package {};", package))
        .imports(visitor.imports())
        .body(body)
        .assemble();

        Ok(GeneratedOutput {
            content,
            diagnostics: visitor.into_diagnostics().into_vec(),
        })
    }
}

/// The enclosing class name: configured, or the output file's stem.
fn class_name(input: &GenerationInput<'_>) -> Result<String, GenerateError> {
    let name = match &input.config.class_name {
        Some(name) => name.clone(),
        None => file_stem(input.output_path).to_string(),
    };
    if is_identifier(&name) && !JAVA_NAMING.is_reserved(&name) {
        Ok(name)
    } else {
        Err(GenerateError::InvalidClassName(name))
    }
}

fn file_stem(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file.split_once('.') {
        Some((stem, _)) => stem,
        None => file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("src/main/java/com/acme/Resolvers.java"), "Resolvers");
        assert_eq!(file_stem(r"out\Types.java"), "Types");
        assert_eq!(file_stem("Resolvers"), "Resolvers");
        assert_eq!(file_stem("out/api-v2.java"), "api-v2");
    }
}
