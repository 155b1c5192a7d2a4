//! Generate operation - run every configured output and write the results.

use eyre::{Context, Result};
use gqlkit_codegen::{GeneratedOutput, GenerationInput};
use gqlkit_config::OutputConfig;
use gqlkit_core::File;
use tracing::info;

use super::Project;
use crate::{
    plugins::plugin_for,
    reports::{
        GenerateReport, GenerationResult, OutputDiagnostic, PreviewFile, PreviewResult,
        WrittenFile, WrittenResult,
    },
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Run the plugin configured for one output.
pub(crate) fn run_output(
    project: &Project<'_>,
    path: &str,
    output: &OutputConfig,
) -> Result<GeneratedOutput> {
    let plugin = plugin_for(output.plugin);
    info!(output = path, plugin = plugin.name(), "generating");

    plugin.generate(&GenerationInput {
        schema: &project.schema,
        documents: &project.documents,
        config: &output.config,
        output_path: path,
    })
}

/// Execute the generate operation.
///
/// Every output is generated in memory before anything is written, so a
/// failing output leaves the files on disk untouched.
pub fn generate(project: &Project<'_>, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut diagnostics = Vec::new();
    let mut generated = Vec::new();

    for (path, output) in &project.config_file.config().generates {
        let result = run_output(project, path, output)
            .wrap_err_with(|| format!("Failed to generate '{}'", path))?;
        diagnostics.extend(
            result
                .diagnostics
                .into_iter()
                .map(|diagnostic| OutputDiagnostic::new(path, diagnostic)),
        );
        generated.push((path, output.plugin.as_str(), result.content));
    }

    let result = if opts.dry_run {
        let files = generated
            .into_iter()
            .map(|(path, _, content)| PreviewFile {
                path: path.clone(),
                content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let files = generated
            .into_iter()
            .map(|(path, plugin, content)| {
                let file = File::new(project.config_file.resolve(path), content);
                let status = file.write()?;
                Ok(WrittenFile {
                    path: file.path().to_path_buf(),
                    plugin,
                    status,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        GenerationResult::Written(WrittenResult { files })
    };

    Ok(GenerateReport {
        diagnostics,
        result,
    })
}
