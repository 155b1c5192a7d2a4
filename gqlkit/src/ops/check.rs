//! Check operation - generate in memory and collect diagnostics.

use gqlkit_codegen::Diagnostic;

use super::{Project, generate::run_output};
use crate::reports::{CheckReport, CheckedOutput, OutputDiagnostic};

/// Execute the check operation.
///
/// Unlike generate, an output that fails is reported as an error and the
/// remaining outputs are still checked.
pub fn check(project: &Project<'_>) -> CheckReport {
    let mut outputs = Vec::new();
    let mut diagnostics = Vec::new();

    for (path, output) in &project.config_file.config().generates {
        let plugin = output.plugin.as_str();
        let generated = match run_output(project, path, output) {
            Ok(result) => {
                diagnostics.extend(
                    result
                        .diagnostics
                        .into_iter()
                        .map(|diagnostic| OutputDiagnostic::new(path, diagnostic)),
                );
                true
            }
            Err(err) => {
                diagnostics.push(OutputDiagnostic::new(
                    path,
                    Diagnostic::error(plugin, format!("{:#}", err)),
                ));
                false
            }
        };
        outputs.push(CheckedOutput {
            path: path.clone(),
            plugin,
            generated,
        });
    }

    CheckReport::new(
        project.config_file.path().to_path_buf(),
        outputs,
        diagnostics,
    )
}
