//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::{
    OutputDiagnostic,
    output::{Output, Report},
};

/// Report data from an in-memory generation run.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Whether no output raised an error.
    pub valid: bool,
    pub outputs: Vec<CheckedOutput>,
    pub diagnostics: Vec<OutputDiagnostic>,
}

/// One configured output and whether its plugin produced text.
#[derive(Debug, Serialize)]
pub struct CheckedOutput {
    pub path: String,
    pub plugin: &'static str,
    pub generated: bool,
}

impl CheckReport {
    pub fn new(
        config_path: PathBuf,
        outputs: Vec<CheckedOutput>,
        diagnostics: Vec<OutputDiagnostic>,
    ) -> Self {
        let valid = outputs.iter().all(|output| output.generated)
            && !diagnostics
                .iter()
                .any(|diagnostic| diagnostic.severity().is_error());
        Self {
            config_path,
            valid,
            outputs,
            diagnostics,
        }
    }

    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    fn count(&self, pick: impl Fn(&OutputDiagnostic) -> bool) -> usize {
        self.diagnostics.iter().filter(|d| pick(d)).count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            diagnostic.render(out);
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {}: {} error(s), {} warning(s)",
                self.config_path.display(),
                self.count(|d| d.severity().is_error()),
                self.count(|d| d.severity().is_warning()),
            ));
        }

        for output in &self.outputs {
            out.list_item(&format!("{} ({})", output.path, output.plugin));
        }
    }
}

#[cfg(test)]
mod tests {
    use gqlkit_codegen::Diagnostic;

    use super::*;
    use crate::reports::output::BufferOutput;

    fn output(generated: bool) -> CheckedOutput {
        CheckedOutput {
            path: "web/src/sdk.ts".to_string(),
            plugin: "typescript-client",
            generated,
        }
    }

    #[test]
    fn test_warnings_keep_the_report_valid() {
        let report = CheckReport::new(
            PathBuf::from("gqlkit.toml"),
            vec![output(true)],
            vec![OutputDiagnostic::new(
                "web/src/sdk.ts",
                Diagnostic::warning("typescript-client", "anonymous query skipped"),
            )],
        );
        assert!(report.is_valid());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.text,
            "warning: web/src/sdk.ts: anonymous query skipped\n\
             \n\
             ✓ gqlkit.toml is valid\n\
             \x20 - web/src/sdk.ts (typescript-client)\n"
        );
    }

    #[test]
    fn test_failed_output_invalidates_the_report() {
        let report = CheckReport::new(
            PathBuf::from("gqlkit.toml"),
            vec![output(false)],
            vec![OutputDiagnostic::new(
                "web/src/sdk.ts",
                Diagnostic::error("typescript-client", "missing module"),
            )],
        );
        assert!(!report.is_valid());

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.text.contains("✗ gqlkit.toml: 1 error(s), 0 warning(s)\n"));
    }

    #[test]
    fn test_json_shape() {
        let report = CheckReport::new(
            PathBuf::from("gqlkit.toml"),
            vec![output(true)],
            vec![OutputDiagnostic::new(
                "web/src/sdk.ts",
                Diagnostic::warning("typescript-client", "anonymous query skipped")
                    .at("ops.graphql:3:1"),
            )],
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["outputs"][0]["plugin"], "typescript-client");
        let diagnostic = &json["diagnostics"][0];
        assert_eq!(diagnostic["output"], "web/src/sdk.ts");
        assert_eq!(diagnostic["severity"], "warning");
        assert_eq!(diagnostic["phase"], "typescript-client");
        assert_eq!(diagnostic["location"], "ops.graphql:3:1");
    }
}
