//! Generate command report data structures.

use std::path::PathBuf;

use gqlkit_core::WriteResult;

use super::{
    OutputDiagnostic,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Diagnostics from every output, in output order.
    pub diagnostics: Vec<OutputDiagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    pub files: Vec<WrittenFile>,
}

/// One output file after the write step.
#[derive(Debug)]
pub struct WrittenFile {
    /// Resolved path on disk.
    pub path: PathBuf,
    pub plugin: &'static str,
    pub status: WriteResult,
}

impl WrittenResult {
    fn count(&self, status: WriteResult) -> usize {
        self.files.iter().filter(|file| file.status == status).count()
    }
}

/// Result of a dry-run preview.
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            diagnostic.render(out);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.section(&format!("Outputs ({})", written.files.len()));
        for file in &written.files {
            let label = format!("{} ({})", file.path.display(), file.plugin);
            match file.status {
                WriteResult::Written => out.added_item(&label),
                WriteResult::Unchanged => out.list_item(&format!("{}, unchanged", label)),
            }
        }
        out.newline();

        out.key_value(
            "Summary",
            &format!(
                "{} written, {} unchanged",
                written.count(WriteResult::Written),
                written.count(WriteResult::Unchanged)
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use gqlkit_codegen::Diagnostic;

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            diagnostics: vec![OutputDiagnostic::new(
                "web/src/sdk.ts",
                Diagnostic::warning("typescript-client", "anonymous query skipped")
                    .at("ops.graphql:1:1"),
            )],
            result: GenerationResult::Written(WrittenResult {
                files: vec![
                    WrittenFile {
                        path: PathBuf::from("web/src/sdk.ts"),
                        plugin: "typescript-client",
                        status: WriteResult::Written,
                    },
                    WrittenFile {
                        path: PathBuf::from("src/Resolvers.java"),
                        plugin: "java-resolvers",
                        status: WriteResult::Unchanged,
                    },
                ],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.text,
            "warning: web/src/sdk.ts: anonymous query skipped\n  --> ops.graphql:1:1\n\
             \n\
             Outputs (2):\n\
             \x20 + web/src/sdk.ts (typescript-client)\n\
             \x20 - src/Resolvers.java (java-resolvers), unchanged\n\
             \n\
             Summary: 1 written, 1 unchanged\n"
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            diagnostics: Vec::new(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "web/src/sdk.ts".to_string(),
                    content: "export {};".to_string(),
                }],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.text,
            "── web/src/sdk.ts ──\nexport {};\n── Summary ──\n1 files would be generated\n"
        );
    }
}
