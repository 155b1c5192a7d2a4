//! Plugin diagnostics tagged with the output that raised them.

use gqlkit_codegen::{Diagnostic, Severity};
use serde::Serialize;

use super::output::Output;

#[derive(Debug, Clone, Serialize)]
pub struct OutputDiagnostic {
    /// Output path as written in the config.
    pub output: String,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

impl OutputDiagnostic {
    pub fn new(output: impl Into<String>, diagnostic: Diagnostic) -> Self {
        Self {
            output: output.into(),
            diagnostic,
        }
    }

    pub fn severity(&self) -> Severity {
        self.diagnostic.severity
    }

    fn describe(&self) -> String {
        let mut text = format!("{}: {}", self.output, self.diagnostic.message);
        if let Some(location) = &self.diagnostic.location {
            text.push_str(&format!("\n  --> {}", location));
        }
        text
    }

    pub fn render(&self, out: &mut dyn Output) {
        match self.severity() {
            Severity::Error => out.error(&self.describe()),
            Severity::Warning => out.warning(&self.describe()),
            Severity::Info => out.preformatted(&format!("info: {}", self.describe())),
        }
    }
}
