use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content plus file name, shared by the error constructors below.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `key` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_key_span(&self.src, key),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run gqlkit next to a gqlkit.toml or pass --config <path>"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse gqlkit.toml")]
    #[diagnostic(code(gqlkit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(gqlkit::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

/// Find where a key is written in the TOML source.
///
/// Matches a bare `key =` at the start of a line or a quoted `"key"` table
/// segment. Returns `None` rather than guessing.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            return Some(SourceSpan::from((offset + indent, key.len())));
        }
        offset += line.len();
    }

    let quoted = format!("\"{}\"", key);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, key.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bare_key() {
        let src = "documents = []\nschema = []\n";
        let span = find_key_span(src, "schema").unwrap();
        assert_eq!(span.offset(), 15);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_quoted_key() {
        let src = "[generates.\"out/a.ts\"]\nplugin = \"typescript-client\"\n";
        let span = find_key_span(src, "out/a.ts").unwrap();
        assert_eq!(span.offset(), 12);
    }

    #[test]
    fn test_missing_key_has_no_span() {
        assert!(find_key_span("schema = []", "generates").is_none());
    }
}
