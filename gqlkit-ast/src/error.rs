use miette::Diagnostic;
use thiserror::Error;

/// Result type for parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse schema '{file}': {message}")]
    #[diagnostic(code(gqlkit::schema_parse))]
    SchemaParse { file: String, message: String },

    #[error("failed to parse document '{file}': {message}")]
    #[diagnostic(code(gqlkit::document_parse))]
    DocumentParse { file: String, message: String },
}
