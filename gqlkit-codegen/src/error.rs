use thiserror::Error;

use crate::NamespaceError;

/// Configuration problems that stop one output from being generated.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot derive a namespace from output path '{path}'")]
    InvalidOutputPath {
        path: String,
        #[source]
        source: NamespaceError,
    },

    #[error("document_mode \"external\" requires import_documents_from")]
    MissingDocumentsModule,

    #[error("'{0}' is not a valid class name")]
    InvalidClassName(String),
}
