//! Per-output plugin selection and options.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Generation modules that can produce an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginKind {
    /// Java resolver interfaces for a GraphQL server.
    JavaResolvers,
    /// Typed TypeScript operation client.
    TypescriptClient,
}

impl PluginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginKind::JavaResolvers => "java-resolvers",
            PluginKind::TypescriptClient => "typescript-client",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PluginKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "java-resolvers" | "java" => Ok(PluginKind::JavaResolvers),
            "typescript-client" | "typescript" | "ts" => Ok(PluginKind::TypescriptClient),
            _ => Err(format!(
                "unknown plugin '{}', expected 'java-resolvers' or 'typescript-client'",
                s
            )),
        }
    }
}

/// How operation documents are made available to generated helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentMode {
    /// Embed each operation as a string literal.
    #[default]
    String,
    /// Embed each operation as a parsed document object (`gql` tag).
    DocumentNode,
    /// Import document objects from another module.
    External,
}

impl DocumentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentMode::String => "string",
            DocumentMode::DocumentNode => "document-node",
            DocumentMode::External => "external",
        }
    }
}

impl fmt::Display for DocumentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for one output.
///
/// Every generation module reads the options it understands and ignores
/// the rest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Scalar name to target type expression.
    pub scalars: IndexMap<String, String>,
    /// Emit type-only imports where the target language has them.
    pub use_type_imports: bool,
    /// Module that already declares schema and operation types.
    pub import_operation_types_from: Option<String>,
    pub document_mode: DocumentMode,
    /// Module exporting `<Name>Document` objects, for [`DocumentMode::External`].
    pub import_documents_from: Option<String>,
    /// Java package, overriding the one derived from the output path.
    pub package: Option<String>,
    /// Java enclosing class, overriding the output file stem.
    pub class_name: Option<String>,
    /// GraphQL type name to Java type, for object, interface and union types.
    pub mappers: IndexMap<String, String>,
}
