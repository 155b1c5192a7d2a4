//! The `gqlkit.toml` root table.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::{Error, PluginConfig, PluginKind, Result, error::SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "gqlkit.toml";

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SDL files, relative to the configuration file.
    #[serde(deserialize_with = "one_or_many")]
    pub schema: Vec<String>,

    /// Operation files or directories, relative to the configuration file.
    #[serde(default, deserialize_with = "one_or_many")]
    pub documents: Vec<String>,

    /// Outputs keyed by path, in declaration order.
    #[serde(default)]
    pub generates: IndexMap<String, OutputConfig>,
}

/// One `[generates."<path>"]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub plugin: PluginKind,
    #[serde(default)]
    pub config: PluginConfig,
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(path) => vec![path],
        OneOrMany::Many(paths) => paths,
    })
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

/// Parse and validate configuration content.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.schema.iter().all(|path| path.trim().is_empty()) {
        return Err(ctx.validation_error("at least one schema file is required", "schema"));
    }

    if config.generates.is_empty() {
        return Err(ctx.validation_error(
            "no outputs configured, add a [generates.\"<path>\"] table",
            "generates",
        ));
    }

    for path in config.generates.keys() {
        if path.trim().is_empty() {
            return Err(ctx.validation_error("output path must not be empty", "generates"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentMode;

    #[test]
    fn test_minimal_config() {
        let config = Config::from_str(
            r#"
            schema = "schema.graphql"

            [generates."out/Resolvers.java"]
            plugin = "java-resolvers"
            "#,
        )
        .unwrap();

        assert_eq!(config.schema, vec!["schema.graphql"]);
        assert!(config.documents.is_empty());
        let output = &config.generates["out/Resolvers.java"];
        assert_eq!(output.plugin, PluginKind::JavaResolvers);
        assert_eq!(output.config, PluginConfig::default());
    }

    #[test]
    fn test_outputs_keep_declaration_order() {
        let config = Config::from_str(
            r#"
            schema = ["a.graphql", "b.graphql"]
            documents = ["ops"]

            [generates."z.ts"]
            plugin = "typescript-client"

            [generates."a.ts"]
            plugin = "typescript-client"
            config = { document_mode = "external", import_documents_from = "./documents" }
            "#,
        )
        .unwrap();

        let paths: Vec<&str> = config.generates.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["z.ts", "a.ts"]);
        let second = &config.generates["a.ts"].config;
        assert_eq!(second.document_mode, DocumentMode::External);
        assert_eq!(second.import_documents_from.as_deref(), Some("./documents"));
    }

    #[test]
    fn test_missing_outputs_is_rejected() {
        let err = Config::from_str("schema = \"schema.graphql\"").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_schema_list_is_rejected() {
        let err = Config::from_str(
            r#"
            schema = []

            [generates."a.ts"]
            plugin = "typescript-client"
            "#,
        )
        .unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert!(message.contains("schema"));
                assert!(span.is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_plugin_is_a_parse_error() {
        let err = Config::from_str(
            r#"
            schema = "schema.graphql"

            [generates."a.py"]
            plugin = "python-client"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
