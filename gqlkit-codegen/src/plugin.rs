//! The contract between the orchestrator and a generation module.

use gqlkit_ast::{Document, Schema};
use gqlkit_config::PluginConfig;

use crate::Diagnostic;

/// Everything a generation module reads for one output.
#[derive(Debug, Clone, Copy)]
pub struct GenerationInput<'a> {
    pub schema: &'a Schema,
    pub documents: &'a [Document],
    pub config: &'a PluginConfig,
    /// Output path as written in the configuration. Only used to derive
    /// names; never opened.
    pub output_path: &'a str,
}

/// Text for one output unit plus what was reported while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedOutput {
    pub content: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// A generation module.
///
/// Each call builds a fresh visitor, walks once and assembles; nothing is
/// kept between calls.
pub trait Plugin: Send + Sync {
    /// Identifier used in configuration and diagnostics.
    fn name(&self) -> &'static str;

    /// Produce the output text.
    ///
    /// # Errors
    ///
    /// Fails on configuration that makes the output impossible to produce;
    /// invalid operations are reported as diagnostics instead.
    fn generate(&self, input: &GenerationInput<'_>) -> eyre::Result<GeneratedOutput>;
}

/// Header comment lines for files written by `plugin`.
pub fn generated_banner(plugin: &str) -> Vec<String> {
    vec![format!(
        "// Code generated by gqlkit ({}). DO NOT EDIT.",
        plugin
    )]
}
