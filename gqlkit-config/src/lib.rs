// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Loading and validating `gqlkit.toml`.

mod config;
mod error;
mod file;
mod plugin;

pub use config::{CONFIG_FILE_NAME, Config, OutputConfig, parse_config};
pub use error::{Error, Result, SourceContext};
pub use file::ConfigFile;
pub use plugin::{DocumentMode, PluginConfig, PluginKind};
