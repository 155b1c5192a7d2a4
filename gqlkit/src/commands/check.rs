use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use gqlkit_config::{CONFIG_FILE_NAME, ConfigFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gqlkit.toml (defaults to ./gqlkit.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config_file = ConfigFile::open(&self.config).unwrap_or_exit();
        let project = ops::load(&config_file)?;
        let report = ops::check(&project);

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .wrap_err("Failed to serialize check report")?;
                println!("{}", json);
            }
        }

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
