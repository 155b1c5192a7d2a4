use std::path::{Path, PathBuf};

use crate::{Config, Error, Result, config::parse_config};

/// A loaded `gqlkit.toml`: its location, raw content and parsed config.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Resolve a path written in the config.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.base_dir().join(relative)
    }
}
