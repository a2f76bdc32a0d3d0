use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::fs::static_files::StaticFiles;

/// Top-level server configuration.
///
/// Every field has a default, so an empty YAML document (or no file at all)
/// yields a server on `localhost:8080` serving `./www`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub listen_addr: String,
    /// Maximum number of request bytes read per connection
    pub read_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Document root; relative paths are taken from the working directory
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "localhost:8080".to_string(),
            read_limit: 1024,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("www"),
        }
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// `CONFIG` may point at a YAML file; `LISTEN` overrides the listen
    /// address after the file is applied.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&text)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("failed to parse YAML config")
    }

    /// Builds the static file resolver, fixing the document root for the
    /// lifetime of the process.
    pub fn static_files(&self) -> anyhow::Result<StaticFiles> {
        StaticFiles::new(&self.static_files.root)
    }
}
