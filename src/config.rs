use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Config file read by [`Config::load`] when `WEBBY_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "webby.yaml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Loads the config file named by `WEBBY_CONFIG` (or `webby.yaml`), then
    /// applies a `LISTEN` address override from the environment.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("WEBBY_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let listen = std::env::var("LISTEN").ok();

        Self::load_from(Path::new(&path), listen)
    }

    /// Reads `path` if it exists, falling back to defaults when it does not.
    pub fn load_from(path: &Path, listen_override: Option<String>) -> anyhow::Result<Self> {
        let mut cfg = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            Self::from_yaml_str(&raw)
                .with_context(|| format!("invalid config file {}", path.display()))?
        } else {
            Self::default()
        };

        if let Some(addr) = listen_override {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
