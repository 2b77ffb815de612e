//! Optional TOML configuration.
//!
//! ```toml
//! [eigen]
//! endpoint = "http://localhost:8080/eigenvalues"
//!
//! [log]
//! filter = "qwalk=debug"
//! ```
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const EIGEN_URL_ENV: &str = "QWALK_EIGEN_URL";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub eigen: EigenConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EigenConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub filter: Option<String>,
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.qwalk/config.toml
    dirs_next::home_dir().map(|h| h.join(".qwalk").join("config.toml"))
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(p) = cli_path {
            return Self::from_toml_file(p);
        }
        match default_config_path() {
            Some(p) if p.is_file() => Self::from_toml_file(&p),
            _ => Ok(Self::default()),
        }
    }

    /// `QWALK_EIGEN_URL` wins over the file.
    pub fn eigen_endpoint(&self) -> Option<String> {
        std::env::var(EIGEN_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.eigen.endpoint.clone())
    }
}
