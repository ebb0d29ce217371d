use crate::source::{default_sources, Source};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_QR_DIR: &str = "qr_codes";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sources: Vec<Source>,
    pub upstream_proxy: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: PathBuf,
    pub qr_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            upstream_proxy: None,
            timeout_secs: None,
            output_dir: PathBuf::from("."),
            qr_dir: PathBuf::from(DEFAULT_QR_DIR),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", path.display()));
            }
        };
        if config_data.trim().is_empty() {
            return Ok(Settings::default());
        }

        Self::parse(&config_data).with_context(|| format!("invalid {}", path.display()))
    }

    pub fn parse(config_data: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(config_data)?;
        if settings.sources.is_empty() {
            settings.sources = default_sources();
        }
        Ok(settings)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
