use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Optional settings file. Every key may be omitted; CLI flags win.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) out_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) commits: Option<PathBuf>,
    #[serde(default)]
    pub(crate) inspirations: Option<PathBuf>,
    #[serde(default)]
    pub(crate) system_prompt: Option<PathBuf>,
    #[serde(default)]
    pub(crate) pages_root: Option<PathBuf>,
}

impl Config {
    /// Load from an explicit path. Unlike discovery, failures are errors.
    pub(crate) fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Search the standard locations; fall back to defaults.
    pub(crate) fn discover() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content, &path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return config;
                    }
                    Err(e) => tracing::warn!("{e}"),
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str::<Config>(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/jsdemo/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("jsdemo").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("jsdemo").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.jsdemo.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".jsdemo.toml"));
        }

        paths
    }
}
