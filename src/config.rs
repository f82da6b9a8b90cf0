use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::clipboard::ClipboardBackend;
use crate::error::{ConfigError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Include hidden paths without passing --all
    pub include_hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy the tree to the clipboard
    pub enabled: bool,
    /// Backend: auto, pbcopy, wl-copy, xclip, xsel, clip, none
    pub backend: String,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: "auto".to_string(),
        }
    }
}

impl ClipboardConfig {
    /// Effective backend; a disabled clipboard is `None`
    pub fn backend(&self) -> std::result::Result<ClipboardBackend, ConfigError> {
        if !self.enabled {
            return Ok(ClipboardBackend::None);
        }
        self.backend.parse()
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => {
                    tracing::debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config = Self::parse(&content, &path)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.clipboard.backend.parse::<ClipboardBackend>()?;
        Ok(())
    }

    /// `<config_dir>/repo-tree/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("repo-tree").join("config.toml"))
    }
}
