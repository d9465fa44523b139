use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// Write logs here instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub editor: EditorSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSection {
    pub history_limit: usize,
    pub detect_markup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            editor: EditorSection::default(),
        }
    }
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            history_limit: 100,
            detect_markup: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the log file path
        config.log_file = config
            .log_file
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/proseweave");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
