use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, warn};

use super::brasil_api::BASE_URL;
use super::http_transport::DEFAULT_TIMEOUT;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("cannot read config: {0}")]
    Read(String),
    #[error("invalid config: {0}")]
    InvalidToml(String),
    #[error("invalid base_url \"{0}\": must start with http:// or https://")]
    InvalidBaseUrl(String),
    #[error("invalid timeout_secs: must be positive")]
    InvalidTimeout,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    timeout_secs: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Loads `explicit` if given (it must exist), otherwise the per-user config
/// file if there is one, otherwise the built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    let Some(dirs) = ProjectDirs::from("", "", "bra") else {
        warn!("cannot determine home directory, using default config");
        return Ok(AppConfig::default());
    };

    let config_path = dirs.config_dir().join("config.toml");
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from_path(&config_path)
}

fn load_config_from_path(config_path: &Path) -> Result<AppConfig, ConfigError> {
    if !config_path.exists() {
        return Err(ConfigError::NotFound(config_path.to_path_buf()));
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| ConfigError::Read(format!("{}: {e}", config_path.display())))?;

    let config = parse_config_str(&content)?;
    debug!(
        path = %config_path.display(),
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "loaded config"
    );
    Ok(config)
}

fn parse_config_str(content: &str) -> Result<AppConfig, ConfigError> {
    let config: ConfigFile =
        toml::from_str(content).map_err(|e| ConfigError::InvalidToml(e.to_string()))?;

    let base_url = match config.base_url {
        Some(url) => {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl(url));
            }
            url.trim_end_matches('/').to_string()
        }
        None => BASE_URL.to_string(),
    };

    let timeout = match config.timeout_secs {
        Some(secs) => {
            let secs = u64::try_from(secs)
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidTimeout)?;
            Duration::from_secs(secs)
        }
        None => DEFAULT_TIMEOUT,
    };

    Ok(AppConfig { base_url, timeout })
}
