use crate::RECOMMEND_SERVICE_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;
use models::recommend::builder::MAX_TOP_K;

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

/// Environment variable selecting the target deployment of the
/// recommendation service. Overrides the config file when set.
pub const BASE_URL_ENV_KEY: &str = "RECOMMENDER_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the recommendation service. `None` means the compiled-in
    /// default deployment.
    pub base_url: Option<String>,

    /// Result-count bound sent as `top_k` in the request body.
    #[serde(default = "default_top_k")]
    pub top_k: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            top_k: default_top_k(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub service: ServiceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            service: ServiceConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_top_k() -> u32 {
    10
}

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// A missing file is not an error; it yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if the file exists but is unreadable,
    /// corrupted, or fails validation.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// Uses temp file + rename for atomicity (no corruption on crash).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - Directory creation fails
    /// - Serialization fails
    /// - Write fails
    /// - Rename fails
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.service.top_k == 0 || self.service.top_k > MAX_TOP_K {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid top_k: {} (must be 1-{})",
                    self.service.top_k, MAX_TOP_K
                ),
            });
        }

        if let Some(ref url) = self.service.base_url {
            if url.is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: "base_url cannot be empty string".to_string(),
                });
            }

            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Invalid URL format: {}", url),
                });
            }
        }

        Ok(())
    }

    /// Resolve the effective base URL.
    ///
    /// Precedence: environment override, then config file, then the
    /// compiled-in default deployment.
    pub fn resolve_base_url(&self) -> String {
        if let Ok(url) = std::env::var(BASE_URL_ENV_KEY) {
            if !url.is_empty() {
                info!("Base URL from {BASE_URL_ENV_KEY} environment override");
                return url;
            }
        }

        self.service
            .base_url
            .clone()
            .unwrap_or_else(|| RECOMMEND_SERVICE_BASE_URL.to_string())
    }
}
