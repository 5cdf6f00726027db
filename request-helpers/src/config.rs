//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: `REQUEST_HELPERS_`, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/request-helpers/{service_name}/config.toml
//! 4. System directory: /etc/request-helpers/{service_name}/config.toml
//! 5. Default values
//!
//! ```toml
//! [service]
//! name = "staff-api"
//! log_level = "debug"
//!
//! [pagination]
//! scheme = "page_size_no"   # or "per_page"
//! fallback = "defaults"     # or "zero"
//! default_page_size = 10
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pagination::PaginationConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "REQUEST_HELPERS_";

const CONFIG_DIR_PREFIX: &str = "request-helpers";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Pagination query handling
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// The service name is inferred from the running binary.
    pub fn load() -> Result<Self> {
        let service_name = std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| CONFIG_DIR_PREFIX.to_string());

        Self::load_for_service(&service_name)
    }

    /// Load configuration for a specific service name
    pub fn load_for_service(service_name: &str) -> Result<Self> {
        let config_paths = Self::find_config_paths(service_name);

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later merges win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses directory discovery. Environment variables still override
    /// values from the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// Candidate config file paths, highest priority first
    fn find_config_paths(service_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX);
        let config_file_path = Path::new(service_name).join("config.toml");
        if let Ok(path) = xdg_dirs.place_config_file(&config_file_path) {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc")
                .join(CONFIG_DIR_PREFIX)
                .join(service_name)
                .join("config.toml"),
        );

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: CONFIG_DIR_PREFIX.to_string(),
                log_level: default_log_level(),
            },
            pagination: PaginationConfig::default(),
        }
    }
}
