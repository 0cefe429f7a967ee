//! Dashboard configuration file support.
//!
//! Settings are read from a TOML file with a `[data]` section (input paths)
//! and a `[server]` section (bind address). Every field has a default, so an
//! empty file or no file at all yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Input file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_daily_csv")]
    pub daily_csv: PathBuf,
    #[serde(default = "default_hourly_csv")]
    pub hourly_csv: PathBuf,
    #[serde(default = "default_logo")]
    pub logo: PathBuf,
}

/// Bind address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_daily_csv() -> PathBuf {
    PathBuf::from("dashboard/day_clean.csv")
}

fn default_hourly_csv() -> PathBuf {
    PathBuf::from("dashboard/hour_clean.csv")
}

fn default_logo() -> PathBuf {
    PathBuf::from("dashboard/logo_freepik.jpg")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            daily_csv: default_daily_csv(),
            hourly_csv: default_hourly_csv(),
            logo: default_logo(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(DashboardError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            DashboardError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in the current directory, then
    /// `backend/`, then the parent directory.
    pub fn from_default_location() -> DashboardResult<Self> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(DashboardError::Configuration(
            "No dashboard.toml found in standard locations".to_string(),
        ))
    }

    /// Resolve the configuration the server starts with.
    ///
    /// An explicit `DASHBOARD_CONFIG` file must load. Without it the default
    /// locations are tried and built-in defaults used when none exists.
    pub fn load() -> DashboardResult<Self> {
        let config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match Self::from_default_location() {
                Ok(config) => config,
                Err(_) => {
                    tracing::info!("No dashboard.toml found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env_overrides()
    }

    /// Apply `HOST`, `PORT` and `DASHBOARD_*` path overrides.
    pub fn apply_env_overrides(mut self) -> DashboardResult<Self> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                DashboardError::Configuration(format!("Invalid PORT value: {}", port))
            })?;
        }
        if let Ok(path) = env::var("DASHBOARD_DAILY_CSV") {
            self.data.daily_csv = PathBuf::from(path);
        }
        if let Ok(path) = env::var("DASHBOARD_HOURLY_CSV") {
            self.data.hourly_csv = PathBuf::from(path);
        }
        if let Ok(path) = env::var("DASHBOARD_LOGO") {
            self.data.logo = PathBuf::from(path);
        }
        Ok(self)
    }

    /// `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
