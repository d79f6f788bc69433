//! Configuration management

use crate::error::{Result, WayfareError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Planner backend used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "https://agentic-travel-guide-1.onrender.com";

/// Environment variable overriding `api_base`
pub const API_BASE_ENV: &str = "WAYFARE_API_BASE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the planning API
    pub api_base: String,
    /// Number of gallery images to request
    pub image_count: usize,
    /// Number of hotels to request
    pub hotel_count: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Default export path
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: DEFAULT_API_BASE.to_string(),
            image_count: 6,
            hotel_count: 6,
            timeout_secs: 60,
            output: PathBuf::from("travel_plan.html"),
        }
    }
}

impl Config {
    /// Load config from .wayfare/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".wayfare").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WayfareError::NotWayfareDirectory(path.to_path_buf())
            } else {
                WayfareError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| WayfareError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .wayfare/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let wayfare_dir = path.join(".wayfare");
        let config_path = wayfare_dir.join("config.toml");

        if !wayfare_dir.exists() {
            fs::create_dir(&wayfare_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// API base URL, preferring the environment override, without a trailing slash
    pub fn get_api_base(&self) -> String {
        std::env::var(API_BASE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.api_base.clone())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
