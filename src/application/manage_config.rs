//! Config management use case

use crate::error::{Result, WayfareError};
use crate::infrastructure::{Config, ConfigRepository, Workspace};
use std::path::PathBuf;

/// Keys accepted by `wayfare config`
pub const CONFIG_KEYS: &[&str] = &["api_base", "image_count", "hotel_count", "timeout_secs", "output"];

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "api_base" => Ok(config.api_base),
            "image_count" => Ok(config.image_count.to_string()),
            "hotel_count" => Ok(config.hotel_count.to_string()),
            "timeout_secs" => Ok(config.timeout_secs.to_string()),
            "output" => Ok(config.output.display().to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "api_base" => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(WayfareError::Config(format!(
                        "api_base must start with http:// or https://, got '{}'",
                        value
                    )));
                }
                config.api_base = value.trim_end_matches('/').to_string();
            }
            "image_count" => config.image_count = parse_count(key, value)?,
            "hotel_count" => config.hotel_count = parse_count(key, value)?,
            "timeout_secs" => {
                config.timeout_secs = parse_count(key, value)? as u64;
            }
            "output" => config.output = PathBuf::from(value),
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

fn unknown_key(key: &str) -> WayfareError {
    WayfareError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(WayfareError::Config(format!(
            "{} must be a positive whole number, got '{}'",
            key, value
        ))),
    }
}
