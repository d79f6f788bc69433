//! Error types for wayfare

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wayfare
#[derive(Debug, Error)]
pub enum WayfareError {
    #[error("Not a wayfare directory: {0}")]
    NotWayfareDirectory(PathBuf),

    #[error("Invalid trip query: {0}")]
    InvalidQuery(String),

    /// The planner answered with an error or an unexpected body
    #[error("Planner API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WayfareError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WayfareError::NotWayfareDirectory(_) => 2,
            WayfareError::InvalidQuery(_) => 3,
            WayfareError::Api(_) | WayfareError::Http(_) => 4,
            _ => 1,
        }
    }

    /// Message shown inside the page when the itinerary cannot be loaded
    pub fn inline_message(&self) -> String {
        match self {
            WayfareError::Api(msg) => msg.clone(),
            WayfareError::Http(e) if e.is_timeout() => "Request timed out".to_string(),
            WayfareError::Http(e) if e.is_connect() => "Failed to fetch".to_string(),
            _ => self.to_string(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WayfareError::NotWayfareDirectory(path) => {
                format!(
                    "Not a wayfare directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'wayfare init' in this directory to create a config\n\
                    • Navigate to a directory containing .wayfare/\n\
                    • Set WAYFARE_ROOT environment variable to your config directory",
                    path.display()
                )
            }
            WayfareError::InvalidQuery(msg) => {
                format!(
                    "Invalid trip query: {}\n\n\
                    Required: --from, --to, --start, --end\n\
                    Dates use YYYY-MM-DD\n\n\
                    Example:\n\
                    wayfare plan --from Hyderabad --to Goa --start 2025-03-01 --end 2025-03-04",
                    msg
                )
            }
            WayfareError::Api(_) | WayfareError::Http(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check your network connection\n\
                    • Check the planner address: wayfare config api_base\n\
                    • Override it for one run with WAYFARE_API_BASE",
                    self
                )
            }
            WayfareError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: wayfare config hotel_count 4",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WayfareError
pub type Result<T> = std::result::Result<T, WayfareError>;
