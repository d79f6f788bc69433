//! Workspace discovery and config persistence

use crate::error::{Result, WayfareError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "WAYFARE_ROOT";

/// Storage for workspace configuration
pub trait ConfigRepository {
    /// Load configuration from .wayfare/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .wayfare/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .wayfare directory exists
    fn is_initialized(&self) -> bool;

    /// Create .wayfare directory
    fn initialize(&self) -> Result<()>;
}

/// A directory holding a `.wayfare/` folder
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the workspace root.
    /// Checks WAYFARE_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_wayfare_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(WayfareError::Config(format!(
                    "WAYFARE_ROOT is set to '{}' but no .wayfare directory found. \
                    Run 'wayfare init' in that directory or unset WAYFARE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_wayfare_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(WayfareError::NotWayfareDirectory(start.to_path_buf())),
            }
        }
    }

    /// Config of the discovered workspace, or defaults when there is none
    pub fn config_or_default() -> Result<Config> {
        match Self::discover() {
            Ok(workspace) => workspace.load_config(),
            Err(WayfareError::NotWayfareDirectory(path)) => {
                tracing::debug!(path = %path.display(), "no workspace found, using default config");
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    }

    fn has_wayfare_dir(path: &Path) -> bool {
        path.join(".wayfare").is_dir()
    }
}

impl ConfigRepository for Workspace {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_wayfare_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(WayfareError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(".wayfare"))?;
        Ok(())
    }
}
