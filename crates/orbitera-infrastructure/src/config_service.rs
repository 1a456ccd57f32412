//! Loads `config.toml`.

use std::path::{Path, PathBuf};

use orbitera_core::config::AppConfig;
use orbitera_core::error::{OrbiteraError, Result};

use crate::paths::OrbiteraPaths;

/// Reads the application config from disk.
///
/// A missing file yields the defaults; a malformed one is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `config.toml` under the given paths.
    pub fn from_paths(paths: &OrbiteraPaths) -> Result<Self> {
        Ok(Self::new(paths.config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] {:?} not found, using defaults",
                self.path
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        AppConfig::from_toml_str(&content).map_err(|e| {
            OrbiteraError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Writes the default config if no file exists yet, and returns its path.
    pub fn ensure_config_file(&self) -> Result<PathBuf> {
        if self.path.exists() {
            return Ok(self.path.clone());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = toml::to_string_pretty(&AppConfig::default())?;
        std::fs::write(&self.path, template)?;
        tracing::info!("[ConfigService] Created default config at {:?}", self.path);

        Ok(self.path.clone())
    }
}
