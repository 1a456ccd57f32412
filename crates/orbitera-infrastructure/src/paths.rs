//! Unified path management for Orbitera files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/orbitera/          # Config directory (platform equivalent elsewhere)
//! ├── config.toml              # Application configuration
//! ├── local_storage.json       # Persisted key-value storage
//! └── logs/                    # Application logs
//!     └── orbitera.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR_NAME: &str = "orbitera";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for orbitera_core::OrbiteraError {
    fn from(e: PathError) -> Self {
        orbitera_core::OrbiteraError::config(e.to_string())
    }
}

/// Resolves every Orbitera path from one root.
///
/// `OrbiteraPaths::new(None)` uses the platform config directory; tests pass
/// an explicit root.
#[derive(Debug, Clone)]
pub struct OrbiteraPaths {
    root_override: Option<PathBuf>,
}

impl OrbiteraPaths {
    pub fn new(root_override: Option<PathBuf>) -> Self {
        Self { root_override }
    }

    /// Returns the Orbitera configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.root_override {
            Some(root) => Ok(root.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Default location of the persisted key-value storage.
    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("local_storage.json"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_ends_with_app_name() {
        if let Ok(dir) = OrbiteraPaths::new(None).config_dir() {
            assert!(dir.ends_with("orbitera"));
        }
    }

    #[test]
    fn test_files_live_under_root() {
        let paths = OrbiteraPaths::new(Some(PathBuf::from("/tmp/orbitera-test")));
        let root = paths.config_dir().unwrap();

        let config = paths.config_file().unwrap();
        assert!(config.starts_with(&root));
        assert!(config.ends_with("config.toml"));

        let storage = paths.storage_file().unwrap();
        assert!(storage.ends_with("local_storage.json"));

        assert!(paths.logs_dir().unwrap().ends_with("logs"));
    }
}
