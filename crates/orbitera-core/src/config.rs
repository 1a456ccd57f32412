use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub contact: ContactSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Parses a config document. Missing sections and keys take their defaults.
    pub fn from_toml_str(content: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Zero latency everywhere; for tests and scripted runs.
    pub fn without_delays() -> Self {
        let mut config = Self::default();
        config.auth.login_delay_ms = 0;
        config.contact.submit_delay_ms = 0;
        config
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AuthSettings {
    /// Pause before the credential check, mimicking a network round trip.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

impl AuthSettings {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

fn default_login_delay_ms() -> u64 {
    600
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ContactSettings {
    /// Pause before a contact message is stored.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl ContactSettings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

fn default_submit_delay_ms() -> u64 {
    900
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StorageSettings {
    /// Location of the key-value file. `None` uses the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
