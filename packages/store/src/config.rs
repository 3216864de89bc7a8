//! # Client configuration: `config.toml`
//!
//! Optional TOML file read by native builds at startup (web builds always
//! use the defaults). Every section is `#[serde(default)]`, so a missing or
//! empty file is equivalent to [`ClientConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "https://notes-api.dicoding.dev/v1"
//!
//! [storage]
//! dir = "/home/me/.notes"   # override the preference file directory
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Notes API endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://notes-api.dicoding.dev/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Where native builds keep the preference file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory when set.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}
