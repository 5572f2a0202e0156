//! Client configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{RemindirError, RemindirResult};

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn is_default_server_url(url: &String) -> bool {
    url == DEFAULT_SERVER_URL
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn is_default_timeout_secs(secs: &u64) -> bool {
    *secs == DEFAULT_TIMEOUT_SECS
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Configuration at ~/.config/remindir/config.toml
///
/// Every key can be overridden from the environment with a `REMINDIR_`
/// prefix, e.g. `REMINDIR_SERVER_URL`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RemindirConfig {
    #[serde(default = "default_server_url", skip_serializing_if = "is_default_server_url")]
    pub server_url: String,

    /// Identity of the signed-in user, as issued by the auth provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub accept_invalid_certs: bool,

    #[serde(default = "default_timeout_secs", skip_serializing_if = "is_default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemindirConfig {
    fn default() -> Self {
        RemindirConfig {
            server_url: default_server_url(),
            user_id: None,
            accept_invalid_certs: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RemindirConfig {
    pub fn config_path() -> RemindirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RemindirError::Config("Could not determine config directory".into()))?
            .join("remindir");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented-out default file on first use.
    pub fn load() -> RemindirResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> RemindirResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("REMINDIR"))
            .build()
            .map_err(|e| RemindirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RemindirError::Config(e.to_string()))
    }

    /// Save the current config to ~/.config/remindir/config.toml
    pub fn save(&self) -> RemindirResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> RemindirResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RemindirError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| RemindirError::Config(format!("Could not write config file: {e}")))?;

        log::info!("Wrote config to {}", path.display());
        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RemindirResult<()> {
        let contents = format!(
            "\
# remindir configuration

# Reminder backend:
# server_url = \"{}\"

# Accept self-signed certificates (local development backends):
# accept_invalid_certs = false

# Request timeout in seconds:
# timeout_secs = {}

# Set by `remindir login <user-id>`:
# user_id = \"auth0|...\"
",
            DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RemindirError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RemindirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The signed-in user, or an error explaining how to sign in.
    pub fn require_user(&self) -> RemindirResult<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty()).ok_or_else(|| {
            RemindirError::Config(
                "Not signed in.\n\n\
                Sign in with:\n  \
                remindir login <user-id>"
                    .into(),
            )
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }
}
