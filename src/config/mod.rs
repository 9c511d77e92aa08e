//! Configuration management for the Arpio CLI

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::{ARPIO_API_URL, ClientSettings};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Arpio API base URL; the public service when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Arpio account every request is scoped to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// API key ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_id: Option<String>,

    /// API key secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_secret: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Values supplied on the command line or through `ARPIO_*` variables.
/// Each one that is set wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub account_id: Option<String>,
    pub api_key_id: Option<String>,
    pub api_key_secret: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".arpio").join("config.yaml"))
    }

    /// Resolve an explicit path, falling back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration if the file exists, otherwise start empty.
    ///
    /// Lets a fully env-configured run work without a config file.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save configuration to `path`, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Holds the API key secret
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply command line / environment overrides on top of the file.
    pub fn apply(&mut self, overrides: &Overrides) {
        let pick = |over: &Option<String>, current: &mut Option<String>| {
            if let Some(value) = over.as_ref().filter(|v| !v.is_empty()) {
                *current = Some(value.clone());
            }
        };
        pick(&overrides.api_url, &mut self.api_url);
        pick(&overrides.account_id, &mut self.account_id);
        pick(&overrides.api_key_id, &mut self.api_key_id);
        pick(&overrides.api_key_secret, &mut self.api_key_secret);
    }

    /// API URL to talk to
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(ARPIO_API_URL)
    }

    /// Build client settings, failing on the first missing required field.
    pub fn client_settings(&self) -> Result<ClientSettings> {
        let account_id = required(&self.account_id, "account_id")?;
        let api_key_id = required(&self.api_key_id, "api_key_id")?;
        let api_key_secret = required(&self.api_key_secret, "api_key_secret")?;

        Ok(ClientSettings::new(
            self.api_url(),
            api_key_id,
            api_key_secret,
            account_id,
        ))
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::Missing(field).into())
}
