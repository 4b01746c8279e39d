//! Profile-based configuration for the Capella SDK and CLI
//!
//! Configuration lives in a YAML file (default `~/.capella/config.yaml`) holding
//! one or more named profiles. Environment variables override profile values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default Capella management API host
pub const DEFAULT_API_HOST: &str = "https://cloudapi.cloud.couchbase.com";

/// Default profile name
pub const DEFAULT_PROFILE: &str = "default";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 3600;

/// One named set of credentials and resource selectors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Capella API secret key (sent as a bearer token)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API host override (defaults to the public Capella endpoint)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Organization ID; when unset the first listed organization is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,

    /// Project name selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Project ID selector (takes precedence over `project`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Database name selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Account email, used for project ownership
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_email: Option<String>,

    /// Seconds between status polls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval_secs: Option<u64>,

    /// Seconds before a wait gives up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_timeout_secs: Option<u64>,
}

impl Profile {
    /// API host, falling back to the public endpoint.
    pub fn api_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or(DEFAULT_API_HOST)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.unwrap_or(DEFAULT_POLL_INTERVAL_SECS))
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs.unwrap_or(DEFAULT_WAIT_TIMEOUT_SECS))
    }

    /// Validate that the profile can authenticate.
    pub fn validate_auth(&self) -> Result<()> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingApiKey.into()),
        }
    }

    /// Apply `CAPELLA_*` environment overrides using the given lookup.
    ///
    /// Takes the lookup as a closure so tests don't touch process state.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |slot: &mut Option<String>, var: &str| {
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                *slot = Some(value);
            }
        };

        set(&mut self.api_key, "CAPELLA_API_KEY");
        set(&mut self.api_host, "CAPELLA_API_HOST");
        set(&mut self.organization_id, "CAPELLA_ORG_ID");
        set(&mut self.account_email, "CAPELLA_USER_EMAIL");

        // A project chosen by name replaces a pinned id.
        if let Some(project) = lookup("CAPELLA_PROJECT").filter(|v| !v.is_empty()) {
            self.project = Some(project);
            self.project_id = None;
        }
    }
}

/// Configuration file with named profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfiledConfig {
    /// Profile used when none is requested
    #[serde(default = "default_profile_name")]
    pub active_profile: String,

    /// Profiles keyed by name
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

fn default_profile_name() -> String {
    DEFAULT_PROFILE.to_string()
}

impl Default for ProfiledConfig {
    fn default() -> Self {
        Self {
            active_profile: default_profile_name(),
            profiles: BTreeMap::new(),
        }
    }
}

impl ProfiledConfig {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".capella").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: ProfiledConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // API keys live in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Pick the requested profile, or the active one.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<(String, Profile)> {
        let name = name.unwrap_or(&self.active_profile);
        self.profiles
            .get(name)
            .map(|p| (name.to_string(), p.clone()))
            .ok_or_else(|| ConfigError::MissingProfile(name.to_string()).into())
    }

    /// Profile names in sorted order.
    pub fn list_profiles(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Make `name` the active profile. It must exist.
    pub fn set_active_profile(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            return Err(ConfigError::MissingProfile(name.to_string()).into());
        }
        self.active_profile = name.to_string();
        Ok(())
    }
}
