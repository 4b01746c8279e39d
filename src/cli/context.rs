//! Command execution context
//!
//! Loads the selected profile, layers environment and flag overrides on top,
//! and builds the API client. Resource handles are resolved lazily by the
//! commands that need them.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use capella::client::{CapellaApi, CapellaClient, WaitOptions};
use capella::config::{Profile, ProfiledConfig};
use capella::error::{ConfigError, Error, Result};
use capella::{CapellaColumnar, CapellaDatabase, CapellaOrganization, CapellaProject};

/// Context for command execution containing profile, client, and output format.
pub struct CommandContext {
    /// Profile with environment and flag overrides applied
    pub profile: Profile,
    /// Authenticated API client
    pub api: Arc<dyn CapellaApi>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error if the profile cannot be loaded or has no API key.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let (profile_name, mut profile) = load_profile(opts)?;
        profile.apply_env(|var| std::env::var(var).ok());

        if let Some(org) = opts.org_ref() {
            profile.organization_id = Some(org.to_string());
        }
        if let Some(host) = opts.api_host_ref() {
            profile.api_host = Some(host.to_string());
        }

        let client = CapellaClient::from_profile(&profile)?;
        debug!(
            "Using profile '{}' against {}",
            profile_name,
            client.base_url()
        );

        Ok(Self {
            profile,
            api: Arc::new(client),
            format: opts.format,
        })
    }

    /// Build a context around an existing client (used by tests).
    #[cfg(test)]
    pub fn with_api(profile: Profile, api: Arc<dyn CapellaApi>) -> Self {
        Self {
            profile,
            api,
            format: OutputFormat::Json,
        }
    }

    /// The profile's organization, or the first accessible one.
    pub async fn organization(&self) -> Result<CapellaOrganization> {
        CapellaOrganization::new(self.api.clone(), self.profile.organization_id.as_deref()).await
    }

    /// The profile's project. `project_id` wins over `project`.
    pub async fn project(&self) -> Result<CapellaProject> {
        let org = self.organization().await?;
        if let Some(id) = self.profile.project_id.as_deref() {
            return Ok(CapellaProject::with_id(&org, id));
        }

        let name = self.profile.project.as_deref().ok_or_else(|| {
            ConfigError::Invalid(
                "no project selected. Set `project` in the profile or CAPELLA_PROJECT.".to_string(),
            )
        })?;
        let project = CapellaProject::new(&org, Some(name)).await?;
        project.require_id()?;
        Ok(project)
    }

    /// A project handle bound to no project, for listing.
    pub async fn projects(&self) -> Result<CapellaProject> {
        let org = self.organization().await?;
        CapellaProject::new(&org, None).await
    }

    /// A project of the profile's organization, by name.
    pub async fn project_named(&self, name: &str) -> Result<CapellaProject> {
        let org = self.organization().await?;
        CapellaProject::new(&org, Some(name)).await
    }

    /// A database of the profile's project, which must exist.
    pub async fn database(&self, name: &str) -> Result<CapellaDatabase> {
        let project = self.project().await?;
        let database = CapellaDatabase::new(&project, Some(name)).await?;
        database.require_id()?;
        Ok(database)
    }

    /// A columnar cluster of the profile's project, which must exist.
    pub async fn columnar(&self, name: &str) -> Result<CapellaColumnar> {
        let project = self.project().await?;
        let columnar = CapellaColumnar::new(&project, Some(name)).await?;
        columnar.require_id()?;
        Ok(columnar)
    }

    /// Poll interval and timeout configured for the profile.
    pub fn wait_defaults(&self) -> WaitOptions {
        WaitOptions::new(self.profile.poll_interval(), self.profile.wait_timeout())
    }
}

/// Load the requested profile.
///
/// A missing default config file is not an error: the environment alone can
/// describe a profile. An explicit `--config` path must exist.
pub fn load_profile(opts: &GlobalOptions) -> Result<(String, Profile)> {
    match ProfiledConfig::load_at(opts.config_ref()) {
        Ok(config) => config.resolve_profile(opts.profile_ref()),
        Err(Error::Config(ConfigError::NotFound(path))) if opts.config_ref().is_none() => {
            debug!("No config file at {}; using environment only", path);
            let name = opts
                .profile_ref()
                .unwrap_or(capella::config::DEFAULT_PROFILE)
                .to_string();
            Ok((name, Profile::default()))
        }
        Err(err) => Err(err),
    }
}
