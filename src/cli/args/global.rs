//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; profile values are merged in `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Organization ID override
    pub org: Option<String>,

    /// Custom config file path (defaults to ~/.capella/config.yaml)
    pub config: Option<String>,

    /// Profile name override (bypasses active_profile in config)
    pub profile: Option<String>,

    /// Custom API host
    pub api_host: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            config: cli.config.clone(),
            profile: cli.profile.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn profile_ref(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
