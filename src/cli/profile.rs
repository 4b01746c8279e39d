//! Profile command implementations
//!
//! Switches between named profiles (production, test, local control planes).

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::output::table::format_table;
use capella::config::{DEFAULT_API_HOST, Profile, ProfiledConfig};
use capella::error::Result;

/// Display model for profile list output
#[derive(Debug, Clone, Serialize, tabled::Tabled)]
pub struct ProfileListItem {
    #[tabled(rename = "")]
    pub active: String,
    #[tabled(rename = "PROFILE")]
    pub name: String,
    #[tabled(rename = "API HOST")]
    pub api_host: String,
    #[tabled(rename = "ORG ID")]
    pub org_id: String,
    #[tabled(rename = "PROJECT")]
    pub project: String,
    #[tabled(rename = "API KEY")]
    pub has_api_key: String,
}

impl ProfileListItem {
    fn new(name: &str, profile: &Profile, active: bool) -> Self {
        Self {
            active: if active { "*" } else { "" }.to_string(),
            name: name.to_string(),
            api_host: profile
                .api_host
                .clone()
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            org_id: profile
                .organization_id
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            project: profile
                .project_id
                .clone()
                .or_else(|| profile.project.clone())
                .unwrap_or_else(|| "-".to_string()),
            has_api_key: if profile.api_key.is_some() { "yes" } else { "no" }.to_string(),
        }
    }
}

/// List all profiles
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let config = ProfiledConfig::load_at(opts.config_ref())?;
    let active = &config.active_profile;

    let items: Vec<ProfileListItem> = config
        .profiles
        .iter()
        .map(|(name, profile)| ProfileListItem::new(name, profile, name == active))
        .collect();

    match opts.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "active_profile": active,
                "profiles": items,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("{}", "Configuration Profiles".bold());
            println!();
            if items.is_empty() {
                println!("No profiles configured.");
            } else {
                println!("{}", format_table(&items));
                println!();
                println!("Active profile: {}", active.bold());
                println!(
                    "\n{} Switch profiles with: {}",
                    "→".cyan(),
                    "capella profile use <name>".cyan()
                );
            }
        }
    }

    Ok(())
}

/// Switch to a different profile
pub fn use_profile(name: &str, opts: &GlobalOptions) -> Result<()> {
    let path = ProfiledConfig::resolve_path(opts.config_ref())?;
    let mut config = ProfiledConfig::load_from(&path)?;

    if config.active_profile == name {
        println!(
            "{} Profile '{}' is already active.",
            "✓".green(),
            name.bold()
        );
        return Ok(());
    }

    config.set_active_profile(name)?;
    config.save_to(&path)?;

    println!("{} Switched to profile: {}", "✓".green(), name.bold());
    if let Some(profile) = config.profiles.get(name) {
        if let Some(ref host) = profile.api_host {
            println!("  API host: {}", host);
        }
        if let Some(ref org) = profile.organization_id {
            println!("  Organization: {}", org);
        }
    }

    Ok(())
}
