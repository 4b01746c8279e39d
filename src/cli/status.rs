//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::load_profile;
use capella::config::{Profile, ProfiledConfig};
use capella::error::Result;

/// Show which config file and profile are in effect
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Capella Configuration Status".bold());

    let config_path = ProfiledConfig::resolve_path(opts.config_ref())?;
    let config = ProfiledConfig::load_at(opts.config_ref()).ok();

    if config.is_some() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "{} No config file at {} (environment only)",
            "○".dimmed(),
            config_path.display()
        );
    }

    let (profile_name, mut profile) = load_profile(opts)?;
    profile.apply_env(|var| std::env::var(var).ok());

    match &config {
        Some(config) if config.active_profile == profile_name => {
            println!("Profile: {} {}", profile_name.bold(), "(active)".green())
        }
        _ => println!(
            "Profile: {} {}",
            profile_name.bold(),
            "(via --profile flag)".dimmed()
        ),
    }
    println!();

    print_profile(&profile);

    if let Some(config) = &config {
        let others: Vec<_> = config
            .list_profiles()
            .into_iter()
            .filter(|p| *p != profile_name)
            .collect();
        if !others.is_empty() {
            println!();
            println!("Other profiles: {}", others.join(", ").dimmed());
        }
    }
    println!();

    Ok(())
}

fn print_profile(profile: &Profile) {
    if profile.validate_auth().is_ok() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Set api_key in the profile or CAPELLA_API_KEY");
    }

    match &profile.organization_id {
        Some(org) => println!("{} Organization: {}", "✓".green(), org),
        None => println!("{} No organization set (first accessible is used)", "○".dimmed()),
    }

    match (&profile.project_id, &profile.project) {
        (Some(id), _) => println!("{} Project ID: {}", "✓".green(), id),
        (None, Some(name)) => println!("{} Project: {}", "✓".green(), name),
        (None, None) => println!("{} No project selected", "○".dimmed()),
    }

    if let Some(database) = &profile.database {
        println!("{} Database: {}", "✓".green(), database);
    }
    if let Some(email) = &profile.account_email {
        println!("{} Account email: {}", "✓".green(), email);
    }
    if let Some(host) = &profile.api_host {
        println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
    }

    println!(
        "{} Polling every {}s, giving up after {}s",
        "○".dimmed(),
        profile.poll_interval().as_secs(),
        profile.wait_timeout().as_secs()
    );
}
