//! Confirmation prompt for destructive commands

use colored::Colorize;
use dialoguer::Confirm;

use capella::error::{Error, Result};

/// Ask before deleting `what` unless `yes` is set. Returns false when declined.
pub fn confirm_delete(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    eprintln!("{} Delete {}? This cannot be undone.", "⚠".yellow(), what);
    let confirmed = Confirm::new()
        .with_prompt("Confirm deletion?")
        .default(false)
        .interact()
        .map_err(|e| Error::Other(format!("{} (pass --yes to skip the prompt)", e)))?;

    if !confirmed {
        eprintln!("Cancelled.");
    }
    Ok(confirmed)
}
