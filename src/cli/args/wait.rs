//! Arguments for `wait` subcommands

use std::time::Duration;

use clap::Args;

use capella::client::{WaitMode, WaitOptions};

/// Poll a resource's status.
///
/// By default waits while the status equals STATUS (e.g. `deploying`);
/// `--until` waits until it does.
#[derive(Args, Debug, Clone)]
pub struct WaitArgs {
    /// Status string to compare against
    pub status: String,

    /// Wait until the status equals STATUS instead of while it does
    #[arg(long)]
    pub until: bool,

    /// Give up after this many seconds (defaults to the profile value)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Seconds between polls (defaults to the profile value)
    #[arg(long)]
    pub interval: Option<u64>,
}

impl WaitArgs {
    pub fn mode(&self) -> WaitMode {
        WaitMode::from_until(self.until)
    }

    /// Poll options, falling back to `defaults` for unset flags.
    pub fn options(&self, defaults: WaitOptions) -> WaitOptions {
        let mut options = defaults;
        if let Some(secs) = self.interval {
            options = options.interval(Duration::from_secs(secs.max(1)));
        }
        if let Some(secs) = self.timeout {
            options = options.timeout(Duration::from_secs(secs));
        }
        options
    }
}
