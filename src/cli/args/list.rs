//! List argument types for CLI commands

use clap::Args;

/// Shared arguments for list commands.
///
/// Listing always walks every page; `--limit` trims what is printed.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Maximum results to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl ListArgs {
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.limit {
            Some(limit) => items.into_iter().take(limit).collect(),
            None => items,
        }
    }
}
