//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use capella::error::Result;

pub mod detail;
pub mod json;
pub mod table;

/// Types that can be rendered in every output format
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// Print a human-readable status line. Suppressed for JSON output so stdout
/// stays parseable.
pub fn notice(format: OutputFormat, message: impl std::fmt::Display) {
    if format != OutputFormat::Json {
        println!("{}", message);
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table | OutputFormat::Pretty => Ok(table::format_table(self)),
        }
    }
}
