//! Single-record output: a titled block of labelled fields

use colored::Colorize;
use serde::Serialize;

use super::json;
use crate::cli::OutputFormat;
use capella::error::Result;

/// Print one record. JSON prints `record` itself; other formats print the
/// `(label, value)` pairs under `title`, skipping empty values.
pub fn print_record<T: Serialize>(
    format: OutputFormat,
    title: &str,
    fields: &[(&str, Option<String>)],
    record: &T,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(record)?),
        OutputFormat::Table | OutputFormat::Pretty => println!("{}", format_fields(title, fields)),
    }
    Ok(())
}

pub fn format_fields(title: &str, fields: &[(&str, Option<String>)]) -> String {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut out = format!("{}\n", title.bold());
    for (label, value) in fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            out.push_str(&format!("\n  {:width$}  {}", format!("{}:", label), value, width = width + 1));
        }
    }
    out
}
