//! Common display helpers

use capella::client::models::Audit;

/// Placeholder for empty cells
pub const NONE: &str = "-";

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Optional cell value, `-` when unset.
pub fn or_none(value: Option<&str>) -> String {
    value.unwrap_or(NONE).to_string()
}

/// Creation time as `YYYY-MM-DD HH:MM` (UTC).
pub fn created(audit: Option<&Audit>) -> String {
    audit
        .map(|a| a.created_at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| NONE.to_string())
}
