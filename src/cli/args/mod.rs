//! Shared CLI argument types
//!
//! Reusable argument structs, flattened into commands with
//! `#[command(flatten)]`.

mod common;
mod global;
mod list;
mod wait;

pub use common::OutputFormat;
pub use global::GlobalOptions;
pub use list::ListArgs;
pub use wait::WaitArgs;
