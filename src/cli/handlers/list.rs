//! Generic list command handler
//!
//! Provides a reusable pattern for list commands that follow the standard flow:
//! 1. Fetch every page
//! 2. Apply limit
//! 3. Convert to display type
//! 4. Print output

use std::future::Future;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{ListArgs, OutputFormat};
use crate::output::Formattable;
use capella::error::Result;

/// Run a standard list command with the common fetch → limit → display → print pattern.
///
/// # Type Parameters
///
/// * `T` - The API model type returned by the fetcher (e.g., `Project`)
/// * `D` - The display type that implements `From<T>`, `Tabled`, and `Serialize`
///
/// # Example
///
/// ```ignore
/// run_list_command::<Project, ProjectDisplay, _>(
///     ctx.format,
///     &list,
///     "projects",
///     project.list(),
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut>(
    format: OutputFormat,
    list: &ListArgs,
    resource_name: &str,
    fetch: Fut,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let items = fetch.await?;
    debug!("Fetched {} {}", items.len(), resource_name);

    let display_items: Vec<D> = list.apply(items).into_iter().map(D::from).collect();
    display_items.print(format)
}
