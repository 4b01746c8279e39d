//! Paged retrieval for Capella collection endpoints
//!
//! Capella list endpoints accept `page` and `perPage` query parameters and
//! return the items under `data` next to a cursor block:
//!
//! ```text
//! { "data": [...],
//!   "cursor": { "pages": { "page": 1, "next": 2, "last": 3,
//!                          "perPage": 50, "totalItems": 120 } } }
//! ```
//!
//! [`list_all`] walks every page and concatenates the items in server order.

use log::debug;
use serde_json::Value;

use super::CapellaApi;
use crate::error::{ApiError, Result};

/// Page size requested from Capella list endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Describes how one collection endpoint paginates.
///
/// All fields are per-endpoint constants supplied with each call; resource
/// handles never store paging state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Key holding the page's items array
    pub items_key: &'static str,
    /// Key of the cursor block in the envelope
    pub cursor_key: &'static str,
    /// Key inside the cursor block holding page metadata
    pub category_key: &'static str,
    /// Field holding the total item count
    pub total_key: &'static str,
    /// Field holding the last page number
    pub last_page_key: &'static str,
    /// Field (and query parameter) holding the page size
    pub per_page_key: &'static str,
    /// Query parameter selecting the page (1-indexed)
    pub page_param: &'static str,
    /// Page size to request
    pub per_page: usize,
}

impl Default for PageDescriptor {
    fn default() -> Self {
        Self::CAPELLA
    }
}

impl PageDescriptor {
    /// Layout shared by the Capella v4 list endpoints.
    pub const CAPELLA: PageDescriptor = PageDescriptor {
        items_key: "data",
        cursor_key: "cursor",
        category_key: "pages",
        total_key: "totalItems",
        last_page_key: "last",
        per_page_key: "perPage",
        page_param: "page",
        per_page: DEFAULT_PAGE_SIZE,
    };

    /// Set the requested page size (at least 1).
    pub fn per_page(mut self, size: usize) -> Self {
        self.per_page = size.max(1);
        self
    }

    /// Query parameters requesting `page`.
    pub fn query(&self, page: usize) -> Vec<(&'static str, String)> {
        vec![
            (self.page_param, page.to_string()),
            (self.per_page_key, self.per_page.to_string()),
        ]
    }

    /// Split one response into its items and paging metadata.
    pub fn parse(&self, response: Value) -> Result<Page> {
        let (total, last_page) = {
            let meta = response
                .get(self.cursor_key)
                .and_then(|c| c.get(self.category_key));
            let read = |key: &str| {
                meta.and_then(|m| m.get(key))
                    .and_then(Value::as_u64)
                    .map(|n| n as usize)
            };
            (read(self.total_key), read(self.last_page_key))
        };

        let items = match response {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove(self.items_key) {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    return Err(ApiError::InvalidResponse(format!(
                        "Expected \"{}\" to be an array, got {}",
                        self.items_key, other
                    ))
                    .into());
                }
            },
            Value::Null => Vec::new(),
            other => {
                return Err(ApiError::InvalidResponse(format!(
                    "Expected a list envelope, got {}",
                    other
                ))
                .into());
            }
        };

        Ok(Page {
            items,
            total,
            last_page,
        })
    }
}

/// One page of a collection response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Items on this page, in server order
    pub items: Vec<Value>,
    /// Server-reported total item count
    pub total: Option<usize>,
    /// Server-reported last page number
    pub last_page: Option<usize>,
}

/// Fetch every page of `path` and return the items in server order.
///
/// Stops after the server-reported last page, after a short page, or after
/// the first page when the response carries no cursor metadata. A reported
/// total that disagrees with the collected items is ignored. Any request
/// error aborts the listing.
pub async fn list_all(
    api: &dyn CapellaApi,
    path: &str,
    descriptor: &PageDescriptor,
) -> Result<Vec<Value>> {
    let mut items = Vec::new();
    let mut reported_total = None;
    let mut page = 1;

    loop {
        let response = api.get(path, &descriptor.query(page)).await?;
        let parsed = descriptor.parse(response)?;
        let fetched = parsed.items.len();

        if page == 1 {
            reported_total = parsed.total;
        }
        items.extend(parsed.items);

        let done = fetched < descriptor.per_page
            || parsed.last_page.is_none_or(|last| page >= last);
        if done {
            break;
        }
        page += 1;
    }

    debug!("{}: {} items over {} page(s)", path, items.len(), page);

    if let Some(total) = reported_total.filter(|total| *total != items.len()) {
        debug!(
            "{}: server reported {} items, collected {}",
            path,
            total,
            items.len()
        );
    }

    Ok(items)
}
