//! Capella API client
//!
//! [`CapellaApi`] is the transport seam: every resource handle talks to the
//! service through it. [`CapellaClient`] is the reqwest implementation; tests
//! use the in-memory mock.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

pub mod capella;
pub mod filter;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod rate_limit;
pub mod wait;

pub use capella::CapellaClient;
pub use filter::FieldFilter;
#[cfg(test)]
pub use mock::MockCapellaClient;
pub use pagination::{PageDescriptor, list_all};
pub use wait::{WaitMode, WaitOptions, WaitOutcome, poll_status};

/// Query string pairs appended to a request path
pub type Query = [(&'static str, String)];

/// Transport operations against the Capella management API.
///
/// Paths are relative to the API host (e.g. `/v4/organizations`). Responses
/// are returned as raw JSON so callers can navigate envelopes before
/// converting to typed records.
#[async_trait]
pub trait CapellaApi: Send + Sync {
    /// GET a path with optional query parameters
    async fn get(&self, path: &str, query: &Query) -> Result<Value>;

    /// POST a JSON body; returns the response body (`Value::Null` when empty)
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// PUT a JSON body
    async fn put(&self, path: &str, body: &Value) -> Result<()>;

    /// PATCH a JSON body
    async fn patch(&self, path: &str, body: &Value) -> Result<()>;

    /// DELETE a resource
    async fn delete(&self, path: &str) -> Result<()>;
}

/// Convert a raw JSON record into a typed model.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse record: {}", e)).into())
}

/// Read the `"id"` key of a create response.
pub fn created_id(response: &Value) -> Result<String> {
    response
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError::InvalidResponse("Create response has no \"id\" field".to_string()).into()
        })
}
