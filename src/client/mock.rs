//! Mock Capella API client for testing
//!
//! Serves registered collections with Capella-style paging, scripted
//! per-path responses, and create/delete semantics, without any network.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Mutex;

use super::{CapellaApi, Query};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockCapellaClient::new()
///     .with_collection("/v4/organizations", vec![json!({"id": "org-1", "name": "Org"})])
///     .await;
/// let items = list_all(&mock, "/v4/organizations", &PageDescriptor::CAPELLA).await?;
/// ```
#[derive(Default)]
pub struct MockCapellaClient {
    /// Collections keyed by path; GET pages them, POST appends, DELETE removes
    collections: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    /// Scripted GET responses by exact path; the last one repeats
    responses: Arc<Mutex<HashMap<String, VecDeque<Value>>>>,
    /// Error returned once after `n` successful calls
    error_after: Arc<Mutex<Option<(usize, ApiError)>>>,
    /// Every request received
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Counter for generated IDs
    next_id: Arc<Mutex<usize>>,
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl CapturedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl MockCapellaClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection served at `path`.
    pub async fn with_collection(self, path: &str, items: Vec<Value>) -> Self {
        self.collections
            .lock()
            .await
            .insert(path.to_string(), items);
        self
    }

    /// Script the GET responses for `path`, replayed in order.
    pub async fn with_responses(self, path: &str, responses: Vec<Value>) -> Self {
        self.responses
            .lock()
            .await
            .insert(path.to_string(), responses.into());
        self
    }

    /// Fail the call following `successes` successful calls.
    pub async fn with_error_after(self, successes: usize, error: ApiError) -> Self {
        *self.error_after.lock().await = Some((successes, error));
        self
    }

    /// Fail the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.with_error_after(0, error).await
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Number of GET requests made.
    pub async fn get_count(&self) -> usize {
        self.captured_requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == "GET")
            .count()
    }

    /// Current contents of a collection.
    pub async fn collection(&self, path: &str) -> Vec<Value> {
        self.collections
            .lock()
            .await
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    async fn record(
        &self,
        method: &'static str,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<()> {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: body.cloned(),
        });
        let calls = requests.len();
        drop(requests);

        let mut error_after = self.error_after.lock().await;
        match error_after.take() {
            Some((n, err)) if calls > n => Err(err.into()),
            pending => {
                *error_after = pending;
                Ok(())
            }
        }
    }

    async fn scripted(&self, path: &str) -> Option<Value> {
        let mut responses = self.responses.lock().await;
        let script = responses.get_mut(path)?;
        if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().cloned()
        }
    }
}

/// Split `/a/b/c` into (`/a/b`, `c`).
fn split_item(path: &str) -> Option<(&str, &str)> {
    path.rsplit_once('/')
}

fn page_of(items: &[Value], query: &Query) -> Value {
    let param = |key: &str| {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.parse::<usize>().ok())
    };
    let total = items.len();
    let per_page = param("perPage").unwrap_or(total.max(1)).max(1);
    let page = param("page").unwrap_or(1).max(1);
    let last = total.div_ceil(per_page).max(1);

    let data: Vec<Value> = items
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .cloned()
        .collect();

    let mut pages = json!({
        "page": page,
        "last": last,
        "perPage": per_page,
        "totalItems": total,
    });
    if page < last {
        pages["next"] = json!(page + 1);
    }
    if page > 1 {
        pages["previous"] = json!(page - 1);
    }

    json!({ "data": data, "cursor": { "pages": pages, "hrefs": {} } })
}

#[async_trait]
impl CapellaApi for MockCapellaClient {
    async fn get(&self, path: &str, query: &Query) -> Result<Value> {
        self.record("GET", path, query, None).await?;

        if let Some(response) = self.scripted(path).await {
            return Ok(response);
        }

        let collections = self.collections.lock().await;
        if let Some(items) = collections.get(path) {
            return Ok(page_of(items, query));
        }

        let item = split_item(path).and_then(|(parent, id)| {
            collections
                .get(parent)?
                .iter()
                .find(|item| item.get("id").and_then(Value::as_str) == Some(id))
                .cloned()
        });
        item.ok_or_else(|| ApiError::NotFound(path.to_string()).into())
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.record("POST", path, &[], Some(body)).await?;

        let id = {
            let mut next = self.next_id.lock().await;
            *next += 1;
            format!("generated-{}", *next)
        };

        let mut record = body.clone();
        if let Value::Object(ref mut map) = record {
            map.insert("id".to_string(), json!(id));
        }
        self.collections
            .lock()
            .await
            .entry(path.to_string())
            .or_default()
            .push(record);

        Ok(json!({ "id": id }))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<()> {
        self.record("PUT", path, &[], Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<()> {
        self.record("PATCH", path, &[], Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.record("DELETE", path, &[], None).await?;

        let (parent, id) =
            split_item(path).ok_or_else(|| ApiError::NotFound(path.to_string()))?;
        let mut collections = self.collections.lock().await;
        let items = collections
            .get_mut(parent)
            .ok_or_else(|| ApiError::NotFound(path.to_string()))?;
        let before = items.len();
        items.retain(|item| item.get("id").and_then(Value::as_str) != Some(id));
        if items.len() == before {
            return Err(ApiError::NotFound(path.to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_pages_collection() {
        let items: Vec<Value> = (0..5).map(|i| json!({"id": i.to_string()})).collect();
        let mock = MockCapellaClient::new().with_collection("/c", items).await;

        let page = mock
            .get("/c", &[("page", "2".to_string()), ("perPage", "2".to_string())])
            .await
            .unwrap();

        assert_eq!(page["data"], json!([{"id": "2"}, {"id": "3"}]));
        assert_eq!(page["cursor"]["pages"]["last"], 3);
        assert_eq!(page["cursor"]["pages"]["next"], 3);
        assert_eq!(page["cursor"]["pages"]["totalItems"], 5);
    }

    #[tokio::test]
    async fn test_mock_create_get_delete() {
        let mock = MockCapellaClient::new();
        let created = mock.post("/c", &json!({"name": "x"})).await.unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let item = mock.get(&format!("/c/{id}"), &[]).await.unwrap();
        assert_eq!(item["name"], "x");

        mock.delete(&format!("/c/{id}")).await.unwrap();
        assert!(mock.get(&format!("/c/{id}"), &[]).await.is_err());
        assert!(mock.delete(&format!("/c/{id}")).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed() {
        let mock = MockCapellaClient::new()
            .with_collection("/c", vec![])
            .await
            .with_error(ApiError::Forbidden)
            .await;

        assert!(mock.get("/c", &[]).await.is_err());
        assert!(mock.get("/c", &[]).await.is_ok());
    }
}
