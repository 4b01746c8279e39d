//! Capella API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde_json::Value;

use super::rate_limit::ReactiveRateLimiter;
use super::{CapellaApi, Query};
use crate::config::{DEFAULT_API_HOST, Profile};
use crate::error::{ApiError, Result};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Capella management API client
pub struct CapellaClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    rate_limiter: Arc<ReactiveRateLimiter>,
}

impl CapellaClient {
    /// Create a client for the public Capella endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_host(api_key, DEFAULT_API_HOST)
    }

    /// Create a client against a specific API host (used for tests and
    /// non-production control planes).
    pub fn with_host(api_key: impl Into<String>, host: &str) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: host.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            rate_limiter: Arc::new(ReactiveRateLimiter::default()),
        })
    }

    /// Create a client from a validated profile.
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        profile.validate_auth()?;
        let api_key = profile.api_key.clone().unwrap_or_default();
        Self::with_host(api_key, profile.api_host())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and map the response status onto `ApiError`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> Result<Value> {
        self.rate_limiter.wait_if_active().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            status if status.is_success() => {
                let text = response.text().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to read response: {}", e))
                })?;
                if text.trim().is_empty() {
                    return Ok(Value::Null);
                }
                let data = serde_json::from_str(&text).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| path.to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::CONFLICT => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Conflict".to_string());
                Err(ApiError::Conflict(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                self.rate_limiter.activate();
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl CapellaApi for CapellaClient {
    async fn get(&self, path: &str, query: &Query) -> Result<Value> {
        self.send(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<()> {
        self.send(Method::PUT, path, &[], Some(body)).await?;
        Ok(())
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<()> {
        self.send(Method::PATCH, path, &[], Some(body)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}
