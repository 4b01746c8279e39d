//! Allowed CIDR models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Audit;

/// Allowed CIDR resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedCidr {
    pub id: String,

    pub cidr: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

/// Body for adding an allowed CIDR
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedCidrConfig {
    pub cidr: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Builder for [`AllowedCidrConfig`]
#[derive(Debug, Clone)]
pub struct AllowedCidrBuilder {
    cidr: String,
    comment: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl AllowedCidrBuilder {
    pub fn new(cidr: impl Into<String>) -> Self {
        Self {
            cidr: cidr.into(),
            comment: None,
            expires_at: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Remove the entry automatically at `expires_at`.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn build(self) -> AllowedCidrConfig {
        AllowedCidrConfig {
            cidr: self.cidr,
            comment: self.comment,
            expires_at: self.expires_at,
        }
    }
}
