//! Columnar (analytics) cluster models

use serde::{Deserialize, Serialize};

use super::{Audit, Availability, CloudProvider, Compute, Support};
use crate::error::{Error, Result};

/// Columnar cluster resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Columnar {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute: Option<Compute>,

    /// Lifecycle state ("deploying", "healthy", "destroying", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

/// Body for creating a columnar cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnarConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub cloud_provider: CloudProvider,

    pub region: String,

    pub nodes: u32,

    pub compute: Compute,

    pub availability: Availability,

    pub support: Support,
}

/// Builder for [`ColumnarConfig`]
#[derive(Debug, Clone)]
pub struct ColumnarBuilder {
    provider: CloudProvider,
    name: Option<String>,
    description: Option<String>,
    region: Option<String>,
    compute: Option<(Compute, u32)>,
    support: Option<Support>,
}

impl ColumnarBuilder {
    pub fn new(provider: CloudProvider) -> Self {
        Self {
            provider,
            name: None,
            description: None,
            region: None,
            compute: None,
            support: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Node size and count.
    pub fn compute(mut self, compute: Compute, nodes: u32) -> Self {
        self.compute = Some((compute, nodes));
        self
    }

    pub fn support(mut self, support: Support) -> Self {
        self.support = Some(support);
        self
    }

    pub fn build(self) -> Result<ColumnarConfig> {
        let region = self
            .region
            .ok_or_else(|| Error::Other("columnar region is required".to_string()))?;
        let (compute, nodes) = self
            .compute
            .ok_or_else(|| Error::Other("columnar compute is required".to_string()))?;

        Ok(ColumnarConfig {
            name: self.name,
            description: self.description,
            cloud_provider: self.provider,
            region,
            nodes,
            compute,
            availability: Availability::for_nodes(nodes),
            support: self.support.unwrap_or_default(),
        })
    }
}
