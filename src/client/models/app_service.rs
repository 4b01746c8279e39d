//! App Service models

use serde::{Deserialize, Serialize};

use super::{Audit, Compute};

/// App Service attached to a database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppService {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Database the service is attached to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute: Option<Compute>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Lifecycle state ("deploying", "healthy", "destroying", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

/// Body for creating an App Service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppServiceConfig {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute: Option<Compute>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Builder for [`AppServiceConfig`]
#[derive(Debug, Clone, Default)]
pub struct AppServiceBuilder {
    name: Option<String>,
    description: Option<String>,
    compute: Option<(Compute, u32)>,
    version: Option<String>,
}

impl AppServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn compute(mut self, compute: Compute, nodes: u32) -> Self {
        self.compute = Some((compute, nodes));
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> crate::error::Result<AppServiceConfig> {
        let name = self.name.ok_or_else(|| {
            crate::error::Error::Other("app service name is required".to_string())
        })?;
        Ok(AppServiceConfig {
            name,
            description: self.description,
            nodes: self.compute.map(|(_, n)| n),
            compute: self.compute.map(|(c, _)| c),
            version: self.version,
        })
    }
}
