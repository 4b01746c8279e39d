//! Project models

use serde::{Deserialize, Serialize};

use super::Audit;

/// Project resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID
    pub id: String,

    /// Project name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

/// Body for creating a project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Builder for [`ProjectConfig`]
#[derive(Debug, Clone, Default)]
pub struct ProjectBuilder {
    name: Option<String>,
    description: Option<String>,
}

impl ProjectBuilder {
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

    /// Build the config; fails without a name.
    pub fn build(self) -> crate::error::Result<ProjectConfig> {
        let name = self.name.ok_or_else(|| {
            crate::error::Error::Other("project name is required".to_string())
        })?;
        Ok(ProjectConfig {
            name,
            description: self.description,
        })
    }
}
