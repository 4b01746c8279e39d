//! Project handle

use std::sync::Arc;

use super::identity::Identity;
use super::{CapellaOrganization, Collection};
use crate::client::CapellaApi;
use crate::client::models::{Project, ProjectConfig};
use crate::error::Result;

const KIND: &str = "Project";

/// A project, selected by name or id within an organization.
#[derive(Debug, Clone)]
pub struct CapellaProject {
    collection: Collection,
    organization_path: String,
    identity: Identity,
}

impl CapellaProject {
    /// Bind to the project called `name` (if any), resolving its id now.
    pub async fn new(org: &CapellaOrganization, name: Option<&str>) -> Result<Self> {
        let collection = org.child("projects");
        let identity = Identity::lookup(&collection, KIND, "name", name).await?;
        Ok(Self {
            collection,
            organization_path: org.path(),
            identity,
        })
    }

    /// Bind to a project whose id is already known.
    pub fn with_id(org: &CapellaOrganization, project_id: &str) -> Self {
        Self {
            collection: org.child("projects"),
            organization_path: org.path(),
            identity: Identity::known(KIND, "name", project_id),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.identity.key()
    }

    /// The project id, or `NotFound` when the name did not resolve.
    pub fn require_id(&self) -> Result<&str> {
        self.identity.require()
    }

    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    pub(crate) fn organization_path(&self) -> &str {
        &self.organization_path
    }

    pub fn api(&self) -> Arc<dyn CapellaApi> {
        self.collection.api()
    }

    /// A collection under this project (`clusters`, `analyticsClusters`).
    pub fn child(&self, segment: &str) -> Result<Collection> {
        Ok(self.collection.child(self.require_id()?, segment))
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.collection).await
    }

    pub async fn list(&self) -> Result<Vec<Project>> {
        self.collection.list().await
    }

    pub async fn get(&self, project_id: &str) -> Result<Option<Project>> {
        self.collection.get(project_id).await
    }

    /// Create the project and bind this handle to it.
    pub async fn create(&mut self, config: &ProjectConfig) -> Result<String> {
        let id = self.collection.create(config).await?;
        self.identity.created(id.clone(), Some(&config.name));
        Ok(id)
    }

    pub async fn delete(&self) -> Result<()> {
        self.collection.delete(self.require_id()?).await
    }
}
