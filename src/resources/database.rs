//! Database (operational cluster) handle

use std::future::Future;

use super::identity::Identity;
use super::{CapellaProject, ClusterScope, Collection};
use crate::client::models::{Database, DatabaseConfig};
use crate::client::{WaitMode, WaitOptions, WaitOutcome};
use crate::error::{Error, Result};

const KIND: &str = "Database";

/// Field polled by [`CapellaDatabase::wait`]
pub const DATABASE_STATUS_FIELD: &str = "currentState";

/// A database in a project, selected by name.
#[derive(Debug, Clone)]
pub struct CapellaDatabase {
    collection: Collection,
    organization_path: String,
    identity: Identity,
}

impl CapellaDatabase {
    /// Bind to the database called `name` (if any). The project must be resolved.
    pub async fn new(project: &CapellaProject, name: Option<&str>) -> Result<Self> {
        let collection = project.child("clusters")?;
        let identity = Identity::lookup(&collection, KIND, "name", name).await?;
        Ok(Self {
            collection,
            organization_path: project.organization_path().to_string(),
            identity,
        })
    }

    pub fn with_id(project: &CapellaProject, database_id: &str) -> Result<Self> {
        Ok(Self {
            collection: project.child("clusters")?,
            organization_path: project.organization_path().to_string(),
            identity: Identity::known(KIND, "name", database_id),
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.identity.key()
    }

    pub fn require_id(&self) -> Result<&str> {
        self.identity.require()
    }

    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    pub(crate) fn organization_path(&self) -> &str {
        &self.organization_path
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.collection).await
    }

    pub async fn list(&self) -> Result<Vec<Database>> {
        self.collection.list().await
    }

    pub async fn get(&self, database_id: &str) -> Result<Option<Database>> {
        self.collection.get(database_id).await
    }

    /// Create the database; an unnamed config takes the handle's name.
    pub async fn create(&mut self, mut config: DatabaseConfig) -> Result<String> {
        if config.name.is_none() {
            config.name = self.name().map(str::to_string);
        }
        let name = config
            .name
            .clone()
            .ok_or_else(|| Error::Other("database name is required".to_string()))?;

        let id = self.collection.create(&config).await?;
        self.identity.created(id.clone(), Some(&name));
        Ok(id)
    }

    /// Request deletion. Follow with `wait("destroying", WaitMode::While, ..)`.
    pub async fn delete(&self) -> Result<()> {
        self.collection.delete(self.require_id()?).await
    }

    /// Current `currentState`, `None` once the database is gone.
    pub async fn status(&self) -> Result<Option<String>> {
        self.collection
            .status(self.require_id()?, DATABASE_STATUS_FIELD)
            .await
    }

    pub async fn wait<C>(
        &self,
        target: &str,
        mode: WaitMode,
        options: WaitOptions,
        cancel: C,
    ) -> Result<WaitOutcome>
    where
        C: Future<Output = ()>,
    {
        self.collection
            .wait(
                self.require_id()?,
                DATABASE_STATUS_FIELD,
                target,
                mode,
                options,
                cancel,
            )
            .await
    }
}

impl ClusterScope for CapellaDatabase {
    fn cluster_child(&self, segment: &str) -> Result<Collection> {
        Ok(self.collection.child(self.require_id()?, segment))
    }
}
