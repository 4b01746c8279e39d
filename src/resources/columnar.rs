//! Columnar (analytics) cluster handle

use std::future::Future;

use super::identity::Identity;
use super::{CapellaProject, ClusterScope, Collection};
use crate::client::models::{Columnar, ColumnarConfig};
use crate::client::{WaitMode, WaitOptions, WaitOutcome};
use crate::error::{Error, Result};

const KIND: &str = "Columnar cluster";

pub const COLUMNAR_STATUS_FIELD: &str = "currentState";

#[derive(Debug, Clone)]
pub struct CapellaColumnar {
    collection: Collection,
    identity: Identity,
}

impl CapellaColumnar {
    pub async fn new(project: &CapellaProject, name: Option<&str>) -> Result<Self> {
        let collection = project.child("analyticsClusters")?;
        let identity = Identity::lookup(&collection, KIND, "name", name).await?;
        Ok(Self {
            collection,
            identity,
        })
    }

    pub fn with_id(project: &CapellaProject, columnar_id: &str) -> Result<Self> {
        Ok(Self {
            collection: project.child("analyticsClusters")?,
            identity: Identity::known(KIND, "name", columnar_id),
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

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.collection).await
    }

    pub async fn list(&self) -> Result<Vec<Columnar>> {
        self.collection.list().await
    }

    pub async fn get(&self, columnar_id: &str) -> Result<Option<Columnar>> {
        self.collection.get(columnar_id).await
    }

    pub async fn create(&mut self, mut config: ColumnarConfig) -> Result<String> {
        if config.name.is_none() {
            config.name = self.name().map(str::to_string);
        }
        let name = config
            .name
            .clone()
            .ok_or_else(|| Error::Other("columnar cluster name is required".to_string()))?;

        let id = self.collection.create(&config).await?;
        self.identity.created(id.clone(), Some(&name));
        Ok(id)
    }

    pub async fn delete(&self) -> Result<()> {
        self.collection.delete(self.require_id()?).await
    }

    pub async fn status(&self) -> Result<Option<String>> {
        self.collection
            .status(self.require_id()?, COLUMNAR_STATUS_FIELD)
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
                COLUMNAR_STATUS_FIELD,
                target,
                mode,
                options,
                cancel,
            )
            .await
    }
}

impl ClusterScope for CapellaColumnar {
    fn cluster_child(&self, segment: &str) -> Result<Collection> {
        Ok(self.collection.child(self.require_id()?, segment))
    }
}
