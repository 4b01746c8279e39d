//! Database credentials handle

use super::identity::Identity;
use super::{CapellaDatabase, ClusterScope, Collection};
use crate::client::models::{DatabaseCredential, DatabaseCredentialConfig};
use crate::error::Result;

const KIND: &str = "Database credential";

/// Database access credentials, keyed on credential name.
#[derive(Debug, Clone)]
pub struct CapellaDatabaseCredentials {
    collection: Collection,
    identity: Identity,
}

impl CapellaDatabaseCredentials {
    pub async fn new(database: &CapellaDatabase, name: Option<&str>) -> Result<Self> {
        let collection = database.cluster_child("users")?;
        let identity = Identity::lookup(&collection, KIND, "name", name).await?;
        Ok(Self {
            collection,
            identity,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.identity.key()
    }

    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.collection).await
    }

    pub async fn list(&self) -> Result<Vec<DatabaseCredential>> {
        self.collection.list().await
    }

    pub async fn get(&self, credential_id: &str) -> Result<Option<DatabaseCredential>> {
        self.collection.get(credential_id).await
    }

    pub async fn create(&mut self, config: &DatabaseCredentialConfig) -> Result<String> {
        let id = self.collection.create(config).await?;
        self.identity.created(id.clone(), Some(&config.name));
        Ok(id)
    }

    pub async fn delete(&self) -> Result<()> {
        self.collection.delete(self.identity.require()?).await
    }
}
