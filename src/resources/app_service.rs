//! App Service handle
//!
//! App Services are created and deleted under their database, but Capella
//! only lists them per organization; the handle finds its service by the
//! `clusterId` of that listing.

use std::future::Future;

use super::identity::Identity;
use super::{CapellaDatabase, ClusterScope, Collection};
use crate::client::models::{AppService, AppServiceConfig};
use crate::client::{WaitMode, WaitOptions, WaitOutcome};
use crate::error::Result;

const KIND: &str = "App Service for database";

pub const APP_SERVICE_STATUS_FIELD: &str = "currentState";

/// The App Service attached to one database.
#[derive(Debug, Clone)]
pub struct CapellaAppService {
    /// `.../clusters/{id}/appservices`
    collection: Collection,
    /// `/v4/organizations/{org}/appservices`
    listing: Collection,
    identity: Identity,
}

impl CapellaAppService {
    pub async fn new(database: &CapellaDatabase) -> Result<Self> {
        let database_id = database.require_id()?;
        let collection = database.cluster_child("appservices")?;
        let listing = Collection::new(
            collection.api(),
            format!("{}/appservices", database.organization_path()),
        );
        let identity = Identity::lookup(&listing, KIND, "clusterId", Some(database_id)).await?;
        Ok(Self {
            collection,
            listing,
            identity,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    pub fn require_id(&self) -> Result<&str> {
        self.identity.require()
    }

    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.listing).await
    }

    /// Every App Service in the organization.
    pub async fn list(&self) -> Result<Vec<AppService>> {
        self.listing.list().await
    }

    pub async fn get(&self, app_service_id: &str) -> Result<Option<AppService>> {
        self.collection.get(app_service_id).await
    }

    pub async fn create(&mut self, config: &AppServiceConfig) -> Result<String> {
        let id = self.collection.create(config).await?;
        self.identity.created(id.clone(), None);
        Ok(id)
    }

    pub async fn delete(&self) -> Result<()> {
        self.collection.delete(self.require_id()?).await
    }

    pub async fn status(&self) -> Result<Option<String>> {
        self.collection
            .status(self.require_id()?, APP_SERVICE_STATUS_FIELD)
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
                APP_SERVICE_STATUS_FIELD,
                target,
                mode,
                options,
                cancel,
            )
            .await
    }

    /// Turn the App Service on or off (`POST .../activationState`).
    pub async fn set_activation(&self, on: bool) -> Result<()> {
        let path = format!(
            "{}/activationState",
            self.collection.item_path(self.require_id()?)
        );
        let api = self.collection.api();
        if on {
            api.post(&path, &serde_json::Value::Null).await.map(|_| ())
        } else {
            api.delete(&path).await
        }
    }
}
