//! Network peer handle

use std::future::Future;

use super::identity::Identity;
use super::{CapellaDatabase, ClusterScope, Collection};
use crate::client::models::{NetworkPeer, NetworkPeerConfig};
use crate::client::{WaitMode, WaitOptions, WaitOutcome};
use crate::error::{Error, Result};

const KIND: &str = "Network peer";

/// Peering state lives under `status.state` ("pending", "complete", ...).
pub const NETWORK_PEER_STATUS_FIELD: &str = "status.state";

#[derive(Debug, Clone)]
pub struct CapellaNetworkPeer {
    collection: Collection,
    identity: Identity,
}

impl CapellaNetworkPeer {
    pub async fn new(database: &CapellaDatabase, name: Option<&str>) -> Result<Self> {
        let collection = database.cluster_child("networkPeers")?;
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

    pub fn require_id(&self) -> Result<&str> {
        self.identity.require()
    }

    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.collection).await
    }

    pub async fn list(&self) -> Result<Vec<NetworkPeer>> {
        self.collection.list().await
    }

    pub async fn get(&self, peer_id: &str) -> Result<Option<NetworkPeer>> {
        self.collection.get(peer_id).await
    }

    pub async fn create(&mut self, mut config: NetworkPeerConfig) -> Result<String> {
        if config.name.is_none() {
            config.name = self.name().map(str::to_string);
        }
        let name = config
            .name
            .clone()
            .ok_or_else(|| Error::Other("network peer name is required".to_string()))?;

        let id = self.collection.create(&config).await?;
        self.identity.created(id.clone(), Some(&name));
        Ok(id)
    }

    pub async fn delete(&self) -> Result<()> {
        self.collection.delete(self.require_id()?).await
    }

    pub async fn status(&self) -> Result<Option<String>> {
        self.collection
            .status(self.require_id()?, NETWORK_PEER_STATUS_FIELD)
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
                NETWORK_PEER_STATUS_FIELD,
                target,
                mode,
                options,
                cancel,
            )
            .await
    }
}
