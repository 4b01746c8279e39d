//! Allowed CIDR handle, for databases and columnar clusters

use super::identity::Identity;
use super::{ClusterScope, Collection};
use crate::client::models::{AllowedCidr, AllowedCidrConfig};
use crate::error::Result;

const KIND: &str = "Allowed CIDR";

/// One entry of a cluster's IP allow list, keyed on the CIDR block.
#[derive(Debug, Clone)]
pub struct CapellaAllowedCidr {
    collection: Collection,
    identity: Identity,
}

impl CapellaAllowedCidr {
    pub async fn new(cluster: &impl ClusterScope, cidr: Option<&str>) -> Result<Self> {
        let collection = cluster.cluster_child("allowedcidrs")?;
        let identity = Identity::lookup(&collection, KIND, "cidr", cidr).await?;
        Ok(Self {
            collection,
            identity,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    pub fn cidr(&self) -> Option<&str> {
        self.identity.key()
    }

    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.collection).await
    }

    pub async fn list(&self) -> Result<Vec<AllowedCidr>> {
        self.collection.list().await
    }

    pub async fn get(&self, cidr_id: &str) -> Result<Option<AllowedCidr>> {
        self.collection.get(cidr_id).await
    }

    pub async fn create(&mut self, config: &AllowedCidrConfig) -> Result<String> {
        let id = self.collection.create(config).await?;
        self.identity.created(id.clone(), Some(&config.cidr));
        Ok(id)
    }

    pub async fn delete(&self) -> Result<()> {
        self.collection.delete(self.identity.require()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCapellaClient;
    use crate::client::models::AllowedCidrBuilder;
    use crate::resources::{CapellaColumnar, CapellaDatabase, CapellaOrganization, CapellaProject};
    use serde_json::json;
    use std::sync::Arc;

    const PROJECT: &str = "/v4/organizations/org-1/projects/p1";

    async fn project(mock: Arc<MockCapellaClient>) -> CapellaProject {
        let org = CapellaOrganization::new(mock, Some("org-1")).await.unwrap();
        CapellaProject::with_id(&org, "p1")
    }

    #[tokio::test]
    async fn test_database_allow_list() {
        let path = format!("{PROJECT}/clusters/c1/allowedcidrs");
        let mock = Arc::new(
            MockCapellaClient::new()
                .with_collection(&path, vec![json!({"id": "x1", "cidr": "10.0.0.0/16"})])
                .await,
        );
        let project = project(mock.clone()).await;
        let database = CapellaDatabase::with_id(&project, "c1").unwrap();

        let existing = CapellaAllowedCidr::new(&database, Some("10.0.0.0/16")).await.unwrap();
        assert_eq!(existing.id(), Some("x1"));

        let mut added = CapellaAllowedCidr::new(&database, None).await.unwrap();
        let config = AllowedCidrBuilder::new("0.0.0.0/0").comment("anywhere").build();
        added.create(&config).await.unwrap();
        assert_eq!(added.cidr(), Some("0.0.0.0/0"));
        assert_eq!(added.list().await.unwrap().len(), 2);

        let body = mock
            .captured_requests()
            .await
            .into_iter()
            .find(|r| r.method == "POST")
            .and_then(|r| r.body)
            .unwrap();
        assert_eq!(body, json!({"cidr": "0.0.0.0/0", "comment": "anywhere"}));
    }

    #[tokio::test]
    async fn test_columnar_allow_list_path() {
        let mock = Arc::new(MockCapellaClient::new());
        let project = project(mock).await;
        let columnar = CapellaColumnar::with_id(&project, "a1").unwrap();
        let cidr = CapellaAllowedCidr::new(&columnar, None).await.unwrap();
        assert_eq!(
            cidr.endpoint(),
            format!("{PROJECT}/analyticsClusters/a1/allowedcidrs")
        );
    }
}
