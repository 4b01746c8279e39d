//! Network peer models

use serde::{Deserialize, Serialize};

use super::{Audit, CloudProvider};

/// Peering state reported by Capella
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerStatus {
    /// "pending", "peering", "complete", "failed", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Network peer resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPeer {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PeerStatus>,

    /// Provider-side commands to accept the peering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

impl NetworkPeer {
    pub fn state(&self) -> Option<&str> {
        self.status.as_ref().and_then(|s| s.state.as_deref())
    }
}

/// Customer side of a peering, per provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProviderConfig {
    #[serde(rename_all = "camelCase")]
    Aws {
        account_id: String,
        vpc_id: String,
        region: String,
        cidr: String,
    },
    #[serde(rename_all = "camelCase")]
    Gcp {
        network_name: String,
        project_id: String,
        service_account: String,
        cidr: String,
    },
    #[serde(rename_all = "camelCase")]
    Azure {
        tenant_id: String,
        resource_group: String,
        subscription_id: String,
        vnet_id: String,
        cidr: String,
    },
}

impl ProviderConfig {
    pub fn provider(&self) -> CloudProvider {
        match self {
            ProviderConfig::Aws { .. } => CloudProvider::Aws,
            ProviderConfig::Gcp { .. } => CloudProvider::Gcp,
            ProviderConfig::Azure { .. } => CloudProvider::Azure,
        }
    }
}

/// Body for creating a network peer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPeerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub provider_type: CloudProvider,
    pub provider_config: ProviderConfig,
}

/// Builder for [`NetworkPeerConfig`]
#[derive(Debug, Clone)]
pub struct NetworkPeerBuilder {
    name: Option<String>,
    provider_config: ProviderConfig,
}

impl NetworkPeerBuilder {
    pub fn aws(
        account_id: impl Into<String>,
        vpc_id: impl Into<String>,
        region: impl Into<String>,
        cidr: impl Into<String>,
    ) -> Self {
        Self::with_config(ProviderConfig::Aws {
            account_id: account_id.into(),
            vpc_id: vpc_id.into(),
            region: region.into(),
            cidr: cidr.into(),
        })
    }

    pub fn gcp(
        network_name: impl Into<String>,
        project_id: impl Into<String>,
        service_account: impl Into<String>,
        cidr: impl Into<String>,
    ) -> Self {
        Self::with_config(ProviderConfig::Gcp {
            network_name: network_name.into(),
            project_id: project_id.into(),
            service_account: service_account.into(),
            cidr: cidr.into(),
        })
    }

    pub fn azure(
        tenant_id: impl Into<String>,
        resource_group: impl Into<String>,
        subscription_id: impl Into<String>,
        vnet_id: impl Into<String>,
        cidr: impl Into<String>,
    ) -> Self {
        Self::with_config(ProviderConfig::Azure {
            tenant_id: tenant_id.into(),
            resource_group: resource_group.into(),
            subscription_id: subscription_id.into(),
            vnet_id: vnet_id.into(),
            cidr: cidr.into(),
        })
    }

    fn with_config(provider_config: ProviderConfig) -> Self {
        Self {
            name: None,
            provider_config,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn build(self) -> NetworkPeerConfig {
        NetworkPeerConfig {
            name: self.name,
            provider_type: self.provider_config.provider(),
            provider_config: self.provider_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_aws_peer_config() {
        let config = NetworkPeerBuilder::aws("123456789012", "vpc-0abc", "us-east-1", "10.55.0.0/16")
            .name("pytest-peer")
            .build();

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "name": "pytest-peer",
                "providerType": "aws",
                "providerConfig": {
                    "accountId": "123456789012",
                    "vpcId": "vpc-0abc",
                    "region": "us-east-1",
                    "cidr": "10.55.0.0/16"
                }
            })
        );
    }

    #[test]
    fn test_azure_peer_config() {
        let config =
            NetworkPeerBuilder::azure("tenant", "pytest-rg", "sub", "pytest-net", "10.77.0.0/16")
                .build();
        let body = serde_json::to_value(&config).unwrap();
        assert_eq!(body["providerType"], "azure");
        assert_eq!(body["providerConfig"]["resourceGroup"], "pytest-rg");
        assert!(body.get("name").is_none());
    }

    #[test]
    fn test_peer_state() {
        let peer: NetworkPeer = serde_json::from_value(json!({
            "id": "np-1",
            "name": "peer",
            "status": {"state": "peering"}
        }))
        .unwrap();
        assert_eq!(peer.state(), Some("peering"));
    }
}
