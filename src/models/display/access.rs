//! Display models for resources nested under a cluster

use serde::Serialize;
use tabled::Tabled;

use super::common::{created, or_none};
use capella::client::models::{AllowedCidr, DatabaseCredential, NetworkPeer};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CidrDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "CIDR")]
    pub cidr: String,

    #[tabled(rename = "COMMENT")]
    pub comment: String,

    #[tabled(rename = "EXPIRES")]
    pub expires_at: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<AllowedCidr> for CidrDisplay {
    fn from(cidr: AllowedCidr) -> Self {
        Self {
            comment: or_none(cidr.comment.as_deref()),
            expires_at: or_none(cidr.expires_at.as_deref()),
            status: or_none(cidr.status.as_deref()),
            id: cidr.id,
            cidr: cidr.cidr,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CredentialDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PRIVILEGES")]
    pub privileges: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<DatabaseCredential> for CredentialDisplay {
    fn from(credential: DatabaseCredential) -> Self {
        let privileges: Vec<String> = credential
            .access
            .iter()
            .flat_map(|access| access.privileges.iter().cloned())
            .collect();
        Self {
            privileges: privileges.join(", "),
            created: created(credential.audit.as_ref()),
            id: credential.id,
            name: credential.name,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PeerDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROVIDER")]
    pub provider: String,

    #[tabled(rename = "STATE")]
    pub state: String,
}

impl From<NetworkPeer> for PeerDisplay {
    fn from(peer: NetworkPeer) -> Self {
        Self {
            provider: or_none(peer.provider_type.as_deref()),
            state: or_none(peer.state()),
            id: peer.id,
            name: peer.name,
        }
    }
}
