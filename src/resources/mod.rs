//! Resource handles
//!
//! Each handle binds a parent resource's endpoint, the shared transport, and
//! a lookup key (name, email, CIDR). The key is resolved to an id once, when
//! the handle is built; `refresh()` resolves it again.
//!
//! ```ignore
//! let org = CapellaOrganization::new(api, None).await?;
//! let project = CapellaProject::new(&org, Some("pytest-project")).await?;
//! let database = CapellaDatabase::new(&project, Some("pytest-cluster")).await?;
//! database.wait("deploying", WaitMode::While, WaitOptions::default(), pending()).await?;
//! ```

mod allowed_cidr;
mod app_service;
mod collection;
mod columnar;
mod credentials;
mod database;
mod identity;
mod network_peer;
mod organization;
mod project;
mod user;

pub use allowed_cidr::CapellaAllowedCidr;
pub use app_service::{APP_SERVICE_STATUS_FIELD, CapellaAppService};
pub use collection::Collection;
pub use columnar::{COLUMNAR_STATUS_FIELD, CapellaColumnar};
pub use credentials::CapellaDatabaseCredentials;
pub use database::{CapellaDatabase, DATABASE_STATUS_FIELD};
pub use network_peer::{CapellaNetworkPeer, NETWORK_PEER_STATUS_FIELD};
pub use organization::{CapellaOrganization, ORGANIZATIONS_ENDPOINT};
pub use project::CapellaProject;
pub use user::CapellaUser;

use crate::error::Result;

/// A cluster that owns nested collections such as `allowedcidrs`.
pub trait ClusterScope {
    /// The collection `segment` under this cluster; fails if the cluster id
    /// is not resolved.
    fn cluster_child(&self, segment: &str) -> Result<Collection>;
}
