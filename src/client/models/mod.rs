//! Capella API data models
//!
//! Records returned by the API plus the stripped create configs (and their
//! builders) sent back to it. Models are organized by resource type.

mod allowed_cidr;
mod app_service;
mod audit;
mod columnar;
mod common;
mod credentials;
mod database;
mod network_peer;
mod org;
mod project;
mod user;

pub use allowed_cidr::{AllowedCidr, AllowedCidrBuilder, AllowedCidrConfig};
pub use app_service::{AppService, AppServiceBuilder, AppServiceConfig};
pub use audit::Audit;
pub use columnar::{Columnar, ColumnarBuilder, ColumnarConfig};
pub use common::{Availability, CloudProvider, Compute, Support};
pub use credentials::{
    Access, AccessResources, BucketAccess, DatabaseCredential, DatabaseCredentialConfig,
    DatabaseCredentialsBuilder,
};
pub use database::{
    CloudProviderSpec, CouchbaseServer, Database, DatabaseBuilder, DatabaseConfig, Disk, Node,
    ServiceGroup,
};
pub use network_peer::{
    NetworkPeer, NetworkPeerBuilder, NetworkPeerConfig, PeerStatus, ProviderConfig,
};
pub use org::Organization;
pub use project::{Project, ProjectBuilder, ProjectConfig};
pub use user::{PROJECT_OWNER_ROLE, User, UserPatchOp, UserResource};
