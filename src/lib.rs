//! Capella - SDK for the Couchbase Capella management API
//!
//! Resource handles ([`resources`]) sit on a small transport trait
//! ([`client::CapellaApi`]) and two shared protocols: paged listing with
//! field filters, and status polling.

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

pub use client::{CapellaApi, CapellaClient};
pub use error::{ApiError, ConfigError, Error, Result};
pub use resources::{
    CapellaAllowedCidr, CapellaAppService, CapellaColumnar, CapellaDatabase,
    CapellaDatabaseCredentials, CapellaNetworkPeer, CapellaOrganization, CapellaProject,
    CapellaUser,
};
