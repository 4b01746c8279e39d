//! Display model implementations for table and JSON output
//!
//! Display models turn API records into rows with CLI column names.

mod access;
mod common;
mod database;
mod org;
mod project;
mod user;

pub use access::{CidrDisplay, CredentialDisplay, PeerDisplay};
pub use common::or_none;
pub use database::{ColumnarDisplay, DatabaseDisplay};
pub use org::OrgDisplay;
pub use project::ProjectDisplay;
pub use user::UserDisplay;
