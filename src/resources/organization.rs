//! Organization handle

use std::sync::Arc;

use log::debug;

use super::Collection;
use crate::client::CapellaApi;
use crate::client::filter::field_str;
use crate::client::models::Organization;
use crate::error::{ApiError, Result};

/// Root of every Capella resource path.
pub const ORGANIZATIONS_ENDPOINT: &str = "/v4/organizations";

/// The organization all other handles are scoped under.
#[derive(Debug, Clone)]
pub struct CapellaOrganization {
    collection: Collection,
    id: String,
}

impl CapellaOrganization {
    /// Bind to `organization_id`, or to the first organization the API key
    /// can see when none is configured.
    pub async fn new(api: Arc<dyn CapellaApi>, organization_id: Option<&str>) -> Result<Self> {
        let collection = Collection::new(api, ORGANIZATIONS_ENDPOINT);

        let id = match organization_id {
            Some(id) => id.to_string(),
            None => {
                let records = collection.list_raw().await?;
                let first = records
                    .first()
                    .and_then(|record| field_str(record, "id"))
                    .ok_or_else(|| ApiError::NotFound("No organizations found".to_string()))?;
                debug!("using first organization {}", first);
                first.to_string()
            }
        };

        Ok(Self { collection, id })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `/v4/organizations`
    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    /// `/v4/organizations/{id}`
    pub fn path(&self) -> String {
        self.collection.item_path(&self.id)
    }

    pub fn api(&self) -> Arc<dyn CapellaApi> {
        self.collection.api()
    }

    /// A collection directly under this organization (`projects`, `users`, ...).
    pub fn child(&self, segment: &str) -> Collection {
        self.collection.child(&self.id, segment)
    }

    pub async fn list(&self) -> Result<Vec<Organization>> {
        self.collection.list().await
    }

    pub async fn get(&self, organization_id: &str) -> Result<Option<Organization>> {
        self.collection.get(organization_id).await
    }
}
