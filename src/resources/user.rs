//! Organization user handle, keyed on email

use super::identity::Identity;
use super::{CapellaOrganization, Collection};
use crate::client::filter::FieldFilter;
use crate::client::models::{User, UserPatchOp};
use crate::client::from_value;
use crate::error::{ApiError, Result};

const KIND: &str = "User";

#[derive(Debug, Clone)]
pub struct CapellaUser {
    collection: Collection,
    identity: Identity,
}

impl CapellaUser {
    pub async fn new(org: &CapellaOrganization, email: Option<&str>) -> Result<Self> {
        let collection = org.child("users");
        let identity = Identity::lookup(&collection, KIND, "email", email).await?;
        Ok(Self {
            collection,
            identity,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.identity.id()
    }

    pub fn email(&self) -> Option<&str> {
        self.identity.key()
    }

    pub fn endpoint(&self) -> &str {
        self.collection.endpoint()
    }

    pub async fn refresh(&mut self) -> Result<()> {
        self.identity.refresh(&self.collection).await
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.collection.list().await
    }

    pub async fn get(&self, user_id: &str) -> Result<Option<User>> {
        self.collection.get(user_id).await
    }

    /// The full record of the user this handle is keyed on.
    pub async fn get_by_email(&self) -> Result<Option<User>> {
        let Some(email) = self.email() else {
            return Ok(None);
        };
        self.collection
            .find(&FieldFilter::new("email", email))
            .await?
            .map(from_value::<User>)
            .transpose()
    }

    /// Grant the project owner role on `project_id`.
    pub async fn set_project_owner(&self, project_id: &str) -> Result<()> {
        let user_id = self.identity.require()?;
        let ops = vec![UserPatchOp::add_project_owner(project_id)];
        let body = serde_json::to_value(&ops)?;
        self.collection
            .api()
            .patch(&self.collection.item_path(user_id), &body)
            .await
    }

    /// Ids of the projects this user has a role on.
    pub async fn projects_by_owner(&self) -> Result<Vec<String>> {
        let user = self.get_by_email().await?.ok_or_else(|| {
            ApiError::NotFound(format!("{} {}", KIND, self.email().unwrap_or_default()))
        })?;
        Ok(user.project_ids())
    }
}
