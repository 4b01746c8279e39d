//! Organization user models

use serde::{Deserialize, Serialize};

use super::Audit;

/// Role granting full control of a project
pub const PROJECT_OWNER_ROLE: &str = "projectOwner";

/// A resource the user holds roles on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Organization user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub organization_roles: Vec<String>,

    #[serde(default)]
    pub resources: Vec<UserResource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

impl User {
    /// IDs of projects this user holds any role on.
    pub fn project_ids(&self) -> Vec<String> {
        self.resources
            .iter()
            .filter(|r| r.kind == "project")
            .map(|r| r.id.clone())
            .collect()
    }
}

/// One JSON-patch operation against a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPatchOp {
    pub op: String,
    pub path: String,
    pub value: Vec<String>,
}

impl UserPatchOp {
    /// Grant `projectOwner` on a project.
    pub fn add_project_owner(project_id: &str) -> Self {
        Self {
            op: "add".to_string(),
            path: format!("/resources/{}/roles", project_id),
            value: vec![PROJECT_OWNER_ROLE.to_string()],
        }
    }
}
