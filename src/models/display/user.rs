//! User display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_none;
use capella::client::models::User;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ORG ROLES")]
    pub roles: String,

    #[tabled(rename = "PROJECTS")]
    pub projects: usize,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            projects: user.project_ids().len(),
            name: or_none(user.name.as_deref()),
            roles: user.organization_roles.join(", "),
            id: user.id,
            email: user.email,
        }
    }
}
