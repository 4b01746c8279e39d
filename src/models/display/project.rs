//! Project display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{created, or_none, truncate_string};
use capella::client::models::Project;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectDisplay {
    #[tabled(rename = "PROJECT ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Project> for ProjectDisplay {
    fn from(project: Project) -> Self {
        Self {
            description: truncate_string(&or_none(project.description.as_deref()), 40),
            created: created(project.audit.as_ref()),
            id: project.id,
            name: project.name,
        }
    }
}
