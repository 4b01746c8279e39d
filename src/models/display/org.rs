//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{created, or_none, truncate_string};
use capella::client::models::Organization;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            description: truncate_string(&or_none(org.description.as_deref()), 40),
            created: created(org.audit.as_ref()),
            id: org.id,
            name: org.name,
        }
    }
}
