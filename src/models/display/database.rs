//! Database and columnar cluster display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{created, or_none};
use capella::client::models::{Columnar, Database};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DatabaseDisplay {
    #[tabled(rename = "DATABASE ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROVIDER")]
    pub provider: String,

    #[tabled(rename = "REGION")]
    pub region: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Database> for DatabaseDisplay {
    fn from(database: Database) -> Self {
        let (provider, region) = match &database.cloud_provider {
            Some(spec) => (spec.provider.clone(), spec.region.clone()),
            None => (or_none(None), or_none(None)),
        };
        Self {
            provider,
            region,
            state: or_none(database.current_state.as_deref()),
            created: created(database.audit.as_ref()),
            id: database.id,
            name: database.name,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ColumnarDisplay {
    #[tabled(rename = "CLUSTER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROVIDER")]
    pub provider: String,

    #[tabled(rename = "REGION")]
    pub region: String,

    #[tabled(rename = "NODES")]
    pub nodes: String,

    #[tabled(rename = "STATE")]
    pub state: String,
}

impl From<Columnar> for ColumnarDisplay {
    fn from(columnar: Columnar) -> Self {
        Self {
            provider: or_none(columnar.cloud_provider.as_deref()),
            region: or_none(columnar.region.as_deref()),
            nodes: match (columnar.nodes, columnar.compute) {
                (Some(n), Some(compute)) => format!("{} x {}", n, compute),
                (Some(n), None) => n.to_string(),
                _ => or_none(None),
            },
            state: or_none(columnar.current_state.as_deref()),
            id: columnar.id,
            name: columnar.name,
        }
    }
}
