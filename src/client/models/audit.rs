//! Audit metadata shared by every Capella record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who created and last modified a record, and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub modified_by: String,
    pub modified_at: DateTime<Utc>,
    /// Monotonic record version
    pub version: u64,
}
