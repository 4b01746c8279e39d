//! Building blocks shared by cluster-style resources

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cloud provider hosting a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Gcp,
    Azure,
}

impl CloudProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "aws",
            CloudProvider::Gcp => "gcp",
            CloudProvider::Azure => "azure",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "aws" => Ok(CloudProvider::Aws),
            "gcp" => Ok(CloudProvider::Gcp),
            "azure" => Ok(CloudProvider::Azure),
            other => Err(Error::Other(format!("unknown cloud provider: {}", other))),
        }
    }
}

/// Node size, written as `<cpu>x<ram>` (e.g. `4x16`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compute {
    pub cpu: u32,
    pub ram: u32,
}

impl FromStr for Compute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Other(format!("invalid compute size \"{}\" (expected CPUxRAM)", s));
        let (cpu, ram) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        Ok(Compute {
            cpu: cpu.trim().parse().map_err(|_| invalid())?,
            ram: ram.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Compute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cpu, self.ram)
    }
}

/// Single- or multi-AZ deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Availability {
    /// Multi-AZ from three nodes up, single otherwise.
    pub fn for_nodes(nodes: u32) -> Self {
        let kind = if nodes >= 3 { "multi" } else { "single" };
        Self {
            kind: kind.to_string(),
        }
    }
}

/// Support plan attached to a cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Default for Support {
    fn default() -> Self {
        Self {
            plan: "developer pro".to_string(),
            timezone: Some("PT".to_string()),
        }
    }
}
