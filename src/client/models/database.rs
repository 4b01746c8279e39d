//! Database (operational cluster) models

use serde::{Deserialize, Serialize};

use super::{Audit, Availability, CloudProvider, Compute, Support};
use crate::error::{Error, Result};

/// Data, index, and query: the default service mix of a service group
const DEFAULT_SERVICES: [&str; 3] = ["data", "index", "query"];

const AWS_DISK_TYPE: &str = "gp3";
const AWS_DISK_IOPS: u32 = 3000;
const GCP_DISK_TYPE: &str = "pd-ssd";
const AZURE_ULTRA_DISK_TYPE: &str = "Ultra";
const AZURE_ULTRA_DISK_IOPS: u32 = 7000;

/// Where a cluster is hosted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudProviderSpec {
    #[serde(rename = "type")]
    pub provider: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
}

/// Database resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    /// Cluster ID
    pub id: String,

    /// Cluster name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<CloudProviderSpec>,

    /// Lifecycle state ("deploying", "healthy", "destroying", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

/// Storage attached to each node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoexpansion: Option<bool>,
}

impl Disk {
    /// Provider-appropriate disk for `storage` GB.
    pub fn for_provider(provider: CloudProvider, storage: u32, ultra: bool) -> Self {
        match provider {
            CloudProvider::Aws => Disk {
                kind: AWS_DISK_TYPE.to_string(),
                storage: Some(storage),
                iops: Some(AWS_DISK_IOPS),
                autoexpansion: None,
            },
            CloudProvider::Gcp => Disk {
                kind: GCP_DISK_TYPE.to_string(),
                storage: Some(storage),
                iops: None,
                autoexpansion: None,
            },
            CloudProvider::Azure if ultra => Disk {
                kind: AZURE_ULTRA_DISK_TYPE.to_string(),
                storage: Some(storage),
                iops: Some(AZURE_ULTRA_DISK_IOPS),
                autoexpansion: None,
            },
            CloudProvider::Azure => Disk {
                kind: azure_premium_tier(storage).to_string(),
                storage: None,
                iops: None,
                autoexpansion: Some(true),
            },
        }
    }
}

/// Smallest Azure premium disk tier that holds `storage` GB.
fn azure_premium_tier(storage: u32) -> &'static str {
    match storage {
        0..=64 => "P6",
        65..=128 => "P10",
        129..=256 => "P15",
        257..=512 => "P20",
        513..=1024 => "P30",
        1025..=2048 => "P40",
        2049..=4096 => "P50",
        _ => "P60",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub compute: Compute,
    pub disk: Disk,
}

/// A set of identically sized nodes running the same services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceGroup {
    pub node: Node,
    pub num_of_nodes: u32,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouchbaseServer {
    pub version: String,
}

/// Body for creating a database
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// Filled from the handle's name when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub cloud_provider: CloudProviderSpec,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub couchbase_server: Option<CouchbaseServer>,

    pub service_groups: Vec<ServiceGroup>,

    pub availability: Availability,

    pub support: Support,
}

/// Builder for [`DatabaseConfig`]
///
/// ```ignore
/// let config = DatabaseBuilder::new(CloudProvider::Aws)
///     .name("pytest-cluster")
///     .region("us-east-2")
///     .service_group("4x16".parse()?, 3, 256)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseBuilder {
    provider: CloudProvider,
    name: Option<String>,
    description: Option<String>,
    region: Option<String>,
    cidr: Option<String>,
    version: Option<String>,
    service_groups: Vec<ServiceGroup>,
    availability: Option<Availability>,
    support: Option<Support>,
}

impl DatabaseBuilder {
    pub fn new(provider: CloudProvider) -> Self {
        Self {
            provider,
            name: None,
            description: None,
            region: None,
            cidr: None,
            version: None,
            service_groups: Vec::new(),
            availability: None,
            support: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn cidr(mut self, cidr: impl Into<String>) -> Self {
        self.cidr = Some(cidr.into());
        self
    }

    /// Couchbase Server version (latest when unset)
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add a data/index/query service group.
    pub fn service_group(self, compute: Compute, nodes: u32, storage: u32) -> Self {
        self.push_group(compute, nodes, storage, false)
    }

    /// Add a service group on Azure Ultra disks (plain disks elsewhere).
    pub fn ultra_service_group(self, compute: Compute, nodes: u32, storage: u32) -> Self {
        self.push_group(compute, nodes, storage, true)
    }

    fn push_group(mut self, compute: Compute, nodes: u32, storage: u32, ultra: bool) -> Self {
        self.service_groups.push(ServiceGroup {
            node: Node {
                compute,
                disk: Disk::for_provider(self.provider, storage, ultra),
            },
            num_of_nodes: nodes,
            services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    pub fn support(mut self, support: Support) -> Self {
        self.support = Some(support);
        self
    }

    /// Build the config; needs a region and at least one service group.
    pub fn build(self) -> Result<DatabaseConfig> {
        let region = self
            .region
            .ok_or_else(|| Error::Other("database region is required".to_string()))?;
        if self.service_groups.is_empty() {
            return Err(Error::Other(
                "database needs at least one service group".to_string(),
            ));
        }

        let nodes: u32 = self.service_groups.iter().map(|g| g.num_of_nodes).sum();

        Ok(DatabaseConfig {
            name: self.name,
            description: self.description,
            cloud_provider: CloudProviderSpec {
                provider: self.provider.as_str().to_string(),
                region,
                cidr: self.cidr,
            },
            couchbase_server: self.version.map(|version| CouchbaseServer { version }),
            service_groups: self.service_groups,
            availability: self
                .availability
                .unwrap_or_else(|| Availability::for_nodes(nodes)),
            support: self.support.unwrap_or_default(),
        })
    }
}
