//! Database credential (database user) models

use serde::{Deserialize, Serialize};

use super::Audit;

const DATA_WRITER: &str = "data_writer";
const DATA_READER: &str = "data_reader";

/// Bucket (and optional scopes) a privilege applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketAccess {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResources {
    #[serde(default)]
    pub buckets: Vec<BucketAccess>,
}

/// One privilege grant; without resources it covers every bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    pub privileges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<AccessResources>,
}

/// Database credential resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseCredential {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub access: Vec<Access>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<Audit>,
}

/// Body for creating a database credential
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseCredentialConfig {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    pub access: Vec<Access>,
}

/// Builder for [`DatabaseCredentialConfig`]
#[derive(Debug, Clone)]
pub struct DatabaseCredentialsBuilder {
    name: String,
    password: Option<String>,
    privilege: &'static str,
    buckets: Vec<BucketAccess>,
}

impl DatabaseCredentialsBuilder {
    /// Read/write credentials by default.
    pub fn new(name: impl Into<String>, password: Option<String>) -> Self {
        Self {
            name: name.into(),
            password,
            privilege: DATA_WRITER,
            buckets: Vec::new(),
        }
    }

    pub fn data_read_write(mut self) -> Self {
        self.privilege = DATA_WRITER;
        self
    }

    pub fn data_read_only(mut self) -> Self {
        self.privilege = DATA_READER;
        self
    }

    /// Restrict the grant to a bucket (repeatable).
    pub fn bucket(mut self, name: impl Into<String>) -> Self {
        self.buckets.push(BucketAccess {
            name: name.into(),
            scopes: Vec::new(),
        });
        self
    }

    pub fn build(self) -> DatabaseCredentialConfig {
        let resources = if self.buckets.is_empty() {
            None
        } else {
            Some(AccessResources {
                buckets: self.buckets,
            })
        };

        DatabaseCredentialConfig {
            name: self.name,
            password: self.password,
            access: vec![Access {
                privileges: vec![self.privilege.to_string()],
                resources,
            }],
        }
    }
}
