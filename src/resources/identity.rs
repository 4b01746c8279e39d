//! Lookup-key to id resolution shared by resource handles

use crate::client::FieldFilter;
use crate::error::{ApiError, Result};

use super::Collection;

/// The id of one remote object, resolved from a human-readable key.
///
/// A handle built from a key looks it up once at construction; one built from
/// an id (or by `create`) is resolved immediately. `None` after resolution
/// means no record matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    kind: &'static str,
    field: &'static str,
    key: Option<String>,
    id: Option<String>,
}

impl Identity {
    /// Resolve `key` against `collection`. A missing key leaves the id unset.
    pub(crate) async fn lookup(
        collection: &Collection,
        kind: &'static str,
        field: &'static str,
        key: Option<&str>,
    ) -> Result<Self> {
        let mut identity = Self {
            kind,
            field,
            key: key.map(str::to_string),
            id: None,
        };
        identity.refresh(collection).await?;
        Ok(identity)
    }

    /// Identity for an already known id.
    pub(crate) fn known(kind: &'static str, field: &'static str, id: &str) -> Self {
        Self {
            kind,
            field,
            key: None,
            id: Some(id.to_string()),
        }
    }

    /// Re-run the key lookup. Id-only identities are left as they are.
    pub(crate) async fn refresh(&mut self, collection: &Collection) -> Result<()> {
        if let Some(key) = &self.key {
            self.id = collection
                .resolve_id(&FieldFilter::new(self.field, key.as_str()))
                .await?;
        }
        Ok(())
    }

    pub(crate) fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub(crate) fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The resolved id, or `ApiError::NotFound` naming the key.
    pub(crate) fn require(&self) -> Result<&str> {
        self.id.as_deref().ok_or_else(|| {
            let what = match &self.key {
                Some(key) => format!("{} {}", self.kind, key),
                None => format!("{} (no {} selected)", self.kind, self.field),
            };
            ApiError::NotFound(what).into()
        })
    }

    /// Record the id returned by a create call; the key defaults to `key`.
    pub(crate) fn created(&mut self, id: String, key: Option<&str>) {
        if self.key.is_none() {
            self.key = key.map(str::to_string);
        }
        self.id = Some(id);
    }
}
