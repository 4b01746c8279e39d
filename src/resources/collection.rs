//! One Capella collection endpoint
//!
//! Every resource handle is built on a [`Collection`]: the list/item path of a
//! resource type under its parent, plus the shared transport.

use std::future::Future;
use std::sync::Arc;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::filter::field_str;
use crate::client::{
    CapellaApi, FieldFilter, PageDescriptor, WaitMode, WaitOptions, WaitOutcome, created_id,
    from_value, list_all, poll_status,
};
use crate::error::{ApiError, Result};

/// A collection endpoint such as `/v4/organizations/{org}/projects`.
#[derive(Clone)]
pub struct Collection {
    api: Arc<dyn CapellaApi>,
    endpoint: String,
    pages: PageDescriptor,
}

impl std::fmt::Debug for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("endpoint", &self.endpoint)
            .field("pages", &self.pages)
            .finish()
    }
}

impl Collection {
    pub fn new(api: Arc<dyn CapellaApi>, endpoint: impl Into<String>) -> Self {
        Self {
            api,
            endpoint: endpoint.into(),
            pages: PageDescriptor::CAPELLA,
        }
    }

    /// Use a different paging layout for this endpoint.
    pub fn with_pages(mut self, pages: PageDescriptor) -> Self {
        self.pages = pages;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api(&self) -> Arc<dyn CapellaApi> {
        Arc::clone(&self.api)
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Collection nested under one item, e.g. `clusters/{id}/users`. Keeps
    /// this collection's paging layout.
    pub fn child(&self, id: &str, segment: &str) -> Collection {
        Collection::new(self.api(), format!("{}/{}", self.item_path(id), segment))
            .with_pages(self.pages)
    }

    /// Every record of the collection, in server order.
    pub async fn list_raw(&self) -> Result<Vec<Value>> {
        list_all(self.api.as_ref(), &self.endpoint, &self.pages).await
    }

    pub async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.list_raw()
            .await?
            .into_iter()
            .map(from_value::<T>)
            .collect()
    }

    /// Fetch one record; a 404 is `Ok(None)`.
    pub async fn get_raw(&self, id: &str) -> Result<Option<Value>> {
        match self.api.get(&self.item_path(id), &[]).await {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>> {
        self.get_raw(id).await?.map(from_value::<T>).transpose()
    }

    /// First record matching `filter`.
    pub async fn find(&self, filter: &FieldFilter) -> Result<Option<Value>> {
        let records = self.list_raw().await?;
        Ok(filter.first(&records).cloned())
    }

    /// Id of the single record matching `filter`.
    pub async fn resolve_id(&self, filter: &FieldFilter) -> Result<Option<String>> {
        let records = self.list_raw().await?;
        let id = filter
            .unique(&records)?
            .map(|record| {
                field_str(record, "id").map(str::to_string).ok_or_else(|| {
                    ApiError::InvalidResponse(format!(
                        "{} record matching {} has no id",
                        self.endpoint,
                        filter.field()
                    ))
                })
            })
            .transpose()?;

        debug!(
            "{}: {} = \"{}\" resolved to {:?}",
            self.endpoint,
            filter.field(),
            filter.value(),
            id
        );
        Ok(id)
    }

    /// POST a create config and return the new id.
    pub async fn create<C: Serialize>(&self, config: &C) -> Result<String> {
        let body = serde_json::to_value(config)?;
        let response = self.api.post(&self.endpoint, &body).await?;
        let id = created_id(&response)?;
        debug!("{}: created {}", self.endpoint, id);
        Ok(id)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete(&self.item_path(id)).await
    }

    /// Current value of `status_field` on one record, `None` once it is gone.
    pub async fn status(&self, id: &str, status_field: &str) -> Result<Option<String>> {
        let Some(record) = self.get_raw(id).await? else {
            return Ok(None);
        };
        field_str(&record, status_field)
            .map(|status| Some(status.to_string()))
            .ok_or_else(|| {
                ApiError::InvalidResponse(format!(
                    "{} has no \"{}\" field",
                    self.item_path(id),
                    status_field
                ))
                .into()
            })
    }

    /// Poll one record's status field; see [`poll_status`].
    pub async fn wait<C>(
        &self,
        id: &str,
        status_field: &str,
        target: &str,
        mode: WaitMode,
        options: WaitOptions,
        cancel: C,
    ) -> Result<WaitOutcome>
    where
        C: Future<Output = ()>,
    {
        poll_status(
            || self.status(id, status_field),
            target,
            mode,
            options,
            cancel,
        )
        .await
    }
}
