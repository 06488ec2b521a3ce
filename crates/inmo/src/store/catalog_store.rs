use tracing::warn;

use crate::api::ApiError;
use crate::models::EntityId;
use crate::services::{CatalogResource, CatalogService, ChildResource};

/// List state behind a catalog screen: the loaded rows plus loading/error flags.
///
/// Mutations patch the local list from the backend's answer instead of
/// refetching. A failed call leaves the list untouched and records the error;
/// nothing reconciles with edits made elsewhere until the next `reload`.
#[derive(Debug)]
pub struct CatalogStore<R> {
    service: CatalogService<R>,
    items: Vec<R>,
    loading: bool,
    error: Option<String>,
    parent: Option<EntityId>,
}

impl<R: CatalogResource> CatalogStore<R> {
    pub fn new(service: CatalogService<R>) -> Self {
        Self {
            service,
            items: Vec::new(),
            loading: false,
            error: None,
            parent: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn find(&self, id: EntityId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn service(&self) -> &CatalogService<R> {
        &self.service
    }

    /// Replace the list with the backend's full collection.
    pub async fn reload(&mut self) -> Result<(), ApiError> {
        self.parent = None;
        self.loading = true;
        let result = self.service.get_all().await;
        self.loading = false;
        let items = self.settle(result)?;
        self.items = items;
        Ok(())
    }

    pub async fn create(&mut self, draft: &R::Draft) -> Result<R, ApiError> {
        self.loading = true;
        let result = self.service.create(draft).await;
        self.loading = false;
        let created = self.settle(result)?;
        self.upsert(created.clone());
        Ok(created)
    }

    pub async fn update(&mut self, id: EntityId, draft: &R::Draft) -> Result<R, ApiError> {
        self.loading = true;
        let result = self.service.update(id, draft).await;
        self.loading = false;
        let updated = self.settle(result)?;
        if updated.id() != id {
            self.items.retain(|item| item.id() != id);
        }
        self.upsert(updated.clone());
        Ok(updated)
    }

    pub async fn remove(&mut self, id: EntityId) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.service.delete(id).await;
        self.loading = false;
        self.settle(result)?;
        self.items.retain(|item| item.id() != id);
        Ok(())
    }

    /// Insert or replace so the row appears exactly once.
    fn upsert(&mut self, item: R) {
        let id = item.id();
        let mut seen = false;
        self.items.retain(|existing| {
            if existing.id() != id {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        });
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    fn settle<T>(&mut self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(err) => {
                warn!(resource = R::PLURAL, error = %err, "catalog call failed");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl<R: ChildResource> CatalogStore<R> {
    /// Load only the rows under `parent_id` (e.g. cities of one department).
    pub async fn reload_for_parent(&mut self, parent_id: EntityId) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.service.get_by_parent(parent_id).await;
        self.loading = false;
        let items = self.settle(result)?;
        self.items = items;
        self.parent = Some(parent_id);
        Ok(())
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }
}
