//! Cached data access for the item collection.
//!
//! # Design
//! `CatalogService` owns the in-memory snapshot of the collection and the
//! current selection. Reads are served from the snapshot once `list` has
//! populated it; every successful mutation patches the snapshot so it stays
//! consistent with the endpoint. Nothing is global: each service instance has
//! its own cache and selection.
//!
//! All operations take `&mut self`, so a single control flow reads and
//! mutates the cache. A failed remote call leaves cache and selection
//! untouched and is returned to the caller as-is.

use tracing::{debug, error, info};

use crate::client::CatalogClient;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::selection::{SelectionState, SubscriptionId};
use crate::types::Item;

#[derive(Debug)]
pub struct CatalogService<T> {
    client: CatalogClient,
    transport: T,
    cache: Option<Vec<Item>>,
    selection: SelectionState,
}

impl<T: Transport> CatalogService<T> {
    pub fn new(client: CatalogClient, transport: T) -> Self {
        Self {
            client,
            transport,
            cache: None,
            selection: SelectionState::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), path = %request.path, "issuing request");
        self.transport.execute(request).await
    }

    /// The whole collection, from the snapshot when present.
    pub async fn list(&mut self) -> Result<Vec<Item>, TransportError> {
        if let Some(items) = &self.cache {
            debug!(count = items.len(), "returning cached item data");
            return Ok(items.clone());
        }
        debug!("fetching item data");
        let request = self.client.build_list_items();
        let items = self
            .execute(request)
            .await
            .and_then(|response| self.client.parse_list_items(response))
            .inspect_err(|e| error!(error = %e, "failed to list items"))?;
        self.cache = Some(items.clone());
        Ok(items)
    }

    /// An item by id. Id `0` yields a blank unsaved item without any lookup.
    ///
    /// A cache miss falls through to the endpoint; the fetched item is not
    /// added to the snapshot.
    pub async fn get_by_id(&self, id: u64) -> Result<Item, TransportError> {
        if id == 0 {
            return Ok(Item::new_unsaved());
        }
        if let Some(found) = self.cached_item(id) {
            debug!(id, "returning cached item");
            return Ok(found.clone());
        }
        let request = self.client.build_get_item(id);
        self.execute(request)
            .await
            .and_then(|response| self.client.parse_get_item(response))
            .inspect_err(|e| error!(id, error = %e, "failed to fetch item"))
    }

    /// Creates the item when its id is `0`, otherwise updates it.
    pub async fn save(&mut self, item: &Item) -> Result<Item, TransportError> {
        if item.is_new() {
            self.create(item).await
        } else {
            self.update(item).await
        }
    }

    async fn create(&mut self, item: &Item) -> Result<Item, TransportError> {
        let request = self.client.build_create_item(item)?;
        let created = self
            .execute(request)
            .await
            .and_then(|response| self.client.parse_create_item(response))
            .inspect_err(|e| error!(error = %e, "failed to create item"))?;
        info!(id = created.id, name = %created.name, "created item");
        if let Some(items) = self.cache.as_mut() {
            match items.iter_mut().find(|i| i.id == created.id) {
                Some(slot) => *slot = created.clone(),
                None => items.push(created.clone()),
            }
        }
        self.selection.set(Some(created.clone()));
        Ok(created)
    }

    async fn update(&mut self, item: &Item) -> Result<Item, TransportError> {
        let request = self.client.build_update_item(item)?;
        let updated = self
            .execute(request)
            .await
            .and_then(|response| self.client.parse_update_item(response))
            .inspect_err(|e| error!(id = item.id, error = %e, "failed to update item"))?;
        info!(id = item.id, "updated item");
        if let Some(slot) = self
            .cache
            .as_mut()
            .and_then(|items| items.iter_mut().find(|i| i.id == item.id))
        {
            *slot = updated.clone();
        }
        if self.selection.current().is_some_and(|s| s.id == item.id) {
            self.selection.set(Some(updated.clone()));
        }
        Ok(updated)
    }

    /// Deletes remotely, then drops the entry from the snapshot and clears the
    /// selection if it pointed at the deleted item.
    pub async fn delete_by_id(&mut self, id: u64) -> Result<(), TransportError> {
        let request = self.client.build_delete_item(id);
        self.execute(request)
            .await
            .and_then(|response| self.client.parse_delete_item(response))
            .inspect_err(|e| error!(id, error = %e, "failed to delete item"))?;
        info!(id, "deleted item");

        let mut removed = false;
        if let Some(items) = self.cache.as_mut() {
            if let Some(index) = items.iter().position(|i| i.id == id) {
                items.remove(index);
                removed = true;
            }
        }
        let was_selected = self.selection.current().is_some_and(|s| s.id == id);
        if removed || was_selected {
            self.selection.set(None);
        }
        Ok(())
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selection.current()
    }

    /// Explicit selection request from a consumer.
    pub fn select(&mut self, item: Option<Item>) {
        self.selection.set(item);
    }

    pub fn subscribe(&mut self, observer: impl FnMut(Option<&Item>) + 'static) -> SubscriptionId {
        self.selection.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.selection.unsubscribe(id)
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    pub fn cached(&self) -> Option<&[Item]> {
        self.cache.as_deref()
    }

    /// Drops the snapshot; the next `list` goes to the endpoint.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            debug!("item cache invalidated");
        }
    }

    fn cached_item(&self, id: u64) -> Option<&Item> {
        self.cache.as_ref()?.iter().find(|i| i.id == id)
    }
}
