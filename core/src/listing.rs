//! List-screen state: the loaded items, the filter text and the
//! show-image preference.
//!
//! `ListParameters` is kept separate from `CatalogListing` so a caller can
//! carry the user's filter and image choice across listing instances.

use crate::filter::filter_by_name;
use crate::http::Transport;
use crate::service::CatalogService;
use crate::types::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParameters {
    pub filter_by: String,
    pub show_image: bool,
}

impl ListParameters {
    pub fn toggle_image(&mut self) {
        self.show_image = !self.show_image;
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogListing {
    items: Vec<Item>,
    params: ListParameters,
    error_message: Option<String>,
}

impl CatalogListing {
    pub fn new(params: ListParameters) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Loads the collection through the service. On failure the previous
    /// items are kept and the error text is stored for display.
    pub async fn load<T: Transport>(&mut self, service: &mut CatalogService<T>) {
        match service.list().await {
            Ok(items) => {
                self.items = items;
                self.error_message = None;
            }
            Err(e) => self.error_message = Some(e.message()),
        }
    }

    /// Discards the service's snapshot and loads again from the endpoint.
    pub async fn refresh<T: Transport>(&mut self, service: &mut CatalogService<T>) {
        service.invalidate();
        self.load(service).await;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filtered(&self) -> Vec<&Item> {
        filter_by_name(&self.items, Some(&self.params.filter_by))
    }

    pub fn filter(&self) -> &str {
        &self.params.filter_by
    }

    pub fn set_filter(&mut self, filter_by: impl Into<String>) {
        self.params.filter_by = filter_by.into();
    }

    pub fn show_image(&self) -> bool {
        self.params.show_image
    }

    pub fn toggle_image(&mut self) {
        self.params.toggle_image();
    }

    pub fn into_params(self) -> ListParameters {
        self.params
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
