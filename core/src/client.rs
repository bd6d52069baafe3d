//! Stateless HTTP request builder and response parser for the item collection.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. Each remote operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Caching and selection live one layer up in
//! `CatalogService`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Item;

const COLLECTION: &str = "items";

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{COLLECTION}", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{COLLECTION}/{id}", self.base_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_item(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The body carries `"id": null` so the endpoint assigns identity.
    pub fn build_create_item(&self, item: &Item) -> Result<HttpRequest, TransportError> {
        let mut value = serde_json::to_value(item)
            .map_err(|e| TransportError::client(format!("failed to serialize item: {e}")))?;
        value["id"] = Value::Null;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(value.to_string()),
        })
    }

    pub fn build_update_item(&self, item: &Item) -> Result<HttpRequest, TransportError> {
        let body = serde_json::to_string(item)
            .map_err(|e| TransportError::client(format!("failed to serialize item: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(item.id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_item(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, TransportError> {
        decode(response)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, TransportError> {
        decode(response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, TransportError> {
        decode(response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, TransportError> {
        decode(response)
    }

    /// The acknowledgement body, if any, is ignored.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }
}

/// Map non-2xx status codes to `TransportError::Backend`.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    Err(TransportError::backend(response.status, response.body.clone()))
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, TransportError> {
    check_status(&response)?;
    serde_json::from_str(&response.body)
        .map_err(|e| TransportError::client(format!("failed to decode response body: {e}")))
}
