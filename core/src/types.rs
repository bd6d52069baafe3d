//! Catalog item entity.
//!
//! # Design
//! `Item` is both the domain type and the wire type: the remote collection
//! speaks camelCase JSON, so the struct renames its fields on the way in and
//! out. The mock-server crate defines its own copy of the schema; the
//! integration tests catch drift between the two.
//!
//! An `id` of `0` marks an item that has never been persisted remotely.

use serde::{Deserialize, Serialize};

/// Identifier value reserved for items that have not been created remotely.
pub const NEW_ITEM_ID: u64 = 0;

/// A single catalog entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub category: String,
    pub tags: Vec<String>,
    pub release_date: String,
    pub price: f64,
    pub description: String,
    pub star_rating: f64,
    pub image_url: String,
}

impl Item {
    /// A blank item carrying the unsaved sentinel id and empty fields.
    pub fn new_unsaved() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id == NEW_ITEM_ID
    }
}
