//! Cached data-access core for a remote item catalog.
//!
//! # Overview
//! `CatalogService` lists, fetches, creates, updates and deletes items
//! against a JSON collection endpoint, keeping an in-memory snapshot of the
//! collection and the currently selected item.
//!
//! # Design
//! - `CatalogClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`.
//! - A `Transport` executes the round-trip in between. `ReqwestTransport` is
//!   the HTTP implementation; tests substitute scripted fakes.
//! - Every remote failure is a `TransportError` whose message tells a
//!   backend status apart from a local or network failure.
//! - Selection changes are published to registered observers in order.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod listing;
pub mod selection;
pub mod service;
pub mod transport;
pub mod types;

pub use client::CatalogClient;
pub use config::ServiceConfig;
pub use error::{ConfigError, TransportError};
pub use filter::filter_by_name;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use listing::{CatalogListing, ListParameters};
pub use selection::{SelectionState, SubscriptionId};
pub use service::CatalogService;
pub use transport::ReqwestTransport;
pub use types::{Item, NEW_ITEM_ID};
