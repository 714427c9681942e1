//! Game-data API access.
//!
//! - [`endpoints`] - typed request builders
//! - [`client`] - [`Gw2ApiClient`] executing them over an [`HttpClient`](crate::traits::HttpClient)
//! - [`types`] - response payloads

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{Gw2ApiClient, SCHEMA_VERSION_HEADER};
pub use endpoints::{item_by_id, items_by_ids, skins_by_id, skins_by_ids, ApiRequest};
pub use types::{Item, Skin};
