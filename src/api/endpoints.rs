//! Typed request builders.
//!
//! An [`ApiRequest`] carries the endpoint path, its query parameters and the
//! type the response body decodes into. Execution lives in
//! [`Gw2ApiClient`](super::Gw2ApiClient).

use std::fmt;
use std::marker::PhantomData;

use super::types::{Item, Skin};

/// A GET request against the game-data API that yields `T`.
pub struct ApiRequest<T> {
    path: String,
    query: Vec<(String, String)>,
    marker: PhantomData<fn() -> T>,
}

impl<T> ApiRequest<T> {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            marker: PhantomData,
        }
    }

    fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Endpoint path, starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

impl<T> Clone for ApiRequest<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            query: self.query.clone(),
            marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for ApiRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("path", &self.path)
            .field("query", &self.query)
            .finish()
    }
}

fn join_ids(ids: &[u32]) -> String {
    let mut seen = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// `/v2/items?ids=..`. Duplicate IDs are dropped, first occurrence wins.
pub fn items_by_ids(ids: &[u32]) -> ApiRequest<Vec<Item>> {
    ApiRequest::new("/v2/items").with_query("ids", join_ids(ids))
}

/// `/v2/items/{id}`.
pub fn item_by_id(id: u32) -> ApiRequest<Item> {
    ApiRequest::new(format!("/v2/items/{}", id))
}

/// `/v2/skins/{id}`.
pub fn skins_by_id(id: u32) -> ApiRequest<Skin> {
    ApiRequest::new(format!("/v2/skins/{}", id))
}

/// `/v2/skins?ids=..`. Duplicate IDs are dropped, first occurrence wins.
pub fn skins_by_ids(ids: &[u32]) -> ApiRequest<Vec<Skin>> {
    ApiRequest::new("/v2/skins").with_query("ids", join_ids(ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_by_ids_dedups_in_order() {
        let request = items_by_ids(&[30684, 24554, 30684, 24615, 24554]);
        assert_eq!(request.path(), "/v2/items");
        assert_eq!(
            request.query(),
            &[("ids".to_string(), "30684,24554,24615".to_string())]
        );
    }

    #[test]
    fn test_single_entity_paths() {
        assert_eq!(item_by_id(46762).path(), "/v2/items/46762");
        assert_eq!(skins_by_id(4678).path(), "/v2/skins/4678");
        assert!(skins_by_id(4678).query().is_empty());
    }

    #[test]
    fn test_skins_by_ids() {
        let request = skins_by_ids(&[1, 2, 1]);
        assert_eq!(request.path(), "/v2/skins");
        assert_eq!(request.query()[0].1, "1,2");
    }
}
