//! # Catalog State & Reducer
//!
//! The authoritative catalog state and the pure transition function over it.
//!
//! ## Reducer Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              reduce(state, action) -> new state                         │
//! │                                                                         │
//! │  LoadStarted            ──► loading = true, error = None               │
//! │  LoadSucceeded(list)    ──► loading = false, products = list           │
//! │  LoadFailed(msg)        ──► loading = false, error = Some(msg)         │
//! │  Added(product)         ──► products.push(product)                     │
//! │  Updated(product)       ──► replace entry with same id, in place       │
//! │  Deleted(id)            ──► drop entry with that id (if any)           │
//! │  BulkDeleted(ids)       ──► drop every entry whose id is in the set    │
//! │                                                                         │
//! │  Pure: no I/O, no clock, no randomness. The imperative shell           │
//! │  (CatalogStore) performs the durable-store side effect after a         │
//! │  successful transition.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use catalog_core::Product;

// =============================================================================
// Catalog State
// =============================================================================

/// The product list plus its loading/error status.
///
/// Owned exclusively by [`CatalogStore`](crate::store::CatalogStore);
/// everything else reads snapshots and never mutates it directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// The catalog, in insertion order.
    pub products: Vec<Product>,

    /// True while the initial load is in progress.
    pub loading: bool,

    /// The most recent load/persist failure, if any.
    pub error: Option<String>,
}

// =============================================================================
// Actions
// =============================================================================

/// A discrete state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    LoadStarted,
    LoadSucceeded(Vec<Product>),
    LoadFailed(String),
    Added(Product),
    Updated(Product),
    Deleted(String),
    BulkDeleted(BTreeSet<String>),
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies one action to the state, producing the next state.
pub fn reduce(mut state: CatalogState, action: CatalogAction) -> CatalogState {
    match action {
        CatalogAction::LoadStarted => {
            state.loading = true;
            state.error = None;
        }
        CatalogAction::LoadSucceeded(products) => {
            state.loading = false;
            state.products = products;
        }
        CatalogAction::LoadFailed(message) => {
            state.loading = false;
            state.error = Some(message);
        }
        CatalogAction::Added(product) => {
            state.products.push(product);
        }
        CatalogAction::Updated(product) => {
            if let Some(slot) = state.products.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
            }
        }
        CatalogAction::Deleted(id) => {
            state.products.retain(|p| p.id != id);
        }
        CatalogAction::BulkDeleted(ids) => {
            state.products.retain(|p| !ids.contains(&p.id));
        }
    }
    state
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Category, Price};

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price: Price::from_cents(100),
            category: Category::Other,
            stock_quantity: 1,
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn test_load_lifecycle() {
        let state = reduce(CatalogState::default(), CatalogAction::LoadStarted);
        assert!(state.loading);
        assert!(state.error.is_none());

        let state = reduce(state, CatalogAction::LoadSucceeded(vec![product("1")]));
        assert!(!state.loading);
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn test_load_failed_records_error() {
        let state = reduce(CatalogState::default(), CatalogAction::LoadStarted);
        let state = reduce(state, CatalogAction::LoadFailed("bad snapshot".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("bad snapshot"));
    }

    #[test]
    fn test_load_started_clears_stale_error() {
        let mut state = CatalogState::default();
        state.error = Some("old".to_string());
        let state = reduce(state, CatalogAction::LoadStarted);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_added_appends() {
        let state = reduce(CatalogState::default(), CatalogAction::Added(product("1")));
        let state = reduce(state, CatalogAction::Added(product("2")));
        let ids: Vec<&str> = state.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let state = reduce(CatalogState::default(), CatalogAction::Added(product("1")));
        let state = reduce(state, CatalogAction::Added(product("2")));

        let mut renamed = product("1");
        renamed.name = "Renamed".to_string();
        let state = reduce(state, CatalogAction::Updated(renamed));

        assert_eq!(state.products[0].name, "Renamed");
        assert_eq!(state.products[0].id, "1"); // position preserved
        assert_eq!(state.products.len(), 2);
    }

    #[test]
    fn test_updated_unknown_id_is_noop() {
        let state = reduce(CatalogState::default(), CatalogAction::Added(product("1")));
        let before = state.clone();
        let state = reduce(state, CatalogAction::Updated(product("ghost")));
        assert_eq!(state, before);
    }

    #[test]
    fn test_deleted_is_idempotent() {
        let state = reduce(CatalogState::default(), CatalogAction::Added(product("1")));
        let state = reduce(state, CatalogAction::Deleted("1".to_string()));
        let once = state.clone();
        let state = reduce(state, CatalogAction::Deleted("1".to_string()));
        assert_eq!(state, once);
        assert!(state.products.is_empty());
    }

    #[test]
    fn test_bulk_deleted_removes_every_listed_id() {
        let mut state = CatalogState::default();
        for id in ["1", "2", "3"] {
            state = reduce(state, CatalogAction::Added(product(id)));
        }

        let ids: BTreeSet<String> = ["1".to_string(), "3".to_string()].into();
        let state = reduce(state, CatalogAction::BulkDeleted(ids));

        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].id, "2");
    }
}
