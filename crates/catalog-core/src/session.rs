//! # Filter Session
//!
//! Transient search/filter state for one browsing session.
//!
//! A `FilterSession` owns the current search term and [`FilterSpec`] and
//! re-derives the visible product set on demand. It never touches the
//! products themselves and none of its state is persisted - a new session
//! starts from the defaults.

use crate::filter::filter_products;
use crate::types::{FilterSpec, Product};

/// The current search term and filter criteria.
///
/// ## State Rules
/// - `set_search_term` / `set_filter` replace their state wholesale
/// - `clear` resets both to defaults (empty term, all-"All" spec)
/// - `visible` is deterministic and side-effect-free; calling it twice on
///   the same inputs yields the same list
#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    search_term: String,
    filter: FilterSpec,
}

impl FilterSession {
    /// Starts a session with an empty term and the default spec.
    pub fn new() -> Self {
        FilterSession::default()
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current filter spec.
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replaces the whole filter spec.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
    }

    /// Resets the term and spec to their defaults.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.filter = FilterSpec::default();
    }

    /// Derives the visible product set, preserving catalog order.
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, &self.search_term, &self.filter)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use crate::types::{Category, StockStatus};

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: "1".to_string(),
                name: "Widget".to_string(),
                price: Price::from_cents(999),
                category: Category::Electronics,
                stock_quantity: 0,
                description: None,
                image_url: None,
            },
            Product {
                id: "2".to_string(),
                name: "Novel".to_string(),
                price: Price::from_cents(1500),
                category: Category::Books,
                stock_quantity: 12,
                description: Some("A page-turner".to_string()),
                image_url: None,
            },
        ]
    }

    #[test]
    fn test_fresh_session_shows_everything() {
        let session = FilterSession::new();
        assert_eq!(session.visible(&catalog()).len(), 2);
    }

    #[test]
    fn test_set_search_term() {
        let mut session = FilterSession::new();
        session.set_search_term("page-TURNER");
        let catalog = catalog();
        let visible = session.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn test_set_filter_replaces_wholesale() {
        let mut session = FilterSession::new();
        session.set_filter(FilterSpec {
            category: Some(Category::Books),
            ..FilterSpec::default()
        });
        session.set_filter(FilterSpec {
            stock_status: Some(StockStatus::OutOfStock),
            ..FilterSpec::default()
        });

        // the category restriction is gone; only the stock clause remains
        let catalog = catalog();
        let visible = session.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let mut session = FilterSession::new();
        session.set_search_term("widget");
        session.set_filter(FilterSpec {
            min_price: Some(Price::from_cents(1)),
            ..FilterSpec::default()
        });

        session.clear();
        assert_eq!(session.search_term(), "");
        assert!(session.filter().is_default());
        assert_eq!(session.visible(&catalog()).len(), 2);
    }

    #[test]
    fn test_visible_is_repeatable() {
        let mut session = FilterSession::new();
        session.set_search_term("novel");
        let products = catalog();

        let first: Vec<String> = session.visible(&products).iter().map(|p| p.id.clone()).collect();
        let second: Vec<String> = session.visible(&products).iter().map(|p| p.id.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(products.len(), 2); // inputs untouched
    }
}
