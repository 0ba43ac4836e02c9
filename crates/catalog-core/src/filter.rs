//! # Filtering Predicate Pipeline
//!
//! The query side of the catalog: given a search term and a
//! [`FilterSpec`], decide which products are visible.
//!
//! ## Clause Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    matches(product, term, spec)                         │
//! │                                                                         │
//! │  search clause      empty term ──────────────► true                    │
//! │                     else substring of name OR description              │
//! │        AND                                                              │
//! │  category clause    spec.category None ──────► true                    │
//! │                     else exact equality                                 │
//! │        AND                                                              │
//! │  min-price clause   spec.min_price None ─────► true                    │
//! │                     else price ≥ min                                    │
//! │        AND                                                              │
//! │  max-price clause   spec.max_price None ─────► true                    │
//! │                     else price ≤ max                                    │
//! │        AND                                                              │
//! │  stock clause       spec.stock_status None ──► true                    │
//! │                     else classify(quantity) == requested               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine only filters. It never reorders: survivors keep their
//! original catalog order.

use crate::types::{FilterSpec, Product};

/// True when the product satisfies the search term and every filter clause.
///
/// The search is case-insensitive and matches a substring of the name or of
/// the description; a product without a description never matches on
/// description. Each clause independently short-circuits to true at its
/// "All"/empty default, so `matches(p, "", &FilterSpec::default())` is true
/// for every product.
pub fn matches(product: &Product, search_term: &str, spec: &FilterSpec) -> bool {
    matches_search(product, search_term)
        && spec.category.map_or(true, |c| product.category == c)
        && spec.min_price.map_or(true, |min| product.price >= min)
        && spec.max_price.map_or(true, |max| product.price <= max)
        && spec
            .stock_status
            .map_or(true, |status| product.stock_status() == status)
}

fn matches_search(product: &Product, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }

    let needle = search_term.to_lowercase();
    if product.name.to_lowercase().contains(&needle) {
        return true;
    }

    product
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&needle))
}

/// Filters a catalog slice, preserving insertion order.
///
/// Side-effect-free: safe to call repeatedly, never mutates its inputs.
pub fn filter_products<'a>(
    products: &'a [Product],
    search_term: &str,
    spec: &FilterSpec,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches(p, search_term, spec))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;
    use crate::types::{Category, StockStatus};

    fn product(id: &str, name: &str, cents: i64, category: Category, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Price::from_cents(cents),
            category,
            stock_quantity: stock,
            description: None,
            image_url: None,
        }
    }

    fn widget() -> Product {
        product("1", "Widget", 999, Category::Electronics, 0)
    }

    #[test]
    fn test_default_spec_matches_everything() {
        let spec = FilterSpec::default();
        for stock in [0, 3, 50] {
            let p = product("x", "Anything", 1, Category::Other, stock);
            assert!(matches(&p, "", &spec));
        }
    }

    #[test]
    fn test_empty_search_always_true() {
        assert!(matches(&widget(), "", &FilterSpec::default()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let spec = FilterSpec::default();
        assert!(matches(&widget(), "WID", &spec));
        assert!(matches(&widget(), "widget", &spec));
        assert!(!matches(&widget(), "gadget", &spec));
    }

    #[test]
    fn test_search_matches_description() {
        let mut p = widget();
        p.description = Some("A very useful gizmo".to_string());
        let spec = FilterSpec::default();

        assert!(matches(&p, "GIZMO", &spec));
        // absent description never matches
        assert!(!matches(&widget(), "gizmo", &spec));
    }

    #[test]
    fn test_category_clause() {
        let spec = FilterSpec {
            category: Some(Category::Electronics),
            ..FilterSpec::default()
        };
        assert!(matches(&widget(), "", &spec));

        let spec = FilterSpec {
            category: Some(Category::Books),
            ..FilterSpec::default()
        };
        assert!(!matches(&widget(), "", &spec));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let spec = FilterSpec {
            min_price: Some(Price::from_cents(999)),
            max_price: Some(Price::from_cents(999)),
            ..FilterSpec::default()
        };
        assert!(matches(&widget(), "", &spec));

        let spec = FilterSpec {
            min_price: Some(Price::from_cents(1000)),
            ..FilterSpec::default()
        };
        assert!(!matches(&widget(), "", &spec));

        let spec = FilterSpec {
            max_price: Some(Price::from_cents(998)),
            ..FilterSpec::default()
        };
        assert!(!matches(&widget(), "", &spec));
    }

    #[test]
    fn test_stock_status_clause_uses_classification() {
        // catalog = [Widget with zero stock]
        let catalog = vec![widget()];

        let out_of_stock = FilterSpec {
            stock_status: Some(StockStatus::OutOfStock),
            ..FilterSpec::default()
        };
        let visible = filter_products(&catalog, "", &out_of_stock);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");

        let in_stock = FilterSpec {
            stock_status: Some(StockStatus::InStock),
            ..FilterSpec::default()
        };
        assert!(filter_products(&catalog, "", &in_stock).is_empty());

        // a low-stock product is Low Stock, not In Stock
        let low = product("2", "Gadget", 100, Category::Home, 3);
        assert!(matches(
            &low,
            "",
            &FilterSpec {
                stock_status: Some(StockStatus::LowStock),
                ..FilterSpec::default()
            }
        ));
        assert!(!matches(&low, "", &in_stock));
    }

    #[test]
    fn test_clauses_are_and_combined() {
        let p = product("3", "Running Shoes", 5999, Category::Sports, 10);
        let spec = FilterSpec {
            category: Some(Category::Sports),
            min_price: Some(Price::from_cents(5000)),
            max_price: Some(Price::from_cents(6000)),
            stock_status: Some(StockStatus::InStock),
        };
        assert!(matches(&p, "shoes", &spec));
        // one failing clause fails the whole pipeline
        assert!(!matches(&p, "boots", &spec));
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = vec![
            product("a", "Alpha Widget", 100, Category::Other, 1),
            product("b", "Beta Gadget", 200, Category::Other, 1),
            product("c", "Gamma Widget", 300, Category::Other, 1),
        ];

        let visible = filter_products(&catalog, "widget", &FilterSpec::default());
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
