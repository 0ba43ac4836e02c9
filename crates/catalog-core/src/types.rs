//! # Domain Types
//!
//! Core domain types used throughout the catalog manager.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │   FilterSpec    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  (no id yet)    │   │  category       │       │
//! │  │  name           │   │  price as text  │   │  min/max price  │       │
//! │  │  price (cents)  │   │  rest as below  │   │  stock status   │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  │  stock_quantity │                                                   │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐       │
//! │                        │    Category     │   │   StockStatus   │       │
//! │                        │  ─────────────  │   │  ─────────────  │       │
//! │                        │  Electronics    │   │  OutOfStock (0) │       │
//! │                        │  Clothing ...   │   │  LowStock (1-4) │       │
//! │                        └─────────────────┘   │  InStock  (≥5)  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `Product.id` is an opaque unique string assigned once at creation and
//! immutable thereafter. A [`ProductDraft`] is a product before it has an id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::price::Price;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Category
// =============================================================================

/// The fixed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Home,
        Category::Sports,
        Category::Other,
    ];

    /// The display name, which is also the serialized name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// Three-way classification of a stock quantity.
///
/// The thresholds are fixed: 0 is Out of Stock, 1 to 4 is Low Stock,
/// [`LOW_STOCK_THRESHOLD`] and above is In Stock. Filtering and display
/// badges both go through [`StockStatus::classify`], so they can never
/// disagree about what "Low Stock" means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classifies a stock quantity.
    ///
    /// Pure and total. Negative quantities never survive validation, but a
    /// total function costs nothing: anything at or below zero is Out of
    /// Stock.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::types::StockStatus;
    ///
    /// assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
    /// assert_eq!(StockStatus::classify(4), StockStatus::LowStock);
    /// assert_eq!(StockStatus::classify(5), StockStatus::InStock);
    /// ```
    pub const fn classify(quantity: i64) -> StockStatus {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// The display name, e.g. `"Out of Stock"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Out of Stock" => Ok(StockStatus::OutOfStock),
            "Low Stock" => Ok(StockStatus::LowStock),
            "In Stock" => Ok(StockStatus::InStock),
            other => Err(CoreError::UnknownStockStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item.
///
/// ## Invariants
/// - `id` is unique across the catalog and never changes
/// - every stored product passed validation at the moment it was created
///   or last updated (validation happens before mutation, not after)
///
/// ## Wire Shape
/// Serialized with camelCase field names (`stockQuantity`, `imageUrl`) -
/// the shape the durable snapshot uses. `price` serializes as integer cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned at creation time.
    pub id: String,

    /// Display name, 3-50 characters after trimming.
    pub name: String,

    /// Price in integer cents.
    pub price: Price,

    /// One of the fixed category set.
    pub category: Category,

    /// Non-negative stock level.
    pub stock_quantity: i64,

    /// Optional description, at most 200 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional image URL (http or https).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Classifies this product's stock level.
    #[inline]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock_quantity)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// A candidate product without an id - the product form's output.
///
/// `price` is the raw form text so the "at most 2 decimal places" rule can
/// be checked against exactly what was typed, not against a rounded float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: Category,
    pub stock_quantity: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

// =============================================================================
// Filter Spec
// =============================================================================

/// The non-text filter criteria applied to the catalog.
///
/// `None` in any field means "All" - that clause matches every product.
/// A FilterSpec is transient, session-scoped state; it is never persisted
/// and is replaced wholesale on every change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// Restrict to one category, or None for all.
    pub category: Option<Category>,

    /// Keep products priced at or above this, when set.
    pub min_price: Option<Price>,

    /// Keep products priced at or below this, when set.
    pub max_price: Option<Price>,

    /// Restrict to one stock classification, or None for all.
    pub stock_status: Option<StockStatus>,
}

impl FilterSpec {
    /// True when every field is at its "All" default.
    pub fn is_default(&self) -> bool {
        *self == FilterSpec::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
