//! # catalog-core: Pure Business Logic for the Catalog Manager
//!
//! This crate is the **heart** of the catalog manager. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Display Layer                              │   │
//! │  │    Search box ──► Filter bar ──► Product grid ──► Form dialog  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ user intents                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    catalog-store                                │   │
//! │  │    CatalogStore, CatalogApp, DurableStore, SearchDebouncer     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │  filter   │  │ validation│  │   │
//! │  │   │  Product  │  │   Price   │  │  matches  │  │   rules   │  │   │
//! │  │   │ FilterSpec│  │  parsing  │  │  clauses  │  │  ErrorMap │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, StockStatus, FilterSpec)
//! - [`price`] - Price type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Product-form validation rules
//! - [`filter`] - The filtering predicate pipeline
//! - [`session`] - Transient search/filter session state
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Prices**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::price::Price;
//! use catalog_core::types::StockStatus;
//!
//! // Parse a price from exact form text (never from floats!)
//! let price = Price::parse("10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! // Classify a stock level
//! assert_eq!(StockStatus::classify(3), StockStatus::LowStock);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod price;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use catalog_core::Product` instead of
// `use catalog_core::types::Product`

pub use error::{CoreError, ValidationError};
pub use filter::{filter_products, matches};
pub use price::Price;
pub use session::FilterSession;
pub use types::*;
pub use validation::{validate, validate_product, ErrorMap};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum product name length (characters, after trimming).
pub const NAME_MIN_CHARS: usize = 3;

/// Maximum product name length (characters, after trimming).
pub const NAME_MAX_CHARS: usize = 50;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Stock quantities below this (and above zero) classify as Low Stock.
///
/// Quantities of zero classify as Out of Stock; everything at or above the
/// threshold is In Stock. Filtering and display badges share this constant
/// so the two can never disagree.
pub const LOW_STOCK_THRESHOLD: i64 = 5;
