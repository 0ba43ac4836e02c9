//! # Validation Module
//!
//! Product-form validation rules for the catalog manager.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Display layer                                                │
//! │  ├── Basic format hints (input types, max lengths)                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── All fields checked independently                                  │
//! │  ├── Every violation reported, not just the first                      │
//! │  └── Result returned as data (ErrorMap), never thrown                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store mutation - only runs when the ErrorMap is empty        │
//! │                                                                         │
//! │  Invariant: every stored product passed this module at the moment      │
//! │  of its creation or last update.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::types::{Category, ProductDraft};
//! use catalog_core::validation::validate;
//!
//! let draft = ProductDraft {
//!     name: "Widget".to_string(),
//!     price: "9.99".to_string(),
//!     category: Category::Electronics,
//!     stock_quantity: 3,
//!     description: None,
//!     image_url: None,
//! };
//!
//! assert!(validate(&draft).is_empty());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ValidationError, ValidationResult};
use crate::price::Price;
use crate::types::{Product, ProductDraft};
use crate::{DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS};

// =============================================================================
// Error Map
// =============================================================================

/// Field name → human-readable message. Empty means valid.
///
/// Backed by a BTreeMap so iteration order is deterministic - the same
/// candidate always yields the same map, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<&'static str, String>);

impl ErrorMap {
    /// An empty (valid) map.
    pub fn new() -> Self {
        ErrorMap::default()
    }

    /// True when no field failed validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn record(&mut self, result: ValidationResult<()>) {
        if let Err(err) = result {
            self.0.insert(err.field(), err.to_string());
        }
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - 3 to 50 characters after trimming
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    let chars = name.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(ValidationError::TooShort {
            field: "name",
            min: NAME_MIN_CHARS,
        });
    }
    if chars > NAME_MAX_CHARS {
        return Err(ValidationError::TooLong {
            field: "name",
            max: NAME_MAX_CHARS,
        });
    }

    Ok(())
}

/// Validates raw price text from the product form.
///
/// ## Rules
/// - Must parse as `digits[.digits]` with at most 2 fractional digits,
///   checked on the exact string (see [`Price::parse`])
/// - Must be strictly positive
pub fn validate_price_text(text: &str) -> ValidationResult<Price> {
    match Price::parse(text) {
        Ok(price) if price.is_positive() => Ok(price),
        // "0" and "0.00" parse fine but are not valid prices
        Ok(_) => Err(ValidationError::MustBePositive { field: "price" }),
        Err(_) if text.trim_start().starts_with('-') => {
            Err(ValidationError::MustBePositive { field: "price" })
        }
        Err(_) => Err(ValidationError::InvalidFormat {
            field: "price",
            reason: "must be a number with at most 2 decimal places",
        }),
    }
}

/// Validates a stock quantity.
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "stockQuantity",
        });
    }

    Ok(())
}

/// Validates an optional description.
pub fn validate_description(description: Option<&str>) -> ValidationResult<()> {
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: "description",
                max: DESCRIPTION_MAX_CHARS,
            });
        }
    }

    Ok(())
}

/// Validates an optional image URL.
///
/// ## Rules
/// - Absent or empty is fine (the field is optional)
/// - Otherwise must look like `http(s)://host.tld...`
pub fn validate_image_url(url: Option<&str>) -> ValidationResult<()> {
    match url {
        None => Ok(()),
        Some(url) if url.is_empty() => Ok(()),
        Some(url) if is_http_url(url) => Ok(()),
        Some(_) => Err(ValidationError::InvalidFormat {
            field: "imageUrl",
            reason: "must be a valid http(s) URL",
        }),
    }
}

/// Checks the `scheme://host.tld...` shape without pulling in a URL parser.
///
/// Accepts exactly what the product form accepts: an http or https scheme
/// followed by a host that contains an interior dot.
fn is_http_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    // at least one character on each side of a dot
    rest.char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < rest.len())
}

// =============================================================================
// Whole-Candidate Validation
// =============================================================================

/// Validates a candidate product against every business rule.
///
/// All applicable fields are checked and all violated ones reported - there
/// is no short-circuit across fields. Deterministic: the same draft always
/// yields the same ErrorMap.
pub fn validate(draft: &ProductDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    errors.record(validate_name(&draft.name));
    errors.record(validate_price_text(&draft.price).map(|_| ()));
    errors.record(validate_stock_quantity(draft.stock_quantity));
    errors.record(validate_description(draft.description.as_deref()));
    errors.record(validate_image_url(draft.image_url.as_deref()));

    errors
}

/// Validates a full product record (used on update, where the price is
/// already integer cents and the 2-decimal rule holds by construction).
pub fn validate_product(product: &Product) -> ErrorMap {
    let mut errors = ErrorMap::new();

    errors.record(validate_name(&product.name));
    if !product.price.is_positive() {
        errors.record(Err(ValidationError::MustBePositive { field: "price" }));
    }
    errors.record(validate_stock_quantity(product.stock_quantity));
    errors.record(validate_description(product.description.as_deref()));
    errors.record(validate_image_url(product.image_url.as_deref()));

    errors
}

/// Validates a draft and, if clean, builds the final [`Product`].
///
/// This is the only path from a draft to a product, so an invalid candidate
/// can never become catalog state.
pub fn build_product(draft: ProductDraft, id: String) -> Result<Product, ErrorMap> {
    let errors = validate(&draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    let price = match validate_price_text(&draft.price) {
        Ok(price) => price,
        Err(err) => {
            // unreachable after a clean validate(), but never panic over it
            let mut errors = ErrorMap::new();
            errors.record(Err(err));
            return Err(errors);
        }
    };

    // empty optional fields normalize to absent
    let description = draft.description.filter(|d| !d.is_empty());
    let image_url = draft.image_url.filter(|u| !u.is_empty());

    Ok(Product {
        id,
        name: draft.name,
        price,
        category: draft.category,
        stock_quantity: draft.stock_quantity,
        description,
        image_url,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
