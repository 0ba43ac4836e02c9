//! # Price Module
//!
//! Provides the `Price` type for handling product prices safely.
//!
//! ## Why Integer Prices?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The "max 2 decimal places" rule cannot be checked on a float:         │
//! │    10.99 may round-trip as 10.989999999999998                          │
//! │                                                                         │
//! │  OUR SOLUTION: Exact-string parsing into integer cents                 │
//! │    "10.99"  → 1099 cents  ✅                                            │
//! │    "10.999" → rejected, too many decimal digits                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::price::Price;
//!
//! // Parse from exact form text (preferred)
//! let price = Price::parse("10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! // Or create from cents directly
//! let price = Price::from_cents(1099);
//! assert_eq!(price.to_string(), "10.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Price Type
// =============================================================================

/// A product price in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 cents**: no floating point anywhere in the core
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **`#[serde(transparent)]`**: serializes as a bare integer in the
///   durable snapshot
/// - **Derived `Ord`**: price-range filtering is plain integer comparison
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

/// Why a price string failed to parse.
///
/// The variants deliberately mirror the form-validation messages: a price
/// that fails [`Price::parse`] is a validation failure, not a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceParseError {
    /// Empty input.
    Empty,
    /// Not a `digits[.digits]` decimal (stray signs, letters, extra dots).
    NotADecimal,
    /// More than two fractional digits.
    TooManyDecimals,
    /// Value does not fit in i64 cents.
    Overflow,
}

impl Price {
    /// Creates a Price from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Checks if the price is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parses exact decimal text into a Price.
    ///
    /// ## Accepted Shape
    /// `digits` or `digits.d` or `digits.dd` - the same exact-string rule the
    /// product form enforces. No sign, no exponent, no grouping separators.
    ///
    /// ## Why Exact-String?
    /// The "at most 2 fractional digits" rule is a property of what the user
    /// typed, not of a rounded float. Parsing the text directly makes the
    /// check lossless.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::price::Price;
    ///
    /// assert_eq!(Price::parse("10.99").unwrap().cents(), 1099);
    /// assert_eq!(Price::parse("10.5").unwrap().cents(), 1050);
    /// assert_eq!(Price::parse("10").unwrap().cents(), 1000);
    /// assert!(Price::parse("10.999").is_err());
    /// assert!(Price::parse("-1").is_err());
    /// assert!(Price::parse("1.2.3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PriceParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PriceParseError::Empty);
        }

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (text, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceParseError::NotADecimal);
        }

        let frac_cents = match frac {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(PriceParseError::NotADecimal);
                }
                if frac.len() > 2 {
                    return Err(PriceParseError::TooManyDecimals);
                }
                // "5" means 50 cents, "05" means 5 cents
                let digits: i64 = frac.parse().map_err(|_| PriceParseError::Overflow)?;
                if frac.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
        };

        let whole: i64 = whole.parse().map_err(|_| PriceParseError::Overflow)?;
        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Price)
            .ok_or(PriceParseError::Overflow)
    }
}

impl fmt::Display for Price {
    /// Formats as a plain decimal, e.g. `10.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
