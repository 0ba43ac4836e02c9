//! # Store Error Types
//!
//! Error types for catalog mutations and durable storage.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Validation(ErrorMap)  - recoverable; carried as data, caller          │
//! │                          re-prompts the form                            │
//! │  NotFound              - recoverable; update targeted a missing id,    │
//! │                          state unchanged                                │
//! │  Storage(StorageError) - surfaced in CatalogState.error AND returned;  │
//! │                          in-memory and durable state may diverge and   │
//! │                          that divergence is reported, never hidden     │
//! │                                                                         │
//! │  Delete of an absent id is a no-op, not an error.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use catalog_core::ErrorMap;

// =============================================================================
// Storage Error
// =============================================================================

/// Durable-store read/write failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored content exists but is not a valid product snapshot.
    #[error("corrupt snapshot under key '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

impl StorageError {
    /// Creates an Io error for a given key.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StorageError::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a Corrupt error for a given key.
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::Corrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Catalog mutation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate failed validation; the map carries every violated
    /// field. Returned as data - the mutation never ran.
    #[error("validation failed: {0}")]
    Validation(ErrorMap),

    /// Update targeted an id that is not in the catalog.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The durable mirror could not be updated.
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Creates a NotFound error for a product id.
    pub fn product_not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: "Product",
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::product_not_found("abc");
        assert_eq!(err.to_string(), "Product not found: abc");
    }

    #[test]
    fn test_storage_error_messages() {
        let err = StorageError::corrupt("products", "expected a JSON array");
        assert_eq!(
            err.to_string(),
            "corrupt snapshot under key 'products': expected a JSON array"
        );
    }

    #[test]
    fn test_storage_error_wraps_into_store_error() {
        let err: StoreError = StorageError::corrupt("products", "truncated").into();
        assert!(matches!(err, StoreError::Storage(_)));
    }
}
