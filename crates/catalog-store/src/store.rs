//! # Catalog Store
//!
//! The imperative shell around the pure reducer: validate, transition,
//! then mirror the new state into the durable store.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CatalogStore Mutation                                │
//! │                                                                         │
//! │  create(draft)                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate ──── ErrorMap not empty ──► Err(Validation) - state untouched │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  reduce(state, Added(product)) - in-memory transition                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storage.set("products", snapshot)                                     │
//! │       │                                                                 │
//! │       ├── Ok  ──► Ok(product) - memory and mirror consistent           │
//! │       │                                                                 │
//! │       └── Err ──► state.error = Some(msg), Err(Storage)                │
//! │                   the divergence is REPORTED, never hidden             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation takes `&mut self`, so a read-then-write sequence is one
//! logical transaction: two mutations can never interleave.

use std::collections::BTreeSet;
use std::mem;

use tracing::{debug, warn};
use uuid::Uuid;

use catalog_core::validation::{build_product, validate_product};
use catalog_core::{Product, ProductDraft};

use crate::error::{StorageError, StoreError, StoreResult};
use crate::state::{reduce, CatalogAction, CatalogState};
use crate::storage::{DurableStore, PRODUCTS_KEY};

/// Generates a new product id.
///
/// UUID v4: unique among concurrently created items within a session (and
/// across sessions) without any coordination, even for two creates within
/// the same millisecond.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

/// Owns [`CatalogState`] and keeps it mirrored in a [`DurableStore`].
///
/// ## Usage
/// ```rust
/// use catalog_store::{CatalogStore, MemoryStore};
///
/// let mut store = CatalogStore::new(MemoryStore::new());
/// store.load().unwrap();
/// assert!(store.products().is_empty());
/// ```
#[derive(Debug)]
pub struct CatalogStore<S> {
    state: CatalogState,
    storage: S,
}

impl<S: DurableStore> CatalogStore<S> {
    /// Creates a store over the given backend. Call [`load`](Self::load)
    /// before reading products.
    pub fn new(storage: S) -> Self {
        CatalogStore {
            state: CatalogState::default(),
            storage,
        }
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// The full state snapshot.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// The catalog, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    /// True while the initial load is in progress.
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    /// The most recent load/persist failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Populates the catalog from durable storage.
    ///
    /// The only source of truth for initial state - an absent key means an
    /// empty catalog, never fabricated sample data. Malformed content
    /// surfaces as a load error.
    pub fn load(&mut self) -> StoreResult<()> {
        self.apply(CatalogAction::LoadStarted);

        let raw = match self.storage.get(PRODUCTS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                self.apply(CatalogAction::LoadFailed(e.to_string()));
                return Err(e.into());
            }
        };

        let products: Vec<Product> = match raw.as_deref() {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(raw) {
                Ok(products) => products,
                Err(e) => {
                    let e = StorageError::corrupt(PRODUCTS_KEY, e.to_string());
                    warn!(error = %e, "Catalog load failed");
                    self.apply(CatalogAction::LoadFailed(e.to_string()));
                    return Err(e.into());
                }
            },
        };

        debug!(count = products.len(), "Catalog loaded");
        self.apply(CatalogAction::LoadSucceeded(products));
        Ok(())
    }

    /// Validates a candidate, assigns it a fresh unique id, appends it and
    /// persists the full list. Returns the created product.
    pub fn create(&mut self, draft: ProductDraft) -> StoreResult<Product> {
        let product =
            build_product(draft, generate_product_id()).map_err(StoreError::Validation)?;

        debug!(id = %product.id, name = %product.name, "Creating product");
        self.apply(CatalogAction::Added(product.clone()));
        self.persist()?;
        Ok(product)
    }

    /// Replaces the entry with the same id, in place, and persists.
    ///
    /// Fails with [`StoreError::NotFound`] if no product has that id; the
    /// state is left unchanged.
    pub fn update(&mut self, product: Product) -> StoreResult<()> {
        let errors = validate_product(&product);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        if !self.state.products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::product_not_found(product.id));
        }

        debug!(id = %product.id, "Updating product");
        self.apply(CatalogAction::Updated(product));
        self.persist()
    }

    /// Removes the product with that id if present and persists.
    ///
    /// Deleting an absent id is a no-op, not an error; calling this twice
    /// leaves the same end state as calling it once.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");
        self.apply(CatalogAction::Deleted(id.to_string()));
        self.persist()
    }

    /// Removes every product whose id is in the set, in one atomic step,
    /// and persists the full list exactly once.
    pub fn bulk_delete(&mut self, ids: BTreeSet<String>) -> StoreResult<()> {
        debug!(count = ids.len(), "Bulk-deleting products");
        self.apply(CatalogAction::BulkDeleted(ids));
        self.persist()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn apply(&mut self, action: CatalogAction) {
        self.state = reduce(mem::take(&mut self.state), action);
    }

    /// Mirrors the current product list into the durable store.
    ///
    /// On failure the in-memory state is NOT rolled back; the divergence is
    /// recorded in `state.error` and returned to the caller.
    fn persist(&mut self) -> StoreResult<()> {
        let snapshot = serde_json::to_string(&self.state.products)
            .map_err(|e| StorageError::corrupt(PRODUCTS_KEY, e.to_string()))?;

        if let Err(e) = self.storage.set(PRODUCTS_KEY, &snapshot) {
            warn!(error = %e, "Persist failed; memory and storage have diverged");
            self.state.error = Some(e.to_string());
            return Err(e.into());
        }

        self.state.error = None;
        Ok(())
    }
}

impl<S> CatalogStore<S> {
    /// Gives back the backend (mainly for tests that inspect it).
    pub fn into_storage(self) -> S {
        self.storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
