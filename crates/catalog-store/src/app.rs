//! # Catalog App
//!
//! The seam between the display layer and the core: receives user intents,
//! dispatches them to the store and the filter session, and owns the
//! bulk-selection set.
//!
//! ## Intent Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Display Layer ──► CatalogApp                         │
//! │                                                                         │
//! │  type in search box ─────► set_search_term()   (debounced upstream)    │
//! │  change a filter ────────► set_filter()        (applied immediately)   │
//! │  "Clear Filters" ────────► clear_filters()                             │
//! │  submit form ────────────► submit(FormPayload) ──┬─► create (no id)    │
//! │                                                  └─► update (full)     │
//! │  confirm delete ─────────► delete(id)                                  │
//! │  tick a checkbox ────────► set_selected(id, bool)                      │
//! │  "Delete Selected" ──────► bulk_delete_selected()                      │
//! │                                                                         │
//! │  CatalogApp ──► Display Layer: visible_products() + selected()         │
//! │  The core never reads or writes presentation state.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use catalog_core::{FilterSession, FilterSpec, Product, ProductDraft};

use crate::error::StoreResult;
use crate::storage::DurableStore;
use crate::store::CatalogStore;

// =============================================================================
// Form Payload
// =============================================================================

/// What the product form submits: a full product (edit) or a product
/// without an id (add).
#[derive(Debug, Clone, PartialEq)]
pub enum FormPayload {
    /// Create a new product from the draft.
    Create(ProductDraft),
    /// Update the existing product with this id.
    Update(Product),
}

// =============================================================================
// Catalog App
// =============================================================================

/// Orchestrates one browsing session: the catalog store, the filter
/// session, and the bulk-selection set.
#[derive(Debug)]
pub struct CatalogApp<S> {
    store: CatalogStore<S>,
    session: FilterSession,
    selected: BTreeSet<String>,
}

impl<S: DurableStore> CatalogApp<S> {
    /// Builds the app and performs the initial load.
    ///
    /// A load failure is not fatal: the error is visible through
    /// [`error`](Self::error) and the session starts with an empty catalog.
    pub fn start(storage: S) -> Self {
        let mut store = CatalogStore::new(storage);
        // failure already recorded in state.error; the session still starts
        let _ = store.load();

        CatalogApp {
            store,
            session: FilterSession::new(),
            selected: BTreeSet::new(),
        }
    }

    // =========================================================================
    // What the Display Layer Reads
    // =========================================================================

    /// The products visible under the current search term and filters,
    /// in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.session.visible(self.store.products())
    }

    /// The full catalog, unfiltered.
    pub fn products(&self) -> &[Product] {
        self.store.products()
    }

    /// The bulk-selection set.
    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// True while the initial load is in progress.
    pub fn loading(&self) -> bool {
        self.store.loading()
    }

    /// The most recent load/persist failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.store.error()
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        self.session.search_term()
    }

    /// The current filter spec.
    pub fn filter(&self) -> &FilterSpec {
        self.session.filter()
    }

    // =========================================================================
    // Search & Filter Intents
    // =========================================================================

    /// Applies a settled search term (the debouncer sits upstream).
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.session.set_search_term(term);
    }

    /// Replaces the filter spec. Filter changes apply immediately, without
    /// any debounce.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.session.set_filter(filter);
    }

    /// Resets the search term and every filter to its default.
    pub fn clear_filters(&mut self) {
        self.session.clear();
    }

    // =========================================================================
    // Mutation Intents
    // =========================================================================

    /// Dispatches a form submission to create or update.
    ///
    /// Proceeds only if validation passes; otherwise the ErrorMap comes
    /// back inside [`StoreError::Validation`](crate::StoreError::Validation)
    /// and nothing was mutated. Returns the stored product.
    pub fn submit(&mut self, payload: FormPayload) -> StoreResult<Product> {
        match payload {
            FormPayload::Create(draft) => self.store.create(draft),
            FormPayload::Update(product) => {
                self.store.update(product.clone())?;
                Ok(product)
            }
        }
    }

    /// Deletes one product (no-op if absent) and drops it from the
    /// selection.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        self.store.delete(id)?;
        self.selected.remove(id);
        Ok(())
    }

    /// Adds or removes one product id from the bulk selection.
    pub fn set_selected(&mut self, id: &str, selected: bool) {
        if selected {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
    }

    /// Deletes every selected product in one atomic step (one persist),
    /// then clears the selection. Returns how many ids were submitted.
    pub fn bulk_delete_selected(&mut self) -> StoreResult<usize> {
        if self.selected.is_empty() {
            return Ok(0);
        }
        let ids = std::mem::take(&mut self.selected);
        let count = ids.len();
        self.store.bulk_delete(ids)?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
