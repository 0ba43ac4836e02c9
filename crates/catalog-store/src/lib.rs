//! # catalog-store: State Management & Durable Storage
//!
//! This crate owns the authoritative catalog state and keeps it synchronized
//! with a durable key-value store after every mutation.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         catalog-store                                   │
//! │                                                                         │
//! │  Display intents          CatalogApp              CatalogStore          │
//! │  ───────────────          ──────────              ────────────          │
//! │                                                                         │
//! │  submit form ────────────► validate ─────────────► create / update      │
//! │                                │                       │                │
//! │                           ErrorMap not empty?          ▼                │
//! │                           return as data          reduce(state, action) │
//! │                                                        │                │
//! │  delete / bulk delete ───► selection set ─────────►    ▼                │
//! │                                                   DurableStore.set()    │
//! │                                                        │                │
//! │  type in search box ─────► SearchDebouncer ──────► FilterSession        │
//! │                            (300ms quiescence)          │                │
//! │                                                        ▼                │
//! │  change filters ─────────► applied immediately ──► visible products     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - CatalogState + the pure action reducer
//! - [`store`] - CatalogStore: the imperative shell around the reducer
//! - [`storage`] - the DurableStore boundary and its implementations
//! - [`app`] - CatalogApp: intent dispatch, selection, form contract
//! - [`debounce`] - the search-input quiescence window
//! - [`error`] - StoreError / StorageError

pub mod app;
pub mod debounce;
pub mod error;
pub mod state;
pub mod storage;
pub mod store;

pub use app::{CatalogApp, FormPayload};
pub use debounce::{SearchDebouncer, DEFAULT_DEBOUNCE};
pub use error::{StorageError, StoreError, StoreResult};
pub use state::{reduce, CatalogAction, CatalogState};
pub use storage::{DurableStore, JsonFileStore, MemoryStore, PRODUCTS_KEY};
pub use store::CatalogStore;
