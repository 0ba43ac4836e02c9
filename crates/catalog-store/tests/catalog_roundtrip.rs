//! End-to-end tests through the file-backed store: a catalog session's
//! mutations must survive a process restart byte-for-byte.

use std::sync::Once;

use catalog_core::{Category, FilterSpec, ProductDraft, StockStatus};
use catalog_store::{CatalogApp, CatalogStore, FormPayload, JsonFileStore, StoreError};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

fn draft(name: &str, price: &str, category: Category, stock: i64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: price.to_string(),
        category,
        stock_quantity: stock,
        description: None,
        image_url: None,
    }
}

#[test]
fn restart_reproduces_last_persisted_state() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let survivor = {
        let mut store = CatalogStore::new(JsonFileStore::open(dir.path()).unwrap());
        store.load().unwrap();

        let gadget = store
            .create(draft("Gadget", "19.99", Category::Home, 10))
            .unwrap();
        let widget = store
            .create(draft("Widget", "9.99", Category::Electronics, 0))
            .unwrap();

        let mut edited = gadget.clone();
        edited.name = "Gadget Pro".to_string();
        edited.stock_quantity = 3;
        store.update(edited).unwrap();
        store.delete(&widget.id).unwrap();

        store.products().to_vec()
    };

    // "restart": a fresh store over the same directory
    let mut store = CatalogStore::new(JsonFileStore::open(dir.path()).unwrap());
    store.load().unwrap();

    assert_eq!(store.products(), survivor.as_slice());
    assert_eq!(store.products().len(), 1);
    assert_eq!(store.products()[0].name, "Gadget Pro");
}

#[test]
fn full_session_create_filter_bulk_delete() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let mut app = CatalogApp::start(JsonFileStore::open(dir.path()).unwrap());
    assert!(app.error().is_none());

    let gadget = app
        .submit(FormPayload::Create(draft(
            "Gadget",
            "19.99",
            Category::Home,
            10,
        )))
        .unwrap();
    app.submit(FormPayload::Create(draft(
        "Widget",
        "9.99",
        Category::Electronics,
        0,
    )))
    .unwrap();

    // stock-status filtering goes through the shared classification
    app.set_filter(FilterSpec {
        stock_status: Some(StockStatus::OutOfStock),
        ..FilterSpec::default()
    });
    let visible = app.visible_products();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Widget");

    // create followed immediately by bulk delete of the created id
    app.clear_filters();
    app.set_selected(&gadget.id, true);
    assert_eq!(app.bulk_delete_selected().unwrap(), 1);
    assert_eq!(app.products().len(), 1);

    // the durable mirror reflects the bulk delete after restart
    let restarted = CatalogApp::start(JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(restarted.products().len(), 1);
    assert_eq!(restarted.products()[0].name, "Widget");
}

#[test]
fn update_of_unknown_id_changes_nothing_durable() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let mut store = CatalogStore::new(JsonFileStore::open(dir.path()).unwrap());
    store.load().unwrap();
    let created = store
        .create(draft("Gadget", "19.99", Category::Home, 10))
        .unwrap();

    let mut ghost = created.clone();
    ghost.id = "nonexistent".to_string();
    assert!(matches!(
        store.update(ghost),
        Err(StoreError::NotFound { .. })
    ));

    let mut reloaded = CatalogStore::new(JsonFileStore::open(dir.path()).unwrap());
    reloaded.load().unwrap();
    assert_eq!(reloaded.products(), std::slice::from_ref(&created));
}

#[test]
fn corrupt_snapshot_surfaces_as_load_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("products.json"), "{\"not\": \"a list\"").unwrap();

    let app = CatalogApp::start(JsonFileStore::open(dir.path()).unwrap());
    assert!(app.products().is_empty());
    assert!(app.error().unwrap().contains("corrupt snapshot"));
}
