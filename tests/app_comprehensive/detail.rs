//! Vendor detail page through the facade

use super::*;

#[tokio::test(start_paused = true)]
async fn test_detail_sections() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors/V2").await;

    let page = app.render();
    assert!(page.starts_with("Globex Industrial"));
    assert!(page.contains("Vendor Info"));
    assert!(page.contains("Parts (default vendor)"));
    assert!(page.contains("HS-AL-220 — Machined aluminium housing · $48.50 · stock 36"));
    assert!(page.contains("PO-2024-0098 — open · total $1914.00"));
    assert!(app.page_error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_detail_without_related_records() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors/V6").await;

    let page = app.render();
    assert!(page.contains("Parts (default vendor)\n  None"));
    assert!(page.contains("Orders\n  None"));
}

#[tokio::test(start_paused = true)]
async fn test_missing_vendor_shows_error_with_controls() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors/missing").await;

    assert_eq!(app.page_error().as_deref(), Some("Vendor not found: missing"));
    let page = app.render();
    assert!(page.contains("[Retry]"));
    assert!(page.contains("[Back]"));

    assert!(app.back());
    app.settle().await;
    assert!(app.page_error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_missing_fixture_dir_surfaces_fetch_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = Vendorbook::builder()
        .fixtures_dir(dir.path())
        .open()
        .unwrap();
    visit(&mut app, "/vendors/V1").await;

    let message = app.page_error().unwrap();
    assert!(message.starts_with("Failed to load mock-api-behavior.json"));
    assert!(!app.api().is_initialized());
}
