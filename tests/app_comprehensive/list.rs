//! Vendor list page through the facade

use super::*;

#[tokio::test(start_paused = true)]
async fn test_list_shows_all_vendors() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors").await;

    let page = app.render();
    assert!(page.contains("6 vendor(s)"));
    for name in ["Acme Corp", "Globex Industrial", "Wayne Logistics"] {
        assert!(page.contains(name), "missing {}", name);
    }
    assert!(app.page_error().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_search_filters_rows() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors").await;

    assert!(app.search("acme"));
    app.settle().await;
    let page = app.render();
    assert!(page.contains("1 vendor(s)"));
    assert!(page.contains("Acme Corp"));
    assert!(!page.contains("Globex"));

    assert!(app.search("zzz"));
    app.settle().await;
    assert!(app.render().contains("No results"));
}

#[tokio::test(start_paused = true)]
async fn test_search_only_on_list_page() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors/V1").await;
    assert!(!app.search("acme"));
}

#[tokio::test(start_paused = true)]
async fn test_refresh_after_load() {
    let mut app = reliable_app();
    app.navigate("/vendors");
    assert!(!app.refresh());

    app.settle().await;
    assert!(app.refresh());
    assert!(app.render().contains("Loading vendors..."));
    app.settle().await;
    assert!(app.render().contains("6 vendor(s)"));
}

#[tokio::test(start_paused = true)]
async fn test_failure_offers_retry() {
    let mut app = failing_app();
    visit(&mut app, "/vendors").await;

    assert_eq!(
        app.page_error().as_deref(),
        Some("Mock API error. Please retry.")
    );
    assert!(app.render().contains("[Retry]"));

    assert!(app.retry());
    app.settle().await;
    assert!(app.page_error().is_some());
}
