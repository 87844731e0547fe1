//! Routing and page lifecycle

use super::*;

#[tokio::test(start_paused = true)]
async fn test_root_redirects_to_list() {
    let mut app = reliable_app();
    let route = visit(&mut app, "/").await;

    assert_eq!(route, Route::VendorList);
    assert_eq!(app.current_route(), Some(&Route::VendorList));
    assert!(app.render().starts_with("Vendors"));
}

#[tokio::test(start_paused = true)]
async fn test_trailing_slash_is_ignored() {
    let mut app = reliable_app();
    assert_eq!(visit(&mut app, "/vendors/").await, Route::VendorList);
    assert_eq!(
        visit(&mut app, "/vendors/V2/").await,
        Route::VendorDetail {
            vendor_id: "V2".into()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_unknown_path_renders_not_found() {
    let mut app = reliable_app();
    let route = visit(&mut app, "/purchase-orders").await;

    assert!(matches!(route, Route::NotFound { .. }));
    assert!(app.render().starts_with("Not found"));
    assert!(app.page_error().is_none());
    // nothing to load on the placeholder
    assert!(!app.api().is_initialized());
    assert!(!app.retry());
    assert!(!app.refresh());
}

#[tokio::test(start_paused = true)]
async fn test_back_returns_to_list() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors/V1").await;

    assert!(app.back());
    assert_eq!(app.current_route(), Some(&Route::VendorList));
    app.settle().await;
    assert!(app.render().contains("6 vendor(s)"));

    // already on the list
    assert!(!app.back());
}

#[tokio::test(start_paused = true)]
async fn test_navigation_unmounts_previous_page() {
    let mut app = reliable_app();

    // leave the list while its first load is still in flight
    app.navigate("/vendors");
    app.navigate("/vendors/V3");
    app.settle().await;

    let page = app.render();
    assert!(page.contains("Initech Fasteners"));
    assert!(page.contains("Last order: —"));
}

#[tokio::test(start_paused = true)]
async fn test_fixtures_load_once_across_pages() {
    let mut app = reliable_app();
    visit(&mut app, "/vendors").await;
    assert!(app.api().is_initialized());

    let before = app.api().store().fixtures().unwrap() as *const _;
    visit(&mut app, "/vendors/V5").await;
    let after = app.api().store().fixtures().unwrap() as *const _;
    assert_eq!(before, after);
}
