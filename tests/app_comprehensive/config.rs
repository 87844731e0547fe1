//! Configuration applied through the builder

use super::*;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_config_file_drives_builder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vendorbook.toml");
    std::fs::write(
        &path,
        format!(
            "fixtures_dir = {:?}\ndebounce_ms = 50\nseed = 1\n\n[behavior]\nfailure_rate = 0.0\nlatency_min_ms = 5\nlatency_max_ms = 5\n",
            fixtures_dir().display().to_string()
        ),
    )
    .unwrap();

    let config = AppConfig::load(&path).unwrap();
    let mut app = Vendorbook::builder().config(config).open().unwrap();

    let start = tokio::time::Instant::now();
    visit(&mut app, "/vendors").await;
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(5) && elapsed < Duration::from_millis(50));

    let behavior = app.api().behavior().unwrap();
    assert_eq!(behavior.failure_rate, 0.0);
    assert_eq!(behavior.latency_ms, LatencyRange::new(5, 5));
    // fields the overrides leave alone keep the fixture's value
    assert!(behavior.read_only);
    assert_eq!(behavior.pagination.page_size, 25);
}

#[tokio::test(start_paused = true)]
async fn test_in_memory_fixtures() {
    let fixtures = Fixtures {
        behavior: Behavior::instant(),
        vendors: vec![],
        parts: vec![],
        orders: vec![],
    };
    let mut app = Vendorbook::builder().fixtures(fixtures).open().unwrap();
    visit(&mut app, "/vendors").await;

    assert!(app.render().contains("0 vendor(s)"));
    assert!(app.render().contains("No results"));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "debounce_ms = \"soon\"").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert_eq!(err.error_code(), "Config");
}
