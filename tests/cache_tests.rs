mod common;
use chrono::{Duration, Utc};
use common::MockService;
use std::fs;
use tempfile::tempdir;
use tickory::core::cache::LocalCache;
use tickory::errors::AppError;
use tickory::models::catalog::Catalog;

#[test]
fn test_missing_cache_triggers_one_full_fetch_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tickory-tasks.json");
    let mock = MockService::with_catalog();
    let now = Utc::now();

    let mut cache = LocalCache::new(&path, 7);
    let catalog = cache.get_catalog_at(&mock, now).unwrap().clone();

    // 1 clients call + 2 project calls + 3 task calls
    assert_eq!(mock.remote_calls(), 6);
    assert_eq!(catalog.clients.len(), 2);
    assert_eq!(catalog.last_updated, now);
    assert!(path.exists());

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"lastUpdated\""));
    let on_disk: Catalog = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk, catalog);
}

#[test]
fn test_fresh_cache_is_served_without_remote_calls() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tickory-tasks.json");
    let mock = MockService::with_catalog();

    let first = LocalCache::new(&path, 7).get_catalog(&mock).unwrap().clone();
    let calls = mock.remote_calls();
    let bytes_before = fs::read(&path).unwrap();

    // new instance, same file
    let mut cache = LocalCache::new(&path, 7);
    let second = cache.get_catalog(&mock).unwrap().clone();
    let third = cache.get_catalog(&mock).unwrap().clone();

    assert_eq!(mock.remote_calls(), calls);
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(fs::read(&path).unwrap(), bytes_before);
}

#[test]
fn test_stale_cache_is_refetched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tickory-tasks.json");
    let mock = MockService::with_catalog();
    let now = Utc::now();

    let old = Catalog::new(now - Duration::days(10), vec![common::client(9, "Old")]);
    fs::write(&path, serde_json::to_string(&old).unwrap()).unwrap();

    let mut cache = LocalCache::new(&path, 7);
    let catalog = cache.get_catalog_at(&mock, now).unwrap();

    assert_eq!(catalog.last_updated, now);
    assert!(catalog.clients.iter().all(|c| c.name != "Old"));
    assert_eq!(mock.remote_calls(), 6);
}

#[test]
fn test_cache_exactly_at_expiry_is_still_fresh() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tickory-tasks.json");
    let mock = MockService::with_catalog();
    let now = Utc::now();

    let snapshot = Catalog::new(now - Duration::days(7), vec![common::client(9, "Kept")]);
    fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

    let mut cache = LocalCache::new(&path, 7);
    let catalog = cache.get_catalog_at(&mock, now).unwrap();

    assert_eq!(catalog.clients[0].name, "Kept");
    assert_eq!(mock.remote_calls(), 0);
}

#[test]
fn test_corrupt_cache_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tickory-tasks.json");
    fs::write(&path, "{ not json").unwrap();
    let mock = MockService::with_catalog();

    let mut cache = LocalCache::new(&path, 7);
    let err = cache.get_catalog(&mock).unwrap_err();

    assert!(matches!(err, AppError::InvalidCache { .. }));
    assert_eq!(mock.remote_calls(), 0);
}

#[test]
fn test_write_failure_still_returns_fetched_catalog() {
    let dir = tempdir().unwrap();
    // the cache "file" is a directory, so writing it fails
    let path = dir.path().join("blocked");
    fs::create_dir(&path).unwrap();
    let mock = MockService::with_catalog();

    let mut cache = LocalCache::new(&path, 7);
    let catalog = cache.get_catalog(&mock).unwrap();
    assert_eq!(catalog.clients.len(), 2);
}

#[test]
fn test_partial_refresh_is_rejected_and_not_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tickory-tasks.json");
    let mock = MockService::with_catalog();
    mock.state.borrow_mut().fail_tasks_for = Some(20);

    let mut cache = LocalCache::new(&path, 7);
    let err = cache.get_catalog(&mock).unwrap_err();

    assert!(matches!(err, AppError::Remote { status: 500, .. }));
    assert!(!path.exists());
}

#[test]
fn test_invalidate_is_idempotent_and_forces_refetch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tickory-tasks.json");
    let mock = MockService::with_catalog();

    let mut cache = LocalCache::new(&path, 7);
    cache.get_catalog(&mock).unwrap();
    assert_eq!(mock.remote_calls(), 6);

    cache.invalidate().unwrap();
    cache.invalidate().unwrap();
    assert!(!path.exists());

    cache.get_catalog(&mock).unwrap();
    assert_eq!(mock.remote_calls(), 12);
}

#[test]
fn test_catalog_task_index_resolves_names() {
    let dir = tempdir().unwrap();
    let mock = MockService::with_catalog();
    let mut cache = LocalCache::new(dir.path().join("c.json"), 7);

    let index = cache.get_catalog(&mock).unwrap().task_index();

    assert_eq!(index.len(), 4);
    let path = &index[&200];
    assert_eq!(path.client, "Beta");
    assert_eq!(path.project, "Backend");
    assert_eq!(path.task, "API");
}
