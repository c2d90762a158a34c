// Tests for background scanning and result delivery

use super::make_folder;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use wallthemes::themes::ThemeScanner;

#[tokio::test]
async fn test_async_scan_matches_blocking_scan() {
    let dir = tempdir().unwrap();
    make_folder(dir.path(), "Nature", &["a.jpg"]);
    make_folder(dir.path(), "Seasons/Winter", &["c.jpg"]);
    make_folder(dir.path(), "Seasons/Summer", &["d.jpg"]);

    let scanner = ThemeScanner::new(dir.path());
    let expected = scanner.scan_blocking();
    let result = scanner.scan().await;

    assert_eq!(result, expected);
    assert_eq!(result.flat_themes.len(), 1);
    assert_eq!(result.grouped_themes.len(), 1);
}

#[tokio::test]
async fn test_async_scan_of_missing_root_is_empty() {
    let dir = tempdir().unwrap();
    let result = ThemeScanner::new(dir.path().join("missing")).scan().await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_spawn_scan_delivers_on_channel() {
    let dir = tempdir().unwrap();
    make_folder(dir.path(), "Parent/Child", &["1.png"]);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = ThemeScanner::new(dir.path())
        .with_flatten(true)
        .spawn_scan(tx);

    let result = rx.recv().await.unwrap();
    handle.await.unwrap();

    assert!(result.flat_theme("Parent").is_some());
    // Exactly one delivery per scan
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn test_spawn_scan_tolerates_dropped_receiver() {
    let dir = tempdir().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let handle = ThemeScanner::new(dir.path()).spawn_scan(tx);
    assert!(handle.await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_callback_runs_once_on_given_context() {
    let dir = tempdir().unwrap();
    make_folder(dir.path(), "Nature", &["a.jpg", "b.jpg"]);

    let calls = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = oneshot::channel();

    let counter = calls.clone();
    let handle = ThemeScanner::new(dir.path()).scan_with_callback(&Handle::current(), move |result| {
        counter.fetch_add(1, Ordering::SeqCst);
        let _ = tx.send(result);
    });

    let result = rx.await.unwrap();
    handle.await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.flat_theme("Nature").unwrap().image_count(), 2);
}

#[tokio::test]
async fn test_concurrent_scans_are_independent() {
    let dir = tempdir().unwrap();
    make_folder(dir.path(), "Parent/Child", &["1.png"]);

    let flat = ThemeScanner::new(dir.path()).with_flatten(true).scan();
    let grouped = ThemeScanner::new(dir.path()).with_flatten(false).scan();
    let (flat, grouped) = tokio::join!(flat, grouped);

    assert!(flat.flat_theme("Parent").is_some());
    assert!(grouped.group("Parent").is_some());
}
