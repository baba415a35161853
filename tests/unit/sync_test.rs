//! Tests for server sync and the periodic poller
//!
//! Poller tests run on a paused tokio clock: time only moves when every
//! task is idle, so intervals elapse instantly and deterministically.

use std::sync::Arc;
use std::time::Duration;

use quotebook::adapters::MemoryKeyValueStore;
use quotebook::sync::{MIN_INTERVAL, SharedBook, SyncTask, push_quote, share, sync_once};
use quotebook::{CategoryMatching, QuoteBook};
use tokio::time::Instant;

use crate::common::fixtures::{STAY_HUNGRY, quote};
use crate::common::mocks::MockRemote;

fn seeded_book() -> SharedBook {
    let mut book = QuoteBook::open(
        Box::new(MemoryKeyValueStore::new()),
        Box::new(MemoryKeyValueStore::new()),
        CategoryMatching::Exact,
    )
    .unwrap();
    book.seed(false).unwrap();
    share(book)
}

fn len(book: &SharedBook) -> usize {
    book.lock().unwrap().quotes().len()
}

// =============================================================================
// ONE-SHOT SYNC
// =============================================================================

#[tokio::test]
async fn test_sync_once_skips_known_text() {
    let book = seeded_book();
    let remote = MockRemote::returning(vec![quote(STAY_HUNGRY, "Server"), quote("New One", "Server")]);

    let report = sync_once(&book, &remote).await.unwrap();

    assert_eq!(report.fetched, 2);
    assert_eq!(report.added, 1);
    assert_eq!(len(&book), 5);
    assert!(book.lock().unwrap().quotes().contains_text("New One"));
}

#[tokio::test]
async fn test_sync_once_twice_adds_once() {
    let book = seeded_book();
    let remote = MockRemote::returning(vec![quote("New One", "Server")]);

    let first = sync_once(&book, &remote).await.unwrap();
    let second = sync_once(&book, &remote).await.unwrap();

    assert_eq!(first.added + second.added, 1);
    assert_eq!(len(&book), 5);
}

#[tokio::test]
async fn test_sync_once_failure_leaves_book() {
    let book = seeded_book();
    let remote = MockRemote::failing();

    assert!(sync_once(&book, &remote).await.is_err());
    assert_eq!(len(&book), 4);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_syncs_append_once() {
    // Both fetches are in flight at the same time and both see "Late" as
    // new; the merge under the lock lets only one of them append it.
    let book = seeded_book();
    let remote = MockRemote::returning(vec![quote("Late", "Server")]).with_delay(Duration::from_secs(5));

    let (a, b) = tokio::join!(sync_once(&book, &remote), sync_once(&book, &remote));

    assert_eq!(remote.fetches(), 2);
    assert_eq!(a.unwrap().added + b.unwrap().added, 1);
    assert_eq!(len(&book), 5);
}

// =============================================================================
// PUSH
// =============================================================================

#[tokio::test]
async fn test_push_success() {
    let remote = MockRemote::returning(Vec::new());
    let created = quote("Shared", "Mine");

    assert!(push_quote(&remote, &created).await);
    assert_eq!(remote.pushed(), vec![created]);
}

#[tokio::test]
async fn test_push_failure_keeps_local_quote() {
    let book = seeded_book();
    let created = book.lock().unwrap().add("Local only", "Mine").unwrap();

    let remote = MockRemote::failing();
    assert!(!push_quote(&remote, &created).await);
    assert!(book.lock().unwrap().quotes().contains_text("Local only"));
}

// =============================================================================
// POLLER
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_poller_ticks_immediately_then_every_interval() {
    let book = seeded_book();
    let remote = Arc::new(MockRemote::fresh_each_call());
    let start = Instant::now();

    let mut task = SyncTask::spawn(book.clone(), remote.clone(), Duration::from_secs(30));

    let first = task.next_report().await.unwrap();
    assert_eq!(first.added, 1);
    assert!(start.elapsed() < Duration::from_secs(30));

    let second = task.next_report().await.unwrap();
    assert_eq!(second.added, 1);
    assert!(start.elapsed() >= Duration::from_secs(30));

    task.stop().await;
    assert_eq!(len(&book), 4 + remote.fetches());
}

#[tokio::test(start_paused = true)]
async fn test_poller_zero_interval_is_raised_to_minimum() {
    let book = seeded_book();
    let remote = Arc::new(MockRemote::fresh_each_call());

    let mut task = SyncTask::spawn(book.clone(), remote.clone(), Duration::ZERO);
    assert_eq!(task.next_report().await.unwrap().added, 1);

    tokio::time::sleep(MIN_INTERVAL * 2 + MIN_INTERVAL / 2).await;
    assert!(!task.is_cancelled());
    task.stop().await;
    assert_eq!(remote.fetches(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_poller_stops_deterministically() {
    let book = seeded_book();
    let remote = Arc::new(MockRemote::fresh_each_call());

    let mut task = SyncTask::spawn(book.clone(), remote.clone(), Duration::from_secs(30));
    task.next_report().await.unwrap();
    task.stop().await;

    let fetched = remote.fetches();
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(remote.fetches(), fetched);
}

#[tokio::test(start_paused = true)]
async fn test_poller_swallows_fetch_errors() {
    let book = seeded_book();
    let remote = Arc::new(MockRemote::failing());

    let task = SyncTask::spawn(book.clone(), remote.clone(), Duration::from_secs(30));
    tokio::time::sleep(Duration::from_secs(95)).await;

    assert!(remote.fetches() >= 3);
    assert!(!task.is_cancelled());
    task.stop().await;
    assert_eq!(len(&book), 4);
}

#[tokio::test(start_paused = true)]
async fn test_poller_stop_abandons_in_flight_poll() {
    let book = seeded_book();
    let remote = Arc::new(
        MockRemote::returning(vec![quote("Slow", "Server")]).with_delay(Duration::from_secs(60)),
    );

    let task = SyncTask::spawn(book.clone(), remote.clone(), Duration::from_secs(300));
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(remote.fetches(), 1);

    task.stop().await;
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(len(&book), 4);
}

#[tokio::test(start_paused = true)]
async fn test_poller_overlapping_ticks_never_duplicate() {
    // Fetches take longer than the interval, so polls overlap
    let book = seeded_book();
    let remote = Arc::new(
        MockRemote::returning(vec![quote("Overlap", "Server")]).with_delay(Duration::from_secs(45)),
    );

    let mut task = SyncTask::spawn(book.clone(), remote.clone(), Duration::from_secs(10));
    let report = task.next_report().await.unwrap();
    assert_eq!(report.added, 1);

    tokio::time::sleep(Duration::from_secs(120)).await;
    task.stop().await;

    assert!(remote.fetches() > 2);
    assert_eq!(len(&book), 5);
}
