//! Integration tests for `AdventureStore`
//!
//! These drive the store the way a presentation layer would and check the
//! published snapshots.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use adventure::{
    AdventureEnvironment, AdventureError, AdventureStore, PlannerConfig, TimeInput, compute_start_time,
};
use chrono::{DateTime, FixedOffset, Timelike};
use composable_rust_runtime::StoreConfig;
use composable_rust_testing::{FixedClock, init_test_tracing, test_clock};
use std::sync::Arc;
use tokio_test::{assert_pending, assert_ready_ok, task};

fn store() -> AdventureStore {
    init_test_tracing();
    AdventureStore::new(AdventureEnvironment::new(Arc::new(test_clock())))
}

fn at(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

fn names(store: &AdventureStore) -> Vec<String> {
    store
        .snapshot()
        .prep_missions
        .iter()
        .map(|m| m.name.clone())
        .collect()
}

#[test]
fn test_full_planning_session() {
    let store = store();

    store.set_title("Beach day").unwrap();
    assert!(store.snapshot().can_request_time());

    store.request_time_input().unwrap();
    assert!(store.snapshot().time_input_visible());

    store.confirm_target_time(18, 0).unwrap();
    store.add_mission("Shower", 15).unwrap();
    store.add_mission("Pack bag", 10).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.title, "Beach day");
    assert_eq!(snapshot.time_input, TimeInput::Hidden);
    assert_eq!(snapshot.target_time, Some(at("2025-01-01T18:00:00+00:00")));
    assert_eq!(store.start_time(), Some(at("2025-01-01T17:35:00+00:00")));

    let summary = store.summary();
    assert_eq!(summary.headline.as_deref(), Some("Adventure set for 06:00 PM"));
    assert_eq!(
        summary.start_line.as_deref(),
        Some("You should start prepping at: 05:35 PM")
    );
}

#[test]
fn test_no_missions_start_time_is_target() {
    let store = store();

    store.confirm_target_time(9, 0).unwrap();

    assert_eq!(store.start_time(), Some(at("2025-01-01T09:00:00+00:00")));
}

#[test]
fn test_start_time_absent_until_target_set() {
    let store = store();

    store.add_mission("Shower", 15).unwrap();
    assert_eq!(store.start_time(), None);
    assert_eq!(store.summary().start_line, None);

    store.confirm_target_time(7, 45).unwrap();
    assert_eq!(store.start_time().map(|t| (t.hour(), t.minute())), Some((7, 30)));
}

#[test]
fn test_empty_mission_name_is_rejected() {
    let store = store();
    store.add_mission("Shower", 15).unwrap();
    let before = store.snapshot();

    let result = store.add_mission("", 10);

    assert!(matches!(result, Err(AdventureError::InvalidMission(_))));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn test_mission_from_text_input() {
    let store = store();

    store.add_mission_from_input("Pack bag", " 10 ").unwrap();
    assert_eq!(store.snapshot().prep_missions[0].duration_minutes, 10);

    assert!(matches!(
        store.add_mission_from_input("Shower", "fifteen"),
        Err(AdventureError::InvalidMission(_))
    ));
    assert!(matches!(
        store.add_mission_from_input("Shower", "-15"),
        Err(AdventureError::InvalidMission(_))
    ));
    assert_eq!(store.snapshot().mission_count(), 1);
}

#[test]
fn test_reorder_moves_mission() {
    let store = store();
    for name in ["A", "B", "C"] {
        store.add_mission(name, 5).unwrap();
    }

    store.reorder_mission(0, 2).unwrap();

    assert_eq!(names(&store), vec!["B", "C", "A"]);
}

#[test]
fn test_reorder_out_of_range_is_rejected() {
    let store = store();
    store.add_mission("A", 5).unwrap();

    assert_eq!(
        store.reorder_mission(1, 0),
        Err(AdventureError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(names(&store), vec!["A"]);
}

#[test]
fn test_out_of_range_time_is_rejected() {
    let store = store();

    assert_eq!(
        store.confirm_target_time(25, 0),
        Err(AdventureError::InvalidTimeValue { hour: 25, minute: 0 })
    );
    assert!(store.snapshot().target_time.is_none());
}

#[test]
fn test_cancel_time_input() {
    let store = store();
    store.request_time_input().unwrap();

    store.cancel_time_input().unwrap();

    let snapshot = store.snapshot();
    assert!(!snapshot.time_input_visible());
    assert!(snapshot.target_time.is_none());
}

#[test]
fn test_duplicate_names_are_independent() {
    let store = store();
    let first = store.add_mission("Stretch", 5).unwrap();
    let second = store.add_mission("Stretch", 10).unwrap();
    store.add_mission("Run", 30).unwrap();

    store.reorder_mission(1, 2).unwrap();
    store.remove_mission(first).unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.prep_missions.len(), 2);
    assert_eq!(snapshot.prep_missions[0].name, "Run");
    assert_eq!(snapshot.prep_missions[1].id, second);
    assert_eq!(
        store.remove_mission(first),
        Err(AdventureError::UnknownMission(first))
    );
}

#[test]
fn test_roll_over_policy() {
    // 12:00 UTC, so 08:00 has passed
    let env = AdventureEnvironment::new(Arc::new(test_clock()))
        .with_config(PlannerConfig::default().with_roll_to_next_day_if_past(true));
    let store = AdventureStore::new(env);

    store.confirm_target_time(8, 0).unwrap();

    assert_eq!(store.snapshot().target_time, Some(at("2025-01-02T08:00:00+00:00")));
}

#[test]
fn test_suggested_picker_time_comes_from_clock() {
    let clock = FixedClock::new(at("2025-06-30T23:20:00+00:00").with_timezone(&chrono::Utc));
    let store = AdventureStore::new(AdventureEnvironment::new(Arc::new(clock)));

    assert_eq!(store.suggested_picker_time(), (0, 20));
}

#[test]
fn test_custom_store_name() {
    let store = AdventureStore::with_config(
        AdventureEnvironment::new(Arc::new(test_clock())),
        StoreConfig::new("weekend"),
    );

    store.set_title("Camping").unwrap();

    assert_eq!(store.snapshot().title, "Camping");
    assert!(format!("{store:?}").contains("weekend"));
}

#[test]
fn test_snapshot_serializes_for_presentation() {
    let store = store();
    store.set_title("Hike").unwrap();
    store.confirm_target_time(6, 30).unwrap();
    store.add_mission("Boots", 3).unwrap();

    let json = serde_json::to_value(&*store.snapshot()).unwrap();

    assert_eq!(json["title"], "Hike");
    assert_eq!(json["time_input"], "Hidden");
    assert_eq!(json["prep_missions"][0]["duration_minutes"], 3);
    assert!(json["target_time"].as_str().unwrap().starts_with("2025-01-01T06:30:00"));
}

#[test]
fn test_rejected_operations_do_not_notify() {
    let store = store();
    let mut rx = store.subscribe();

    {
        let mut changed = task::spawn(rx.changed());
        assert_pending!(changed.poll());

        store.add_mission("", 5).unwrap_err();
        store.reorder_mission(0, 1).unwrap_err();
        store.confirm_target_time(12, 60).unwrap_err();
        assert!(!changed.is_woken());
        assert_pending!(changed.poll());

        store.set_title("Picnic").unwrap();
        assert!(changed.is_woken());
        assert_ready_ok!(changed.poll());
    }

    assert_eq!(rx.borrow_and_update().title, "Picnic");
}

#[tokio::test]
async fn test_subscriber_sees_consistent_snapshots() {
    let store = store();
    let mut rx = store.subscribe();

    store.confirm_target_time(18, 0).unwrap();
    rx.changed().await.unwrap();
    let snapshot = rx.borrow_and_update().clone();
    assert!(snapshot.target_time.is_some());
    assert!(!snapshot.time_input_visible());

    store.add_mission("Shower", 15).unwrap();
    store.add_mission("Pack bag", 10).unwrap();
    rx.changed().await.unwrap();
    let latest = rx.borrow_and_update().clone();

    // Watch coalesces; the latest snapshot is complete
    assert_eq!(latest.mission_count(), 2);
    assert_eq!(compute_start_time(&latest), Some(at("2025-01-01T17:35:00+00:00")));
    // Earlier snapshots are untouched
    assert_eq!(snapshot.mission_count(), 0);
}

#[tokio::test]
async fn test_concurrent_writers_are_serialised() {
    let store = store();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.add_mission(format!("Mission {i}"), 1).unwrap() })
        })
        .collect();

    for handle in handles {
        if let Err(e) = handle.await {
            panic!("concurrent add task panicked: {e}");
        }
    }

    let snapshot = store.snapshot();
    assert_eq!(snapshot.mission_count(), 10);
    assert_eq!(snapshot.total_prep_minutes(), 10);
}
