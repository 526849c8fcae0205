//! Command-line walkthrough of one planning session.
//!
//! Plays the part of the presentation layer: it sends the operations a user
//! would trigger and prints what a screen would show.

use adventure::{AdventureEnvironment, AdventureStore, PlannerConfig};
use composable_rust_core::environment::SystemClock;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adventure=debug,composable_rust_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Adventure Planner ===\n");

    let roll = std::env::args().any(|arg| arg == "--roll-over");
    let env = AdventureEnvironment::new(Arc::new(SystemClock))
        .with_config(PlannerConfig::default().with_roll_to_next_day_if_past(roll));
    let store = AdventureStore::new(env);

    // Observer standing in for the screen
    let mut rx = store.subscribe();
    let observer = tokio::spawn(async move {
        let mut updates = 0_usize;
        while rx.changed().await.is_ok() {
            updates += 1;
            let snapshot = rx.borrow_and_update().clone();
            tracing::info!(
                title = %snapshot.title,
                missions = snapshot.mission_count(),
                time_input = snapshot.time_input_visible(),
                "Snapshot changed"
            );
        }
        updates
    });

    store.set_title("Beach day")?;
    println!("Adventure: {}", store.snapshot().title);

    let (hour, minute) = store.suggested_picker_time();
    println!("Picker opens at {hour:02}:{minute:02}");
    store.request_time_input()?;
    store.confirm_target_time(18, 0)?;

    store.add_mission("Shower", 15)?;
    store.add_mission_from_input("Pack bag", "10")?;
    store.add_mission("Make sandwiches", 20)?;

    if let Err(error) = store.add_mission_from_input("Find towel", "a while") {
        println!("Rejected: {error}");
    }

    // Sandwiches first
    store.reorder_mission(2, 0)?;

    let summary = store.summary();
    for line in summary.headline.iter().chain(summary.start_line.iter()) {
        println!("{line}");
    }
    println!("\nPrep Missions:");
    for label in &summary.mission_labels {
        println!("  • {label}");
    }

    drop(store);
    let updates = observer.await?;
    println!("\nObserver woke {updates} time(s)");

    println!("\n=== Demo Complete ===");
    Ok(())
}
