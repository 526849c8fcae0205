//! Adventure planner: name an adventure, pick when it happens, and list the
//! prep missions that have to happen first. The planner works out when to
//! start prepping by walking the mission durations back from the target time.
//!
//! This crate is the functional core only. Rendering, the time-picker
//! widget and persistence belong to whatever embeds it.
//!
//! # Quick Start
//!
//! ```no_run
//! use adventure::{AdventureEnvironment, AdventureStore};
//! use composable_rust_core::environment::SystemClock;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), adventure::AdventureError> {
//! let store = AdventureStore::new(AdventureEnvironment::new(Arc::new(SystemClock)));
//!
//! store.set_title("Beach day")?;
//! store.request_time_input()?;
//! store.confirm_target_time(18, 0)?;
//! store.add_mission("Shower", 15)?;
//! store.add_mission("Pack bag", 10)?;
//!
//! // 17:35 today
//! let start = store.start_time();
//! println!("{:?}", store.summary().start_line);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod reducer;
pub mod schedule;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use error::AdventureError;
pub use reducer::{AdventureEnvironment, AdventureReducer, parse_duration_minutes};
pub use schedule::{AdventureSummary, compute_start_time, format_clock_time, suggested_picker_time};
pub use store::AdventureStore;
pub use types::{AdventureAction, AdventureState, MissionId, PrepMission, TimeInput};
