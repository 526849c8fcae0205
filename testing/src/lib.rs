//! # Composable Rust Testing
//!
//! Testing utilities and helpers for the reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - The Given-When-Then [`ReducerTest`] harness
//! - Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use composable_rust_testing::test_clock;
//! use composable_rust_runtime::Store;
//!
//! #[test]
//! fn test_planning_flow() {
//!     let env = PlanEnvironment::new(Arc::new(test_clock()));
//!     let store = Store::new(PlanState::default(), PlanReducer, env);
//!
//!     store.send(PlanAction::SetTitle("Hike".into())).unwrap();
//!
//!     assert_eq!(store.state(|s| s.title.clone()), "Hike");
//! }
//! ```

use chrono::{DateTime, FixedOffset, Utc};
use composable_rust_core::environment::Clock;


pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, FixedOffset, Utc};
    use chrono::Offset;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible. The local
    /// offset defaults to UTC so that "today" does not depend on the host's
    /// time zone.
    ///
    /// # Example
    ///
    /// ```
    /// use composable_rust_testing::mocks::FixedClock;
    /// use composable_rust_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
        offset: FixedOffset,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub fn new(time: DateTime<Utc>) -> Self {
            Self {
                time,
                offset: Utc.fix(),
            }
        }

        /// Use `offset` as the local wall-clock offset
        #[must_use]
        pub const fn with_offset(mut self, offset: FixedOffset) -> Self {
            self.offset = offset;
            self
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }

        fn local_offset(&self) -> FixedOffset {
            self.offset
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 12:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T12:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Safe to call from every test; only the first call installs anything.
    /// Honours `RUST_LOG`, defaulting to `debug`.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use mocks::{FixedClock, test_clock};

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::{FixedOffset, Timelike};

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_fixed_clock_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();

        let clock = test_clock().with_offset(offset);

        assert_eq!(clock.local_now().hour(), 14);
        assert_eq!(clock.local_now(), clock.now());
    }
}
