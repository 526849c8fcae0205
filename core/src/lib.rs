//! # Composable Rust Core
//!
//! Core traits and types for the adventure planner's reducer architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, an owned and cloneable snapshot
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → Result<(), Error>`
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - All-or-nothing transitions (a rejected action leaves state untouched)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use composable_rust_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct PlanState {
//!     title: String,
//! }
//!
//! enum PlanAction {
//!     SetTitle(String),
//! }
//!
//! impl Reducer for PlanReducer {
//!     type State = PlanState;
//!     type Action = PlanAction;
//!     type Environment = PlanEnvironment;
//!     type Error = PlanError;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut PlanState,
//!         action: PlanAction,
//!         env: &PlanEnvironment,
//!     ) -> Result<(), PlanError> {
//!         match action {
//!             PlanAction::SetTitle(title) => state.title = title,
//!         }
//!         Ok(())
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, FixedOffset, Local, Utc};
pub use serde::{Deserialize, Serialize};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Result`.
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Why an action was rejected
    ///
    /// # Contract
    ///
    /// A reducer that returns `Err` must not have modified `state`. The
    /// runtime additionally reduces into a private copy and discards it on
    /// error, so a violation is never observable, but reducers are expected
    /// to validate first and mutate second.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for MissionReducer {
    ///     type State = MissionState;
    ///     type Action = MissionAction;
    ///     type Environment = MissionEnvironment;
    ///     type Error = MissionError;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut MissionState,
    ///         action: MissionAction,
    ///         env: &MissionEnvironment,
    ///     ) -> Result<(), MissionError> {
    ///         match action {
    ///             MissionAction::Add { name } if name.is_empty() => {
    ///                 Err(MissionError::EmptyName)
    ///             }
    ///             MissionAction::Add { name } => {
    ///                 state.names.push(name);
    ///                 Ok(())
    ///             }
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The rejection type returned for invalid actions
        type Error;

        /// Reduce an action into state changes
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is invalid for the current
        /// state. The state must be left as it was.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<(), Self::Error>;
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - uses system clock
    /// let clock = SystemClock;
    /// let today = clock.local_now().date_naive();
    ///
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;

        /// Offset of the local wall clock at [`Clock::now`]
        ///
        /// Defaults to the host's local time zone.
        fn local_offset(&self) -> FixedOffset {
            Local.offset_from_utc_datetime(&self.now().naive_utc()).fix()
        }

        /// Current time on the local wall clock
        fn local_now(&self) -> DateTime<FixedOffset> {
            self.now().with_timezone(&self.local_offset())
        }
    }

    /// Production clock backed by the operating system
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
