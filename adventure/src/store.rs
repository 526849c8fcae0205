//! Typed operations over the runtime [`Store`].
//!
//! [`AdventureStore`] is what a presentation layer holds: it reads the
//! current snapshot, subscribes to changes and calls one method per user
//! intent. Each method dispatches a single [`AdventureAction`].

use crate::error::AdventureError;
use crate::reducer::{AdventureEnvironment, AdventureReducer, parse_duration_minutes};
use crate::schedule::{AdventureSummary, compute_start_time, suggested_picker_time};
use crate::types::{AdventureAction, AdventureState, MissionId};
use chrono::{DateTime, FixedOffset};
use composable_rust_runtime::{Store, StoreConfig, StoreError};
use std::sync::Arc;
use tokio::sync::watch;

type Inner = Store<AdventureState, AdventureAction, AdventureEnvironment, AdventureReducer>;

/// Owns one adventure-planning session
///
/// Cheap to clone; clones share the session.
#[derive(Clone, Debug)]
pub struct AdventureStore {
    store: Inner,
}

impl AdventureStore {
    /// Starts a session with all-default state
    #[must_use]
    pub fn new(environment: AdventureEnvironment) -> Self {
        Self::with_config(environment, StoreConfig::new("adventure"))
    }

    /// Starts a session with a custom store configuration
    #[must_use]
    pub fn with_config(environment: AdventureEnvironment, config: StoreConfig) -> Self {
        Self {
            store: Store::with_config(AdventureState::new(), AdventureReducer::new(), environment, config),
        }
    }

    fn dispatch(&self, action: AdventureAction) -> Result<(), AdventureError> {
        self.store
            .send(action)
            .map(|_| ())
            .map_err(StoreError::into_rejection)
    }

    /// Replaces the adventure title
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps every operation uniform.
    pub fn set_title(&self, title: impl Into<String>) -> Result<(), AdventureError> {
        self.dispatch(AdventureAction::SetTitle { title: title.into() })
    }

    /// Shows or hides the time selection UI
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` keeps every operation uniform.
    pub fn set_time_input_visible(&self, visible: bool) -> Result<(), AdventureError> {
        self.dispatch(AdventureAction::SetTimeInputVisible { visible })
    }

    /// The user asked to pick a time
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn request_time_input(&self) -> Result<(), AdventureError> {
        self.set_time_input_visible(true)
    }

    /// The time picker was dismissed without a selection
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn cancel_time_input(&self) -> Result<(), AdventureError> {
        self.set_time_input_visible(false)
    }

    /// Sets the target time to today at `hour:minute` and closes the time input
    ///
    /// # Errors
    ///
    /// Returns [`AdventureError::InvalidTimeValue`] for an hour above 23 or a
    /// minute above 59.
    pub fn confirm_target_time(&self, hour: u32, minute: u32) -> Result<(), AdventureError> {
        self.dispatch(AdventureAction::ConfirmTargetTime { hour, minute })
    }

    /// Appends a prep mission and returns its id
    ///
    /// # Errors
    ///
    /// Returns [`AdventureError::InvalidMission`] for an empty name or a
    /// negative duration.
    pub fn add_mission(
        &self,
        name: impl Into<String>,
        duration_minutes: i64,
    ) -> Result<MissionId, AdventureError> {
        let id = MissionId::new();
        self.dispatch(AdventureAction::AddMission {
            id,
            name: name.into(),
            duration_minutes,
        })?;
        Ok(id)
    }

    /// Appends a prep mission whose duration comes straight from a text field
    ///
    /// # Errors
    ///
    /// Returns [`AdventureError::InvalidMission`] if the duration is not a
    /// whole number, or for the same reasons as [`Self::add_mission`].
    pub fn add_mission_from_input(
        &self,
        name: impl Into<String>,
        duration_text: &str,
    ) -> Result<MissionId, AdventureError> {
        let duration_minutes = parse_duration_minutes(duration_text)?;
        self.add_mission(name, duration_minutes)
    }

    /// Moves the mission at `from_index` to `to_index`
    ///
    /// # Errors
    ///
    /// Returns [`AdventureError::IndexOutOfRange`] if either index is past the
    /// end of the list.
    pub fn reorder_mission(&self, from_index: usize, to_index: usize) -> Result<(), AdventureError> {
        self.dispatch(AdventureAction::ReorderMission { from_index, to_index })
    }

    /// Removes a mission
    ///
    /// # Errors
    ///
    /// Returns [`AdventureError::UnknownMission`] if no mission has this id.
    pub fn remove_mission(&self, id: MissionId) -> Result<(), AdventureError> {
        self.dispatch(AdventureAction::RemoveMission { id })
    }

    /// The current snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<AdventureState> {
        self.store.snapshot()
    }

    /// Notified once per accepted operation
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<AdventureState>> {
        self.store.subscribe()
    }

    /// Recommended time to start prepping, if a target time is set
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        self.store.state(compute_start_time)
    }

    /// Display lines for the current snapshot
    #[must_use]
    pub fn summary(&self) -> AdventureSummary {
        self.store.state(AdventureSummary::from_state)
    }

    /// Where the time picker should start: an hour from now
    #[must_use]
    pub fn suggested_picker_time(&self) -> (u32, u32) {
        suggested_picker_time(&self.store.environment().clock.local_now())
    }
}
