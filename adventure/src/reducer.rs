//! Reducer logic for the adventure planner.
//!
//! Validate first, mutate second: an action either applies completely or is
//! rejected with the state untouched.

use crate::config::PlannerConfig;
use crate::error::AdventureError;
use crate::schedule::anchor_target_time;
use crate::types::{AdventureAction, AdventureState, MissionId, PrepMission, TimeInput};
use composable_rust_core::{environment::Clock, reducer::Reducer};
use std::sync::Arc;

/// Environment dependencies for the adventure reducer
#[derive(Clone)]
pub struct AdventureEnvironment {
    /// Clock used to find today's date and the local offset
    pub clock: Arc<dyn Clock>,
    /// Planner policy
    pub config: PlannerConfig,
}

impl AdventureEnvironment {
    /// Creates a new `AdventureEnvironment` with the default policy
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            config: PlannerConfig::default(),
        }
    }

    /// Replaces the planner policy
    #[must_use]
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for AdventureEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdventureEnvironment")
            .field("now", &self.clock.now())
            .field("config", &self.config)
            .finish()
    }
}

/// Parses a free-text duration such as `" 15 "` into minutes
///
/// Only the sign is left for [`AdventureReducer`] to check, so `"-5"` parses.
///
/// # Errors
///
/// Returns [`AdventureError::InvalidMission`] if the text is not a base-10
/// integer.
pub fn parse_duration_minutes(text: &str) -> Result<i64, AdventureError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| AdventureError::InvalidMission(format!("duration {trimmed:?} is not a whole number of minutes")))
}

/// Reducer for the adventure planner
#[derive(Clone, Copy, Debug, Default)]
pub struct AdventureReducer;

impl AdventureReducer {
    /// Creates a new `AdventureReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates an `AddMission` command and returns the checked duration
    fn validate_add_mission(
        state: &AdventureState,
        id: &MissionId,
        name: &str,
        duration_minutes: i64,
    ) -> Result<u32, AdventureError> {
        if name.is_empty() {
            return Err(AdventureError::InvalidMission("name cannot be empty".to_string()));
        }

        if duration_minutes < 0 {
            return Err(AdventureError::InvalidMission(format!(
                "duration cannot be negative, got {duration_minutes}"
            )));
        }

        let minutes = u32::try_from(duration_minutes).map_err(|_| {
            AdventureError::InvalidMission(format!("duration {duration_minutes} is too large"))
        })?;

        if state.position_of(id).is_some() {
            return Err(AdventureError::InvalidMission(format!(
                "mission with id {id} already exists"
            )));
        }

        Ok(minutes)
    }

    /// Validates a `ReorderMission` command
    fn validate_reorder(
        state: &AdventureState,
        from_index: usize,
        to_index: usize,
    ) -> Result<(), AdventureError> {
        let len = state.mission_count();

        for index in [from_index, to_index] {
            if index >= len {
                return Err(AdventureError::IndexOutOfRange { index, len });
            }
        }

        Ok(())
    }
}

impl Reducer for AdventureReducer {
    type State = AdventureState;
    type Action = AdventureAction;
    type Environment = AdventureEnvironment;
    type Error = AdventureError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<(), Self::Error> {
        match action {
            AdventureAction::SetTitle { title } => {
                state.title = title;
            },

            AdventureAction::SetTimeInputVisible { visible } => {
                state.time_input = TimeInput::from_visible(visible);
            },

            AdventureAction::ConfirmTargetTime { hour, minute } => {
                let target = anchor_target_time(
                    env.clock.local_now(),
                    hour,
                    minute,
                    env.config.roll_to_next_day_if_past,
                )?;

                tracing::debug!(%target, "Target time confirmed");
                state.target_time = Some(target);
                state.time_input = TimeInput::Hidden;
            },

            AdventureAction::AddMission {
                id,
                name,
                duration_minutes,
            } => {
                let minutes = Self::validate_add_mission(state, &id, &name, duration_minutes)?;
                state.prep_missions.push(PrepMission::new(id, name, minutes));
            },

            AdventureAction::ReorderMission {
                from_index,
                to_index,
            } => {
                Self::validate_reorder(state, from_index, to_index)?;

                if from_index != to_index {
                    let mission = state.prep_missions.remove(from_index);
                    state.prep_missions.insert(to_index, mission);
                }
            },

            AdventureAction::RemoveMission { id } => {
                let index = state
                    .position_of(&id)
                    .ok_or(AdventureError::UnknownMission(id))?;
                state.prep_missions.remove(index);
            },
        }

        Ok(())
    }
}
