//! Domain types for the adventure planner.
//!
//! An adventure is a single titled event with an optional target time and an
//! ordered list of prep missions. [`AdventureState`] is the snapshot the
//! store publishes; it is plain data and is never mutated once published.

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a prep mission
///
/// Assigned when the mission is created. Reordering and removal key on this
/// rather than on the mission name, so two missions may share a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(Uuid);

impl MissionId {
    /// Creates a new random `MissionId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `MissionId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named preparation task that has to happen before the adventure
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepMission {
    /// Stable identifier
    pub id: MissionId,
    /// What to do
    pub name: String,
    /// How long it takes, in whole minutes
    pub duration_minutes: u32,
}

impl PrepMission {
    /// Creates a new prep mission
    #[must_use]
    pub const fn new(id: MissionId, name: String, duration_minutes: u32) -> Self {
        Self {
            id,
            name,
            duration_minutes,
        }
    }

    /// The mission's duration as a time delta
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::from(self.duration_minutes) * 60_000)
    }

    /// Display label, e.g. `Shower (15')`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({}')", self.name, self.duration_minutes)
    }
}

/// Whether the time selection UI is open
///
/// Opened by a request, closed by either a confirmed time or a cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInput {
    /// No time selection in progress
    #[default]
    Hidden,
    /// The user asked to pick a time and has not confirmed or cancelled yet
    Shown,
}

impl TimeInput {
    /// Maps the presentation layer's boolean onto the enum
    #[must_use]
    pub const fn from_visible(visible: bool) -> Self {
        if visible { Self::Shown } else { Self::Hidden }
    }

    /// Whether the time input should be shown
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// State of one adventure-planning session
///
/// Every accepted action produces a new `AdventureState`; observers compare
/// snapshots by value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdventureState {
    /// Free-form adventure title
    pub title: String,
    /// Time selection UI state
    pub time_input: TimeInput,
    /// When the adventure happens, on the local wall clock
    pub target_time: Option<DateTime<FixedOffset>>,
    /// Prep missions in the order they will be done
    pub prep_missions: Vec<PrepMission>,
}

impl AdventureState {
    /// Creates a new empty session state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the time selection UI should be shown
    #[must_use]
    pub const fn time_input_visible(&self) -> bool {
        self.time_input.is_visible()
    }

    /// Number of prep missions
    #[must_use]
    pub fn mission_count(&self) -> usize {
        self.prep_missions.len()
    }

    /// Sum of all mission durations, in minutes
    #[must_use]
    pub fn total_prep_minutes(&self) -> u64 {
        self.prep_missions
            .iter()
            .map(|m| u64::from(m.duration_minutes))
            .sum()
    }

    /// A target time may only be requested once the adventure has a title
    #[must_use]
    pub fn can_request_time(&self) -> bool {
        !self.title.is_empty()
    }

    /// 1-based number of the next mission to be added
    #[must_use]
    pub fn next_mission_number(&self) -> usize {
        self.prep_missions.len() + 1
    }

    /// Index of the mission with the given id
    #[must_use]
    pub fn position_of(&self, id: &MissionId) -> Option<usize> {
        self.prep_missions.iter().position(|m| &m.id == id)
    }

    /// Returns a mission by id
    #[must_use]
    pub fn mission(&self, id: &MissionId) -> Option<&PrepMission> {
        self.prep_missions.iter().find(|m| &m.id == id)
    }
}

/// Actions the adventure reducer understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdventureAction {
    /// Replace the adventure title
    SetTitle {
        /// New title, may be empty
        title: String,
    },

    /// Show or hide the time selection UI
    SetTimeInputVisible {
        /// Whether the input is shown
        visible: bool,
    },

    /// The time picker confirmed an hour and minute
    ConfirmTargetTime {
        /// Hour of day, 0-23
        hour: u32,
        /// Minute of hour, 0-59
        minute: u32,
    },

    /// Append a prep mission
    AddMission {
        /// Identifier for the new mission
        id: MissionId,
        /// Mission name, must not be empty
        name: String,
        /// Duration in minutes, must be non-negative
        duration_minutes: i64,
    },

    /// Move a mission from one position to another
    ReorderMission {
        /// Current position
        from_index: usize,
        /// Position after the move
        to_index: usize,
    },

    /// Remove a mission
    RemoveMission {
        /// Mission to remove
        id: MissionId,
    },
}
