//! Errors returned when an adventure action is rejected.
//!
//! Every variant is recoverable. A rejected action leaves the published
//! snapshot exactly as it was.

use crate::types::MissionId;
use thiserror::Error;

/// Why an adventure action was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdventureError {
    /// Hour or minute outside the clock range
    #[error("Invalid time {hour}:{minute:02}: hour must be 0-23 and minute 0-59")]
    InvalidTimeValue {
        /// Requested hour
        hour: u32,
        /// Requested minute
        minute: u32,
    },

    /// Empty name or an unusable duration
    #[error("Invalid prep mission: {0}")]
    InvalidMission(String),

    /// A reorder index past the end of the mission list
    #[error("Mission index {index} is out of range for {len} missions")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Number of missions at the time
        len: usize,
    },

    /// No mission has this id
    #[error("No prep mission with id {0}")]
    UnknownMission(MissionId),
}
