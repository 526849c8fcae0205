//! Scheduling math: anchoring a picked clock time to a date, folding mission
//! durations back from the target time, and formatting times for display.

use crate::error::AdventureError;
use crate::types::AdventureState;
use chrono::{DateTime, FixedOffset, TimeDelta, Timelike, Utc};

/// Turns a picked `hour:minute` into a timestamp on `now`'s date
///
/// Seconds are zero. With `roll_to_next_day_if_past` the result moves to the
/// following day when it is earlier than `now`; without it the date is always
/// today, even for a time that has already passed.
///
/// # Errors
///
/// Returns [`AdventureError::InvalidTimeValue`] if `hour > 23` or
/// `minute > 59`.
pub fn anchor_target_time(
    now: DateTime<FixedOffset>,
    hour: u32,
    minute: u32,
    roll_to_next_day_if_past: bool,
) -> Result<DateTime<FixedOffset>, AdventureError> {
    let invalid = || AdventureError::InvalidTimeValue { hour, minute };

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    let target = now
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .and_then(|naive| naive.and_local_timezone(*now.offset()).single())
        .ok_or_else(invalid)?;

    if roll_to_next_day_if_past && target < now {
        return target.checked_add_signed(TimeDelta::days(1)).ok_or_else(invalid);
    }

    Ok(target)
}

/// When to start prepping: the target time minus every mission's duration
///
/// Absent iff no target time is set. The durations are subtracted one
/// mission at a time in list order. A result before the earliest
/// representable instant saturates there.
#[must_use]
pub fn compute_start_time(state: &AdventureState) -> Option<DateTime<FixedOffset>> {
    let target = state.target_time?;

    Some(state.prep_missions.iter().fold(target, |running, mission| {
        running
            .checked_sub_signed(mission.duration())
            .unwrap_or_else(|| DateTime::<Utc>::MIN_UTC.with_timezone(running.offset()))
    }))
}

/// Initial value for the time picker: one hour from now, same minute
#[must_use]
pub fn suggested_picker_time(now: &DateTime<FixedOffset>) -> (u32, u32) {
    ((now.hour() + 1) % 24, now.minute())
}

/// 12-hour clock rendering, e.g. `06:00 PM`
#[must_use]
pub fn format_clock_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%I:%M %p").to_string()
}

/// Display lines for the current plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdventureSummary {
    /// `Adventure set for 06:00 PM`, once a target time is set
    pub headline: Option<String>,
    /// `You should start prepping at: 05:35 PM`, once a target time is set
    pub start_line: Option<String>,
    /// One label per mission, in order
    pub mission_labels: Vec<String>,
}

impl AdventureSummary {
    /// Builds the summary for a snapshot
    #[must_use]
    pub fn from_state(state: &AdventureState) -> Self {
        let headline = state
            .target_time
            .as_ref()
            .map(|target| format!("Adventure set for {}", format_clock_time(target)));
        let start_line = compute_start_time(state)
            .map(|start| format!("You should start prepping at: {}", format_clock_time(&start)));

        Self {
            headline,
            start_line,
            mission_labels: state.prep_missions.iter().map(|m| m.label()).collect(),
        }
    }
}
