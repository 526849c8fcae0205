//! Planner policy configuration.

/// Policy knobs for the adventure reducer
///
/// # Example
///
/// ```
/// use adventure::PlannerConfig;
///
/// let config = PlannerConfig::default().with_roll_to_next_day_if_past(true);
/// assert!(config.roll_to_next_day_if_past);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Move a confirmed time that has already passed today to tomorrow
    ///
    /// Off by default: a confirmed time always lands on today's date.
    pub roll_to_next_day_if_past: bool,
}

impl PlannerConfig {
    /// Set the day roll-over policy
    #[must_use]
    pub const fn with_roll_to_next_day_if_past(mut self, roll: bool) -> Self {
        self.roll_to_next_day_if_past = roll;
        self
    }
}
