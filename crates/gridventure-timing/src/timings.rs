//! Delay configuration for one turn.

use chrono::TimeDelta;
use gridventure_core::error::DomainError;

/// Every delay that separates the visual steps of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTimings {
    /// Interval between cosmetic die faces.
    pub roll_tick_interval: TimeDelta,
    /// Number of roll ticks; the last one commits the real value.
    pub roll_ticks: u32,
    /// Pause between landing and revealing a transition.
    pub transition_pause: TimeDelta,
    /// How long a transition stays highlighted.
    pub transition_highlight: TimeDelta,
    /// How long a message stays visible.
    pub message_visible: TimeDelta,
    /// Delay between `Settled` and `Idle`.
    pub settle_delay: TimeDelta,
}

impl TurnTimings {
    /// All delays zero except a single roll tick. Useful when a caller only
    /// cares about game logic and wants a turn to finish in one advance.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            roll_tick_interval: TimeDelta::zero(),
            roll_ticks: 1,
            transition_pause: TimeDelta::zero(),
            transition_highlight: TimeDelta::zero(),
            message_visible: TimeDelta::zero(),
            settle_delay: TimeDelta::zero(),
        }
    }

    /// Total time from a roll until its roll animation commits.
    #[must_use]
    pub fn roll_duration(&self) -> TimeDelta {
        self.roll_tick_interval * i32::try_from(self.roll_ticks).unwrap_or(i32::MAX)
    }

    /// Worst-case time from a roll until the engine is idle again.
    #[must_use]
    pub fn longest_turn(&self) -> TimeDelta {
        self.roll_duration() + self.transition_pause + self.transition_highlight + self.settle_delay
    }

    /// Rejects configurations that could never finish a turn.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimings` for a zero tick count or any
    /// negative delay.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.roll_ticks == 0 {
            return Err(DomainError::InvalidTimings(
                "roll_ticks must be at least 1".to_owned(),
            ));
        }
        let delays = [
            ("roll_tick_interval", self.roll_tick_interval),
            ("transition_pause", self.transition_pause),
            ("transition_highlight", self.transition_highlight),
            ("message_visible", self.message_visible),
            ("settle_delay", self.settle_delay),
        ];
        for (name, delay) in delays {
            if delay < TimeDelta::zero() {
                return Err(DomainError::InvalidTimings(format!(
                    "{name} must not be negative"
                )));
            }
        }
        Ok(())
    }
}

impl Default for TurnTimings {
    fn default() -> Self {
        Self {
            roll_tick_interval: TimeDelta::milliseconds(80),
            roll_ticks: 15,
            transition_pause: TimeDelta::milliseconds(500),
            transition_highlight: TimeDelta::milliseconds(2_000),
            message_visible: TimeDelta::milliseconds(4_000),
            settle_delay: TimeDelta::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings_are_valid() {
        let timings = TurnTimings::default();
        assert!(timings.validate().is_ok());
        assert_eq!(timings.roll_duration(), TimeDelta::milliseconds(1_200));
        assert_eq!(timings.longest_turn(), TimeDelta::milliseconds(3_700));
    }

    #[test]
    fn test_zero_roll_ticks_is_rejected() {
        let timings = TurnTimings {
            roll_ticks: 0,
            ..TurnTimings::default()
        };
        match timings.validate() {
            Err(DomainError::InvalidTimings(msg)) => {
                assert_eq!(msg, "roll_ticks must be at least 1");
            }
            other => panic!("expected InvalidTimings, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_delay_is_rejected() {
        let timings = TurnTimings {
            transition_pause: TimeDelta::milliseconds(-1),
            ..TurnTimings::default()
        };
        match timings.validate() {
            Err(DomainError::InvalidTimings(msg)) => {
                assert_eq!(msg, "transition_pause must not be negative");
            }
            other => panic!("expected InvalidTimings, got {other:?}"),
        }
    }

    #[test]
    fn test_immediate_timings_are_valid() {
        assert!(TurnTimings::immediate().validate().is_ok());
        assert_eq!(TurnTimings::immediate().longest_turn(), TimeDelta::zero());
    }
}
