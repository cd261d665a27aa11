// Game situation input record.
//
// An immutable snapshot of one fourth-down decision point. The engine is a
// pure function of this record: nothing persists between calls, and each
// evaluation is independent of every prior one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum SituationError {
    #[error("field position must be between 1 and 99, got {got}")]
    InvalidFieldPosition { got: u32 },

    #[error("distance to first down must be at least 1 yard")]
    InvalidDistance,

    #[error("time remaining must be a non-negative number of minutes, got {got}")]
    InvalidTimeRemaining { got: f64 },
}

// ---------------------------------------------------------------------------
// Situation record
// ---------------------------------------------------------------------------

/// Default net punt yardage (gross distance minus expected return).
pub const DEFAULT_NET_PUNT_YARDS: f64 = 40.0;

/// Default opponent starting position after a made field goal and kickoff.
pub const DEFAULT_KICKOFF_START: u32 = 27;

/// One fourth-down decision point.
///
/// `field_position` is measured from our own goal line: 1 is our own 1-yard
/// line, 99 is the opponent's 1-yard line. Construct through [`new`] (which
/// validates) or fill the fields directly and let [`decide`] validate; either
/// way, out-of-range field positions are rejected before any expected-points
/// math runs.
///
/// [`new`]: GameSituation::new
/// [`decide`]: crate::decision::engine::decide
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameSituation {
    pub our_score: u32,
    pub opponent_score: u32,
    pub time_remaining_minutes: f64,
    pub distance_to_first_down: u32,
    pub field_position: u32,
    /// Expected net punt yardage for our punt unit.
    #[serde(default = "default_net_punt_yards")]
    pub average_net_punt_yards: f64,
    /// Where the opponent starts after a made field goal and kickoff.
    #[serde(default = "default_kickoff_start")]
    pub kickoff_start_position: u32,
}

fn default_net_punt_yards() -> f64 {
    DEFAULT_NET_PUNT_YARDS
}

fn default_kickoff_start() -> u32 {
    DEFAULT_KICKOFF_START
}

impl GameSituation {
    /// Build a validated situation with the default special-teams tunables.
    pub fn new(
        our_score: u32,
        opponent_score: u32,
        time_remaining_minutes: f64,
        distance_to_first_down: u32,
        field_position: u32,
    ) -> Result<Self, SituationError> {
        let situation = GameSituation {
            our_score,
            opponent_score,
            time_remaining_minutes,
            distance_to_first_down,
            field_position,
            average_net_punt_yards: DEFAULT_NET_PUNT_YARDS,
            kickoff_start_position: DEFAULT_KICKOFF_START,
        };
        situation.validate()?;
        Ok(situation)
    }

    /// Reject situations the engine must not evaluate. Fails fast: no
    /// partial results are produced for an invalid record.
    pub fn validate(&self) -> Result<(), SituationError> {
        if self.field_position < 1 || self.field_position > 99 {
            return Err(SituationError::InvalidFieldPosition {
                got: self.field_position,
            });
        }
        if self.distance_to_first_down < 1 {
            return Err(SituationError::InvalidDistance);
        }
        if !self.time_remaining_minutes.is_finite() || self.time_remaining_minutes < 0.0 {
            return Err(SituationError::InvalidTimeRemaining {
                got: self.time_remaining_minutes,
            });
        }
        Ok(())
    }

    /// Our score minus the opponent's. Positive when leading.
    pub fn point_diff(&self) -> i64 {
        i64::from(self.our_score) - i64::from(self.opponent_score)
    }

    /// Field-goal attempt distance: yards to the goal line plus snap depth
    /// and the goalpost offset behind it.
    pub fn field_goal_distance(&self) -> u32 {
        100u32.saturating_sub(self.field_position) + 17
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
