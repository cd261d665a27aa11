// Decision selection: late-game overrides, then max expected points.
//
// With the clock short, expected points stop being the right objective and a
// fixed coaching policy takes over: protect a lead with a makeable kick,
// chase the score that ties, concede the field-position battle when one
// score cannot close the gap. Everything else is a straight EP comparison.

use serde::{Deserialize, Serialize};

use crate::decision::situation::GameSituation;
use crate::decision::values::ActionValues;

// ---------------------------------------------------------------------------
// Late-game policy constants
// ---------------------------------------------------------------------------

/// Clock threshold (minutes) below which the overrides apply.
const LATE_GAME_MINUTES: f64 = 2.0;

/// Longest attempt worth taking to protect a lead.
const LEADING_MAX_FG_DISTANCE: u32 = 50;

/// A deficit a field goal can erase.
const TRAILING_FG_MARGIN: i64 = 3;

/// Longest attempt worth taking to tie or win while trailing.
const TRAILING_FG_MAX_DISTANCE: u32 = 55;

/// Largest deficit a single possession can erase.
const TRAILING_GO_MARGIN: i64 = 8;

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// The three mutually exclusive fourth-down actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Go,
    Punt,
    Kick,
}

impl Decision {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Go => "GO",
            Decision::Punt => "PUNT",
            Decision::Kick => "KICK",
        }
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Choose the action for a situation given its three expected-point values.
pub fn select_decision(situation: &GameSituation, values: &ActionValues) -> Decision {
    if situation.time_remaining_minutes < LATE_GAME_MINUTES {
        let diff = situation.point_diff();
        if diff > 0 {
            // Leading: take a high-probability score, but do not attempt
            // unrealistically long kicks.
            return if situation.field_goal_distance() <= LEADING_MAX_FG_DISTANCE {
                Decision::Kick
            } else {
                Decision::Punt
            };
        }
        if diff < 0 {
            let trailing_by = -diff;
            return if trailing_by <= TRAILING_FG_MARGIN
                && situation.field_goal_distance() <= TRAILING_FG_MAX_DISTANCE
            {
                Decision::Kick
            } else if trailing_by <= TRAILING_GO_MARGIN {
                Decision::Go
            } else {
                Decision::Punt
            };
        }
        // Tied: no override, fall through to the EP comparison.
    }

    max_ep_decision(values)
}

/// Pick the action with the greatest expected points.
///
/// Ties resolve to the first action in Punt, Go, Kick order. With
/// continuous-valued EPs an exact tie is a vanishing edge case, but the
/// tie-break keeps selection fully deterministic.
fn max_ep_decision(values: &ActionValues) -> Decision {
    let ordered = [
        (Decision::Punt, values.punt),
        (Decision::Go, values.go),
        (Decision::Kick, values.kick),
    ];
    let mut best = ordered[0];
    for (decision, value) in ordered.into_iter().skip(1) {
        if value > best.1 {
            best = (decision, value);
        }
    }
    best.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
