// Fourth-down recommendation engine.
//
// The single entry point tying the pieces together: validate the situation,
// price the three options, apply the selection policy, and attach the
// breakeven threshold for the chosen special-teams action. Pure and
// synchronous; safe to call from as many threads as the caller likes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decision::select::{select_decision, Decision};
use crate::decision::situation::{GameSituation, SituationError};
use crate::decision::threshold::{kick_breakeven_make_pct, punt_breakeven_net_yards};
use crate::decision::values::compute_action_values;

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// A decision plus the breakeven threshold that applies to it.
///
/// Only the special-teams actions carry a threshold, and the variant shapes
/// enforce that: going for it has no tunable input to invert; punting
/// carries the net yardage needed to match the best alternative
/// (`f64::INFINITY` when no finite distance gets there); kicking carries the
/// make probability needed, in percent (`0.0` when the kick is at least as
/// good regardless of accuracy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision")]
pub enum Recommendation {
    Go,
    Punt { needed_net_yards: f64 },
    Kick { needed_make_pct: f64 },
}

impl Recommendation {
    /// The underlying action, without its threshold payload.
    pub fn decision(&self) -> Decision {
        match self {
            Recommendation::Go => Decision::Go,
            Recommendation::Punt { .. } => Decision::Punt,
            Recommendation::Kick { .. } => Decision::Kick,
        }
    }

    /// The threshold payload, if the action carries one.
    pub fn threshold(&self) -> Option<f64> {
        match self {
            Recommendation::Go => None,
            Recommendation::Punt { needed_net_yards } => Some(*needed_net_yards),
            Recommendation::Kick { needed_make_pct } => Some(*needed_make_pct),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Evaluate one fourth-down decision point.
///
/// Validation runs first and an invalid situation produces no partial
/// results. The threshold is solved only for the action actually selected.
pub fn decide(situation: &GameSituation) -> Result<Recommendation, SituationError> {
    situation.validate()?;

    let values = compute_action_values(situation);
    let decision = select_decision(situation, &values);
    debug!(
        go = values.go,
        punt = values.punt,
        kick = values.kick,
        decision = decision.label(),
        "fourth-down evaluation"
    );

    Ok(match decision {
        Decision::Go => Recommendation::Go,
        Decision::Punt => Recommendation::Punt {
            needed_net_yards: punt_breakeven_net_yards(situation, &values),
        },
        Decision::Kick => Recommendation::Kick {
            needed_make_pct: kick_breakeven_make_pct(situation, &values),
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
