// Breakeven thresholds for the selected action.
//
// Answers the question a special-teams coach actually asks: how much net
// punt yardage, or how reliable a kicker, would it take for this call to
// hold up against the best alternative. Only the special-teams actions have
// a tunable input to invert; going for it never carries a threshold.

use crate::decision::curve::EP_CURVE;
use crate::decision::situation::GameSituation;
use crate::decision::values::{kick_value_line, ActionValues, TOUCHBACK_SPOT};

// ---------------------------------------------------------------------------
// Punt breakeven
// ---------------------------------------------------------------------------

/// Minimum net punt yardage at which punting matches the best alternative.
///
/// Inverts `punt_value = -ep(opponent_spot)`: find the opponent spot where
/// the punt exactly matches `max(go, kick)`, then convert that spot into the
/// net distance required to reach it. Returns `f64::INFINITY` when no finite
/// net distance gets there, meaning the punt stands (or falls) on its own
/// regardless of the punter.
pub fn punt_breakeven_net_yards(situation: &GameSituation, values: &ActionValues) -> f64 {
    let max_other = values.go.max(values.kick);
    let distance_to_goal = f64::from(100 - situation.field_position);

    // Opponent spots where ep(spot) == -max_other. Higher spots are worse
    // for the punting team, so the largest in-range root is the boundary:
    // any net distance that pins the opponent at or past it clears the bar.
    let breakeven_spot = EP_CURVE
        .positions_at(-max_other)
        .into_iter()
        .reduce(f64::max);

    if let Some(spot) = breakeven_spot {
        return (distance_to_goal - spot).max(0.0);
    }

    // No in-range breakeven spot. The best outcome any punt can force is a
    // touchback at the 20; if even that clears the bar, the shortest punt
    // that reaches the end zone is the answer. Otherwise the threshold is
    // unreachable.
    if -EP_CURVE.expected_points(TOUCHBACK_SPOT) >= max_other {
        distance_to_goal + 1.0
    } else {
        f64::INFINITY
    }
}

// ---------------------------------------------------------------------------
// Kick breakeven
// ---------------------------------------------------------------------------

/// Minimum field-goal make probability (percent, 0-100) at which kicking
/// matches the best alternative.
///
/// The kick value is linear in make probability, so the breakeven is a
/// single division, clamped into [0, 1]. A non-positive slope means a better
/// kicker cannot improve the outcome; the kick is already at least as good
/// regardless of accuracy and the needed probability is reported as zero.
pub fn kick_breakeven_make_pct(situation: &GameSituation, values: &ActionValues) -> f64 {
    let max_other = values.go.max(values.punt);
    let (slope, intercept) = kick_value_line(situation);

    if slope <= 0.0 {
        return 0.0;
    }

    let needed = ((max_other - intercept) / slope).clamp(0.0, 1.0);
    needed * 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
