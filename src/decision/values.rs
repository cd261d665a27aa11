// Action-value calculation.
//
// Prices each of the three fourth-down options in expected points from the
// possessing team's perspective. Possession changes flip the sign: the
// opponent's expected points at their takeover spot count against us.

use crate::decision::curve::EP_CURVE;
use crate::decision::situation::GameSituation;
use crate::decision::tables::{conversion_probability, field_goal_make_probability};

/// Where the receiving team is spotted after a ball dead in the end zone.
pub(crate) const TOUCHBACK_SPOT: f64 = 20.0;

/// Points awarded for a made field goal.
const FIELD_GOAL_POINTS: f64 = 3.0;

// ---------------------------------------------------------------------------
// Action values
// ---------------------------------------------------------------------------

/// Expected points for each available action, computed fresh per situation
/// and never persisted.
#[derive(Debug, Clone, Copy)]
pub struct ActionValues {
    pub go: f64,
    pub punt: f64,
    pub kick: f64,
}

/// Price all three actions for a validated situation.
pub fn compute_action_values(situation: &GameSituation) -> ActionValues {
    ActionValues {
        go: go_value(situation),
        punt: punt_value(situation),
        kick: kick_value(situation),
    }
}

// ---------------------------------------------------------------------------
// Go for it
// ---------------------------------------------------------------------------

/// Conversion keeps the drive alive at the new spot; failure hands the
/// opponent the ball where we stood.
fn go_value(situation: &GameSituation) -> f64 {
    let p_conv = conversion_probability(situation.distance_to_first_down);
    let converted_position =
        (situation.field_position + situation.distance_to_first_down).min(99);
    let success = EP_CURVE.expected_points(f64::from(converted_position));
    let turnover_spot = f64::from(100 - situation.field_position);
    let failure = -EP_CURVE.expected_points(turnover_spot);
    p_conv * success + (1.0 - p_conv) * failure
}

// ---------------------------------------------------------------------------
// Punt
// ---------------------------------------------------------------------------

fn punt_value(situation: &GameSituation) -> f64 {
    -EP_CURVE.expected_points(punt_landing_spot(situation))
}

/// Opponent starting spot after a punt at the configured net yardage. A punt
/// carrying into or through the end zone comes back out to the touchback
/// spot.
pub(crate) fn punt_landing_spot(situation: &GameSituation) -> f64 {
    let field_position = f64::from(situation.field_position);
    if field_position + situation.average_net_punt_yards > 100.0 {
        TOUCHBACK_SPOT
    } else {
        100.0 - field_position - situation.average_net_punt_yards
    }
}

// ---------------------------------------------------------------------------
// Field goal
// ---------------------------------------------------------------------------

fn kick_value(situation: &GameSituation) -> f64 {
    let p_make = field_goal_make_probability(situation.field_goal_distance());
    let (slope, intercept) = kick_value_line(situation);
    p_make * slope + intercept
}

/// Opponent spot after a miss: a short kick is returned to the spot of the
/// kick (line of scrimmage plus the 7-yard snap offset), floored at the
/// touchback spot for attempts from close range.
fn missed_kick_spot(situation: &GameSituation) -> f64 {
    (107.0 - f64::from(situation.field_position)).max(TOUCHBACK_SPOT)
}

/// The kick value is linear in make probability: `value(p) = p * slope +
/// intercept`. A make is worth three points minus the opponent's expected
/// points off the ensuing kickoff; a miss hands them the miss spot.
pub(crate) fn kick_value_line(situation: &GameSituation) -> (f64, f64) {
    let kickoff_ep =
        EP_CURVE.expected_points(f64::from(situation.kickoff_start_position));
    let miss_ep = EP_CURVE.expected_points(missed_kick_spot(situation));
    ((FIELD_GOAL_POINTS - kickoff_ep) + miss_ep, -miss_ep)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
