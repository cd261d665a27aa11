// Expected-points curve.
//
// A fixed cubic fit of expected point differential against field position
// (yards from the possessing team's own goal line, 1-99). The coefficients
// were fit offline against charted play-by-play; the engine treats them as
// constants and never refits at runtime. The curve is strictly increasing
// over the playable range, so inverting it for breakeven analysis yields at
// most one in-range answer.

use crate::decision::cubic;

// ---------------------------------------------------------------------------
// Curve definition
// ---------------------------------------------------------------------------

/// Cubic expected-points model: `ep(x) = a*x^3 + b*x^2 + c*x + d`.
#[derive(Debug, Clone, Copy)]
pub struct EpCurve {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

/// The pre-fit curve used everywhere in the engine.
pub const EP_CURVE: EpCurve = EpCurve {
    a: 1.033_959_10e-5,
    b: -9.543_141_54e-4,
    c: 5.651_342_09e-2,
    d: -3.517_845_12e-1,
};

impl EpCurve {
    /// Expected point differential for the possessing team at `position`.
    ///
    /// Positions outside [1, 99] are silently clamped into range; computed
    /// spots (e.g. a hypothetical kickoff return past the goal line) are
    /// legal inputs here even though a `GameSituation` would reject them.
    pub fn expected_points(&self, position: f64) -> f64 {
        let x = position.clamp(1.0, 99.0);
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Field positions in [1, 99] where the curve takes exactly `target`
    /// expected points.
    ///
    /// At most one position for this monotone curve, but callers receive the
    /// full in-range root set and apply their own selection policy.
    pub fn positions_at(&self, target: f64) -> Vec<f64> {
        cubic::real_roots(self.a, self.b, self.c, self.d - target)
            .into_iter()
            .filter(|position| (1.0..=99.0).contains(position))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn known_values() {
        // Spot checks against the polynomial evaluated by hand.
        assert!(approx_eq(EP_CURVE.expected_points(50.0), 1.38055, 1e-4));
        assert!(approx_eq(EP_CURVE.expected_points(20.0), 0.47947, 1e-4));
        assert!(approx_eq(EP_CURVE.expected_points(99.0), 5.92183, 1e-4));
    }

    #[test]
    fn own_goal_line_is_negative_territory() {
        // Backed up against your own goal line, the expected next score
        // belongs to the opponent.
        assert!(EP_CURVE.expected_points(1.0) < 0.0);
    }

    #[test]
    fn clamps_out_of_range_positions() {
        assert_eq!(
            EP_CURVE.expected_points(-5.0),
            EP_CURVE.expected_points(1.0)
        );
        assert_eq!(
            EP_CURVE.expected_points(150.0),
            EP_CURVE.expected_points(99.0)
        );
    }

    #[test]
    fn positions_at_inverts_the_curve() {
        for position in [1.5, 8.5, 27.0, 50.0, 73.2, 98.5] {
            let target = EP_CURVE.expected_points(position);
            let roots = EP_CURVE.positions_at(target);
            assert_eq!(roots.len(), 1, "expected one root for ep({position})");
            assert!(
                approx_eq(roots[0], position, 1e-6),
                "expected root near {position}, got {}",
                roots[0]
            );
        }
    }

    #[test]
    fn positions_at_unreachable_target_is_empty() {
        // The curve never reaches 10 points inside [1, 99].
        assert!(EP_CURVE.positions_at(10.0).is_empty());
        assert!(EP_CURVE.positions_at(-10.0).is_empty());
    }

    proptest! {
        #[test]
        fn monotone_non_decreasing(x in 1.0f64..99.0, step in 1e-3f64..10.0) {
            let y = (x + step).min(99.0);
            prop_assert!(
                EP_CURVE.expected_points(x) <= EP_CURVE.expected_points(y) + 1e-12
            );
        }

        #[test]
        fn continuous_under_small_steps(x in 1.0f64..98.9) {
            let delta = 1e-4;
            let jump =
                (EP_CURVE.expected_points(x + delta) - EP_CURVE.expected_points(x)).abs();
            prop_assert!(jump < 1e-2);
        }
    }
}
