// Real-root extraction for low-degree polynomials.
//
// The punt breakeven solver needs every real root of the expected-points
// cubic shifted by a constant. Cardano's method covers the general cubic;
// vanishing leading coefficients degrade the problem to the quadratic and
// linear cases, which are handled here as well so callers never have to
// special-case their inputs.

use std::f64::consts::PI;

/// Coefficient magnitude below which a leading term is treated as absent.
const COEFF_EPSILON: f64 = 1e-12;

/// Discriminant magnitude below which roots are treated as repeated.
const DISC_EPSILON: f64 = 1e-9;

/// Real roots of `a*x^3 + b*x^2 + c*x + d = 0`, in ascending order.
///
/// Repeated roots are reported once. Degenerate inputs fall through to the
/// quadratic and linear solvers; the identically-zero polynomial has no
/// meaningful root set and yields an empty vec.
pub fn real_roots(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    if a.abs() < COEFF_EPSILON {
        return quadratic_roots(b, c, d);
    }

    // Normalize, then depress: x = t - b/3 turns the monic cubic into
    // t^3 + p*t + q.
    let b = b / a;
    let c = c / a;
    let d = d / a;
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b.powi(3) / 27.0 - b * c / 3.0 + d;

    let discriminant = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    let mut roots = if discriminant > DISC_EPSILON {
        // One real root (Cardano).
        let sqrt_disc = discriminant.sqrt();
        let u = (-q / 2.0 + sqrt_disc).cbrt();
        let v = (-q / 2.0 - sqrt_disc).cbrt();
        vec![u + v - shift]
    } else if discriminant < -DISC_EPSILON {
        // Three distinct real roots (trigonometric form; p < 0 here).
        let m = 2.0 * (-p / 3.0).sqrt();
        let acos_arg = ((3.0 * q) / (2.0 * p)) * (-3.0 / p).sqrt();
        let theta = acos_arg.clamp(-1.0, 1.0).acos() / 3.0;
        (0..3)
            .map(|k| m * (theta - 2.0 * PI * f64::from(k) / 3.0).cos() - shift)
            .collect()
    } else if p.abs() < DISC_EPSILON {
        // Triple root.
        vec![-shift]
    } else {
        // A simple root and a double root.
        let u = (-q / 2.0).cbrt();
        vec![2.0 * u - shift, -u - shift]
    };

    roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    roots
}

/// Real roots of `a*x^2 + b*x + c = 0`, in ascending order.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < COEFF_EPSILON {
        // Linear: b*x + c = 0. A constant polynomial has no roots to report.
        if b.abs() < COEFF_EPSILON {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < -DISC_EPSILON {
        Vec::new()
    } else if discriminant < DISC_EPSILON {
        vec![-b / (2.0 * a)]
    } else {
        let sqrt_disc = discriminant.sqrt();
        let mut roots = vec![(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)];
        roots.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
        roots
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
