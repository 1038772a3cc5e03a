//! Closed-form NACA 4-digit thickness and mean-line equations.
//!
//! All functions take chord positions `x` in `[0, 1]` and return values as a
//! fraction of chord.

/// Half-thickness of a section with maximum thickness `t` at chord position `x`.
pub fn thickness_at(t: f64, x: f64) -> f64 {
    let x2 = x * x;
    5.0 * t
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x2 + 0.2843 * x * x2 - 0.1036 * x2 * x2)
}

/// Mean camber line height for maximum camber `m` located at `p`.
///
/// Returns 0 when `m == 0`, and for the forward branch when `p == 0`
/// (only reachable at `x = 0`).
pub fn camber_at(m: f64, p: f64, x: f64) -> f64 {
    if m == 0.0 {
        return 0.0;
    }
    if x <= p {
        if p == 0.0 {
            return 0.0;
        }
        m / (p * p) * (2.0 * p * x - x * x)
    } else {
        let q = 1.0 - p;
        m / (q * q) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
    }
}

/// Slope `dy_c/dx` of the mean camber line, with the same guards as [`camber_at`].
pub fn camber_slope_at(m: f64, p: f64, x: f64) -> f64 {
    if m == 0.0 {
        return 0.0;
    }
    let coeff = if x <= p {
        if p == 0.0 {
            return 0.0;
        }
        2.0 * m / (p * p)
    } else {
        let q = 1.0 - p;
        2.0 * m / (q * q)
    };
    coeff * (p - x)
}
