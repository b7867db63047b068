//! Robert Penner's easing equations.
//!
//! Every function takes the same leading arguments:
//! - `t` - elapsed time, in the same unit as `d`
//! - `b` - begin value
//! - `c` - change in value (`finish - begin`)
//! - `d` - duration
//!
//! and returns the interpolated value. `f(0, b, c, d) == b` and
//! `f(d, b, c, d) == b + c` up to floating point error.

use std::f64::consts::TAU;

/// Default overshoot for the back curves (about 10% past the target).
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Extra overshoot scaling applied by [`back_ease_in_out`].
const IN_OUT_OVERSHOOT_SCALE: f64 = 1.525;

/// Default elastic period as a fraction of the duration.
const ELASTIC_PERIOD: f64 = 0.3;

/// Default elastic period for [`elastic_ease_in_out`].
const ELASTIC_IN_OUT_PERIOD: f64 = 0.3 * 1.5;

/// Constant speed.
#[inline]
pub fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

// ============================================================================
// Quadratic
// ============================================================================

#[inline]
pub fn regular_ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

#[inline]
pub fn regular_ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

#[inline]
pub fn regular_ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

// ============================================================================
// Cubic
// ============================================================================

#[inline]
pub fn cubic_ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t + b
}

#[inline]
pub fn cubic_ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

#[inline]
pub fn cubic_ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

// ============================================================================
// Quintic
// ============================================================================

#[inline]
pub fn strong_ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t * t * t * t + b
}

#[inline]
pub fn strong_ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

#[inline]
pub fn strong_ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t * t * t + 2.0) + b
}

// ============================================================================
// Back
// ============================================================================

/// Pulls back below `b` before accelerating towards the target.
///
/// `s` controls the overshoot; `None` uses [`DEFAULT_OVERSHOOT`].
pub fn back_ease_in(t: f64, b: f64, c: f64, d: f64, s: Option<f64>) -> f64 {
    let s = s.unwrap_or(DEFAULT_OVERSHOOT);
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

/// Overshoots the target, then settles back onto it.
pub fn back_ease_out(t: f64, b: f64, c: f64, d: f64, s: Option<f64>) -> f64 {
    let s = s.unwrap_or(DEFAULT_OVERSHOOT);
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

pub fn back_ease_in_out(t: f64, b: f64, c: f64, d: f64, s: Option<f64>) -> f64 {
    let s = s.unwrap_or(DEFAULT_OVERSHOOT) * IN_OUT_OVERSHOOT_SCALE;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

// ============================================================================
// Elastic
// ============================================================================

/// Resolve the amplitude and phase shift of an elastic curve.
///
/// An amplitude override only applies when it is at least `|c|`; anything
/// smaller (or non-positive) falls back to the default `a = c`, `s = p / 4`.
/// The `asin` argument is clamped so rounding can never push it out of domain.
fn elastic_shape(c: f64, a: Option<f64>, p: f64) -> (f64, f64) {
    match a {
        Some(a) if a > 0.0 && a >= c.abs() => {
            let ratio = (c / a).clamp(-1.0, 1.0);
            (a, p / TAU * ratio.asin())
        }
        _ => (c, p / 4.0),
    }
}

/// Exponentially growing oscillation that snaps onto the target.
///
/// `a` is the amplitude (defaults to `c`), `p` the period (defaults to
/// `0.3 * d`).
pub fn elastic_ease_in(t: f64, b: f64, c: f64, d: f64, a: Option<f64>, p: Option<f64>) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = p.unwrap_or(d * ELASTIC_PERIOD);
    let (a, s) = elastic_shape(c, a, p);
    let t = t - 1.0;
    -(a * 2f64.powf(10.0 * t) * ((t * d - s) * TAU / p).sin()) + b
}

/// Overshoots and rings around the target with decaying amplitude.
pub fn elastic_ease_out(t: f64, b: f64, c: f64, d: f64, a: Option<f64>, p: Option<f64>) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = p.unwrap_or(d * ELASTIC_PERIOD);
    let (a, s) = elastic_shape(c, a, p);
    a * 2f64.powf(-10.0 * t) * ((t * d - s) * TAU / p).sin() + c + b
}

/// Period defaults to `0.45 * d`.
pub fn elastic_ease_in_out(t: f64, b: f64, c: f64, d: f64, a: Option<f64>, p: Option<f64>) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = p.unwrap_or(d * ELASTIC_IN_OUT_PERIOD);
    let (a, s) = elastic_shape(c, a, p);
    let t = t - 1.0;
    let wave = ((t * d - s) * TAU / p).sin();
    if t < 0.0 {
        -0.5 * (a * 2f64.powf(10.0 * t) * wave) + b
    } else {
        a * 2f64.powf(-10.0 * t) * wave * 0.5 + c + b
    }
}

// ============================================================================
// Bounce
// ============================================================================

/// Four parabolic hops of decreasing height, landing on the target.
pub fn bounce_ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

/// Time-reversed [`bounce_ease_out`].
pub fn bounce_ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - bounce_ease_out(d - t, 0.0, c, d) + b
}

pub fn bounce_ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t < d / 2.0 {
        bounce_ease_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_ease_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}
