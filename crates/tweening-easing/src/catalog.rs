//! Named catalog of easing curves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::functions as f;

/// Function pointer shape shared by every catalog entry when evaluated with
/// default parameters: `(t, b, c, d) -> value`.
pub type EasingFn = fn(f64, f64, f64, f64) -> f64;

/// Optional tuning for the curves that take extra parameters.
///
/// Unset fields fall back to each curve's default. Fields that a curve does
/// not use are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EasingParams {
    /// Back curves: how far past the target to swing.
    pub overshoot: Option<f64>,
    /// Elastic curves: oscillation amplitude, only honoured when `>= |change|`.
    pub amplitude: Option<f64>,
    /// Elastic curves: oscillation period, in the unit of the duration.
    pub period: Option<f64>,
}

/// Error returned when parsing an unknown easing name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown easing function: {0:?}")]
pub struct ParseEasingError(pub String);

/// Easing function selection.
///
/// Serialized with the camelCase catalog names (`"strongEaseInOut"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Quadratic, slow start
    RegularEaseIn,
    /// Quadratic, slow end
    RegularEaseOut,
    /// Quadratic, slow start and end
    RegularEaseInOut,
    CubicEaseIn,
    CubicEaseOut,
    CubicEaseInOut,
    /// Quintic, slow start
    StrongEaseIn,
    /// Quintic, slow end
    StrongEaseOut,
    /// Quintic, slow start and end
    StrongEaseInOut,
    BackEaseIn,
    BackEaseOut,
    BackEaseInOut,
    BounceEaseIn,
    BounceEaseOut,
    BounceEaseInOut,
    ElasticEaseIn,
    ElasticEaseOut,
    ElasticEaseInOut,
}

impl Easing {
    /// Every catalog entry, in declaration order.
    pub const ALL: [Easing; 19] = [
        Easing::Linear,
        Easing::RegularEaseIn,
        Easing::RegularEaseOut,
        Easing::RegularEaseInOut,
        Easing::CubicEaseIn,
        Easing::CubicEaseOut,
        Easing::CubicEaseInOut,
        Easing::StrongEaseIn,
        Easing::StrongEaseOut,
        Easing::StrongEaseInOut,
        Easing::BackEaseIn,
        Easing::BackEaseOut,
        Easing::BackEaseInOut,
        Easing::BounceEaseIn,
        Easing::BounceEaseOut,
        Easing::BounceEaseInOut,
        Easing::ElasticEaseIn,
        Easing::ElasticEaseOut,
        Easing::ElasticEaseInOut,
    ];

    /// Catalog name, e.g. `"bounceEaseOut"`.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::RegularEaseIn => "regularEaseIn",
            Easing::RegularEaseOut => "regularEaseOut",
            Easing::RegularEaseInOut => "regularEaseInOut",
            Easing::CubicEaseIn => "cubicEaseIn",
            Easing::CubicEaseOut => "cubicEaseOut",
            Easing::CubicEaseInOut => "cubicEaseInOut",
            Easing::StrongEaseIn => "strongEaseIn",
            Easing::StrongEaseOut => "strongEaseOut",
            Easing::StrongEaseInOut => "strongEaseInOut",
            Easing::BackEaseIn => "backEaseIn",
            Easing::BackEaseOut => "backEaseOut",
            Easing::BackEaseInOut => "backEaseInOut",
            Easing::BounceEaseIn => "bounceEaseIn",
            Easing::BounceEaseOut => "bounceEaseOut",
            Easing::BounceEaseInOut => "bounceEaseInOut",
            Easing::ElasticEaseIn => "elasticEaseIn",
            Easing::ElasticEaseOut => "elasticEaseOut",
            Easing::ElasticEaseInOut => "elasticEaseInOut",
        }
    }

    /// The function pointer for this entry, using default parameters.
    pub fn function(self) -> EasingFn {
        match self {
            Easing::Linear => f::linear,
            Easing::RegularEaseIn => f::regular_ease_in,
            Easing::RegularEaseOut => f::regular_ease_out,
            Easing::RegularEaseInOut => f::regular_ease_in_out,
            Easing::CubicEaseIn => f::cubic_ease_in,
            Easing::CubicEaseOut => f::cubic_ease_out,
            Easing::CubicEaseInOut => f::cubic_ease_in_out,
            Easing::StrongEaseIn => f::strong_ease_in,
            Easing::StrongEaseOut => f::strong_ease_out,
            Easing::StrongEaseInOut => f::strong_ease_in_out,
            Easing::BackEaseIn => |t, b, c, d| f::back_ease_in(t, b, c, d, None),
            Easing::BackEaseOut => |t, b, c, d| f::back_ease_out(t, b, c, d, None),
            Easing::BackEaseInOut => |t, b, c, d| f::back_ease_in_out(t, b, c, d, None),
            Easing::BounceEaseIn => f::bounce_ease_in,
            Easing::BounceEaseOut => f::bounce_ease_out,
            Easing::BounceEaseInOut => f::bounce_ease_in_out,
            Easing::ElasticEaseIn => |t, b, c, d| f::elastic_ease_in(t, b, c, d, None, None),
            Easing::ElasticEaseOut => |t, b, c, d| f::elastic_ease_out(t, b, c, d, None, None),
            Easing::ElasticEaseInOut => |t, b, c, d| f::elastic_ease_in_out(t, b, c, d, None, None),
        }
    }

    /// Evaluate with default parameters.
    #[inline]
    pub fn evaluate(self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        (self.function())(t, b, c, d)
    }

    /// Evaluate with optional overshoot/amplitude/period overrides.
    pub fn evaluate_with(self, t: f64, b: f64, c: f64, d: f64, params: &EasingParams) -> f64 {
        let EasingParams {
            overshoot,
            amplitude,
            period,
        } = *params;
        match self {
            Easing::BackEaseIn => f::back_ease_in(t, b, c, d, overshoot),
            Easing::BackEaseOut => f::back_ease_out(t, b, c, d, overshoot),
            Easing::BackEaseInOut => f::back_ease_in_out(t, b, c, d, overshoot),
            Easing::ElasticEaseIn => f::elastic_ease_in(t, b, c, d, amplitude, period),
            Easing::ElasticEaseOut => f::elastic_ease_out(t, b, c, d, amplitude, period),
            Easing::ElasticEaseInOut => f::elastic_ease_in_out(t, b, c, d, amplitude, period),
            other => other.evaluate(t, b, c, d),
        }
    }

    /// Whether the curve stays within `[b, b + c]` and never reverses.
    ///
    /// Back, bounce and elastic curves overshoot on purpose.
    pub fn is_monotonic(self) -> bool {
        matches!(
            self,
            Easing::Linear
                | Easing::RegularEaseIn
                | Easing::RegularEaseOut
                | Easing::RegularEaseInOut
                | Easing::CubicEaseIn
                | Easing::CubicEaseOut
                | Easing::CubicEaseInOut
                | Easing::StrongEaseIn
                | Easing::StrongEaseOut
                | Easing::StrongEaseInOut
        )
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = ParseEasingError;

    /// Accepts catalog names (`strongEaseInOut`) as well as snake_case and
    /// kebab-case spellings (`strong_ease_in_out`, `strong-ease-in-out`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|ch| *ch != '_' && *ch != '-')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        Easing::ALL
            .into_iter()
            .find(|easing| easing.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

/// Normalised form for `keyframe::ease`: `y(x) = f(x, 0, 1, 1)`.
impl keyframe::EasingFunction for Easing {
    fn y(&self, x: f64) -> f64 {
        self.evaluate(x, 0.0, 1.0, 1.0)
    }
}
