//! Easing equations for tweening
//!
//! This crate provides the pure interpolation curves used by tweens:
//! - Penner easing functions with the `(t, b, c, d)` signature (`functions`)
//! - A named catalog of those functions (`Easing`, `EasingParams`)
//!
//! Every function is stateless and deterministic.

mod catalog;
pub mod functions;

pub use catalog::{Easing, EasingFn, EasingParams, ParseEasingError};
pub use functions::DEFAULT_OVERSHOOT;
