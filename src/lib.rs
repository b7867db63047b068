//! # Tweening - per-frame parameter animation
//!
//! Interpolates numeric properties between two values over time using the
//! classic Penner easing curves, driven once per frame by a host loop.

pub mod config;
pub mod demo;

// Re-export the library crates for convenience
pub use tweening_core::{
    Clock, Easing, EasingParams, ManualClock, ParseEasingError, PlayState, Setter, SystemClock,
    TickEvent, Tween, TweenOptions, FALLBACK_DURATION,
};
pub use tweening_easing::functions;

pub use config::DemoConfig;
pub use demo::{run_headless, FrameSample, MovingObject, Sprite};
