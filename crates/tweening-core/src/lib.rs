//! Frame-driven tweening for render loops
//!
//! This crate provides the tween state machine and its time sources:
//! - Tween timeline with start/stop/resume, looping, rewind and yoyo (`Tween`)
//! - Clock abstraction over wall time and host-driven time (`Clock`)
//!
//! The easing catalog lives in `tweening-easing` and is re-exported here.

mod clock;
mod tween;

pub use clock::{Clock, ManualClock, SystemClock};
pub use tween::{PlayState, Setter, TickEvent, Tween, TweenOptions, FALLBACK_DURATION};
pub use tweening_easing::{functions, Easing, EasingParams, ParseEasingError};
