//! Time sources for driving tweens
//!
//! A tween never keeps its own timer. It samples a [`Clock`] on every tick and
//! derives elapsed animation time from the difference, so any number of
//! skipped or slow frames still lands on the wall-clock-accurate position.
//! - [`SystemClock`] reads a monotonic instant (WASM-compatible)
//! - [`ManualClock`] is advanced by the host (fixed-step loops, tests)

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// Source of the current time in seconds.
///
/// Readings must be non-decreasing for the lifetime of a tween.
pub trait Clock {
    /// Current time in seconds, relative to an arbitrary fixed origin.
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Monotonic wall clock measured from its creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same reading, so one `ManualClock` can drive every tween
/// of a scene from a fixed-timestep loop.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock reading `start` seconds.
    pub fn starting_at(start: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Move the clock forward by `dt` seconds. Negative steps are ignored.
    pub fn advance(&self, dt: f64) {
        if dt > 0.0 {
            self.now.set(self.now.get() + dt);
        }
    }

    /// Jump to an absolute reading. Readings earlier than the current one are
    /// ignored to keep the clock non-decreasing.
    pub fn set(&self, now: f64) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::default();
        let other = clock.clone();

        clock.advance(0.5);
        assert_eq!(other.now(), 0.5);

        other.set(2.0);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn test_manual_clock_never_goes_backwards() {
        let clock = ManualClock::starting_at(3.0);
        clock.advance(-1.0);
        clock.set(1.0);
        assert_eq!(clock.now(), 3.0);
    }

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_rc_clock_delegates() {
        let clock = Rc::new(ManualClock::starting_at(1.25));
        assert_eq!(Clock::now(&clock), 1.25);
    }
}
