//! The tween timeline state machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use tweening_easing::{Easing, EasingParams};

use crate::clock::{Clock, SystemClock};

/// Capability that writes the animated value into its owner.
pub type Setter = Box<dyn FnMut(f64)>;

/// Duration used when the caller supplies zero, a negative value or NaN.
pub const FALLBACK_DURATION: f64 = 1.0;

/// Whether a tween advances on [`Tween::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
}

/// What a timeline update did.
///
/// Returned by [`Tween::tick`] and [`Tween::set_time`] so the host loop can
/// react to completion (for example by calling [`Tween::yoyo`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The tween is stopped; nothing was written.
    Idle,
    /// Time moved within `[0, duration]`.
    Advanced,
    /// Time ran past the end of a looping tween and wrapped around.
    Wrapped,
    /// Time reached the end of a non-looping tween; playback stopped.
    Finished,
    /// A negative time was requested; the tween rewound to zero and stopped.
    Rewound,
}

/// Construction-time behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenOptions {
    /// Halve the duration passed to the constructor.
    ///
    /// Kept for parity with the tweening scripts this library replaces, which
    /// always halved the constructor duration. Durations set later through
    /// [`Tween::set_duration`] or [`Tween::continue_to`] are never halved.
    pub legacy_halved_duration: bool,
    /// Wrap around instead of stopping when time runs past the duration.
    pub looping: bool,
    /// Overrides for curves with extra parameters.
    pub params: EasingParams,
}

impl Default for TweenOptions {
    fn default() -> Self {
        Self {
            legacy_halved_duration: true,
            looping: false,
            params: EasingParams::default(),
        }
    }
}

impl TweenOptions {
    /// Options that keep the constructor duration as given.
    pub fn exact() -> Self {
        Self {
            legacy_halved_duration: false,
            ..Self::default()
        }
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_params(mut self, params: EasingParams) -> Self {
        self.params = params;
        self
    }
}

/// Interpolates one numeric property from `begin` to `finish` over time.
///
/// The host calls [`tick`](Self::tick) once per frame. Elapsed time is taken
/// from the tween's [`Clock`], so the animation stays in step with wall time
/// no matter how irregular the frame rate is.
///
/// # Example
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use tweening_core::{Easing, ManualClock, Tween, TweenOptions};
///
/// let x = Rc::new(Cell::new(0.0));
/// let clock = ManualClock::default();
/// let slot = x.clone();
/// let mut tween = Tween::with_clock(
///     clock.clone(),
///     TweenOptions::exact(),
///     move |v| slot.set(v),
///     Easing::Linear,
///     0.0,
///     100.0,
///     2.0,
/// );
///
/// tween.start();
/// clock.advance(1.0);
/// tween.tick();
/// assert_eq!(x.get(), 50.0);
/// ```
pub struct Tween<C: Clock = SystemClock> {
    setter: Setter,
    clock: C,
    easing: Easing,
    params: EasingParams,
    begin: f64,
    change: f64,
    duration: f64,
    time: f64,
    previous_time: f64,
    start_wall_time: f64,
    looping: bool,
    state: PlayState,
    position: f64,
    previous_position: f64,
}

impl Tween<SystemClock> {
    /// Create a stopped tween on the system clock with default options.
    ///
    /// Nothing is written to the property until the tween is started or
    /// positioned.
    pub fn new(
        setter: impl FnMut(f64) + 'static,
        easing: Easing,
        begin: f64,
        finish: f64,
        duration: f64,
    ) -> Self {
        Self::with_clock(
            SystemClock::new(),
            TweenOptions::default(),
            setter,
            easing,
            begin,
            finish,
            duration,
        )
    }
}

impl<C: Clock> Tween<C> {
    /// Create a stopped tween on an explicit clock.
    pub fn with_clock(
        clock: C,
        options: TweenOptions,
        setter: impl FnMut(f64) + 'static,
        easing: Easing,
        begin: f64,
        finish: f64,
        duration: f64,
    ) -> Self {
        let requested = if options.legacy_halved_duration {
            duration / 2.0
        } else {
            duration
        };

        let mut tween = Self {
            setter: Box::new(setter),
            clock,
            easing,
            params: options.params,
            begin,
            change: finish - begin,
            duration: FALLBACK_DURATION,
            time: 0.0,
            previous_time: 0.0,
            start_wall_time: 0.0,
            looping: options.looping,
            state: PlayState::Stopped,
            position: begin,
            previous_position: begin,
        };
        tween.set_duration(requested);
        tween
    }

    // ========================================================================
    // Play state
    // ========================================================================

    /// Rewind to the beginning and play.
    pub fn start(&mut self) {
        self.rewind(None);
        self.state = PlayState::Playing;
        log::debug!(
            "Tween started: {} {} -> {} over {}s",
            self.easing,
            self.begin,
            self.finish(),
            self.duration
        );
    }

    /// Pause without losing the current time.
    pub fn stop(&mut self) {
        if self.state == PlayState::Playing {
            log::debug!("Tween stopped at t={}", self.time);
        }
        self.state = PlayState::Stopped;
    }

    /// Continue playing from the current time.
    ///
    /// Time spent stopped does not count towards the animation.
    pub fn resume(&mut self) {
        self.fix_time();
        self.state = PlayState::Playing;
        log::debug!("Tween resumed at t={}", self.time);
    }

    // ========================================================================
    // Timeline
    // ========================================================================

    /// Per-frame entry point. Advances to the clock's elapsed time if playing.
    pub fn tick(&mut self) -> TickEvent {
        if self.state != PlayState::Playing {
            return TickEvent::Idle;
        }
        let elapsed = self.clock.now() - self.start_wall_time;
        log::trace!("Tween tick: elapsed={elapsed}");
        self.set_time(elapsed)
    }

    /// Move the timeline to `t` and write the resulting position.
    ///
    /// Past the end, a looping tween wraps by whole periods and keeps playing;
    /// a non-looping one clamps to the end and stops. Negative times rewind
    /// to zero.
    pub fn set_time(&mut self, t: f64) -> TickEvent {
        self.previous_time = self.time;
        if t > self.duration {
            if self.looping {
                self.time = t.rem_euclid(self.duration);
                self.fix_time();
                self.update();
                log::debug!("Tween wrapped: t={t} -> {}", self.time);
                TickEvent::Wrapped
            } else {
                self.time = self.duration;
                self.update();
                self.stop();
                log::debug!("Tween finished at {}", self.position);
                TickEvent::Finished
            }
        } else if t < 0.0 {
            self.rewind(None);
            TickEvent::Rewound
        } else {
            self.time = t;
            self.update();
            TickEvent::Advanced
        }
    }

    /// Stop and seek to `t` (or zero), clamped into `[0, duration]`.
    pub fn rewind(&mut self, t: Option<f64>) {
        self.stop();
        self.time = t.unwrap_or(0.0).clamp(0.0, self.duration);
        self.fix_time();
        self.update();
    }

    /// Seek to the end without changing the play state.
    pub fn fast_forward(&mut self) {
        self.time = self.duration;
        self.fix_time();
        self.update();
    }

    /// Write the position for the current time through the setter.
    pub fn update(&mut self) {
        let next = self.position_at(None);
        self.previous_position = self.position;
        self.position = next;
        (self.setter)(next);
    }

    /// Evaluate the curve at `t` (or the current time) without writing it.
    pub fn position_at(&self, t: Option<f64>) -> f64 {
        let t = t.unwrap_or(self.time);
        self.easing
            .evaluate_with(t, self.begin, self.change, self.duration, &self.params)
    }

    /// Anchor the wall clock so that `now - start_wall_time == time`.
    fn fix_time(&mut self) {
        self.start_wall_time = self.clock.now() - self.time;
    }

    // ========================================================================
    // Redirection
    // ========================================================================

    /// Retarget towards `finish`, starting from the current position.
    ///
    /// Because the new begin is the value last written, there is no jump.
    /// `duration` replaces the current one when given (zero or negative
    /// falls back to one second).
    pub fn continue_to(&mut self, finish: f64, duration: Option<f64>) {
        self.begin = self.position;
        self.set_finish(finish);
        if let Some(duration) = duration {
            self.set_duration(duration);
        }
        self.start();
    }

    /// Head back to `begin`, taking as long as the tween has run so far.
    ///
    /// Calling this each time the tween finishes makes it oscillate between
    /// its two end values.
    pub fn yoyo(&mut self) {
        self.continue_to(self.begin, Some(self.time));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// Move the start value, keeping the finish value where it is.
    pub fn set_begin(&mut self, begin: f64) {
        let finish = self.finish();
        self.begin = begin;
        self.change = finish - begin;
    }

    pub fn finish(&self) -> f64 {
        self.begin + self.change
    }

    pub fn set_finish(&mut self, finish: f64) {
        self.change = finish - self.begin;
    }

    pub fn change(&self) -> f64 {
        self.change
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Set the duration. Zero, negative and NaN fall back to
    /// [`FALLBACK_DURATION`].
    pub fn set_duration(&mut self, duration: f64) {
        if duration > 0.0 {
            self.duration = duration;
        } else {
            log::debug!("Tween duration {duration} coerced to {FALLBACK_DURATION}");
            self.duration = FALLBACK_DURATION;
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn previous_time(&self) -> f64 {
        self.previous_time
    }

    /// Time advanced by the last timeline update.
    pub fn time_delta(&self) -> f64 {
        self.time - self.previous_time
    }

    /// Last value written to the property.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn previous_position(&self) -> f64 {
        self.previous_position
    }

    /// Change between the last two written values.
    pub fn position_delta(&self) -> f64 {
        self.position - self.previous_position
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn easing_params(&self) -> &EasingParams {
        &self.params
    }

    pub fn set_easing_params(&mut self, params: EasingParams) {
        self.params = params;
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> fmt::Debug for Tween<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("easing", &self.easing)
            .field("begin", &self.begin)
            .field("change", &self.change)
            .field("duration", &self.duration)
            .field("time", &self.time)
            .field("looping", &self.looping)
            .field("state", &self.state)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn linear_tween(
        clock: &ManualClock,
        options: TweenOptions,
        duration: f64,
    ) -> (Tween<ManualClock>, Rc<Cell<f64>>) {
        let slot = Rc::new(Cell::new(f64::NAN));
        let sink = slot.clone();
        let tween = Tween::with_clock(
            clock.clone(),
            options,
            move |v| sink.set(v),
            Easing::Linear,
            0.0,
            100.0,
            duration,
        );
        (tween, slot)
    }

    #[test]
    fn test_new_tween_is_stopped_and_untouched() {
        let clock = ManualClock::default();
        let (tween, slot) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        assert_eq!(tween.state(), PlayState::Stopped);
        assert_eq!(tween.position(), 0.0);
        assert!(slot.get().is_nan());
    }

    #[test]
    fn test_legacy_duration_is_halved() {
        let clock = ManualClock::default();
        let (tween, _) = linear_tween(&clock, TweenOptions::default(), 2.0);
        assert_eq!(tween.duration(), 1.0);

        let (tween, _) = linear_tween(&clock, TweenOptions::exact(), 2.0);
        assert_eq!(tween.duration(), 2.0);
    }

    #[test]
    fn test_degenerate_durations_fall_back() {
        let clock = ManualClock::default();
        for bad in [0.0, -3.0, f64::NAN] {
            let (tween, _) = linear_tween(&clock, TweenOptions::default(), bad);
            assert_eq!(tween.duration(), FALLBACK_DURATION);
            let (tween, _) = linear_tween(&clock, TweenOptions::exact(), bad);
            assert_eq!(tween.duration(), FALLBACK_DURATION);
        }
    }

    #[test]
    fn test_system_clock_tween_advances() {
        let slot = Rc::new(Cell::new(f64::NAN));
        let sink = slot.clone();
        let mut tween = Tween::new(move |v| sink.set(v), Easing::Linear, 0.0, 1.0, 3600.0);

        tween.start();
        assert_eq!(tween.tick(), TickEvent::Advanced);
        assert!(slot.get() >= 0.0 && slot.get() < 0.01);
    }

    #[test]
    fn test_borrowed_clock_drives_tween() {
        let clock = ManualClock::starting_at(4.0);
        let slot = Rc::new(Cell::new(f64::NAN));
        let sink = slot.clone();
        let mut tween = Tween::with_clock(
            &clock,
            TweenOptions::exact(),
            move |v| sink.set(v),
            Easing::Linear,
            0.0,
            10.0,
            2.0,
        );

        tween.start();
        clock.advance(1.0);
        assert_eq!(tween.clock().now(), 5.0);
        assert_eq!(tween.tick(), TickEvent::Advanced);
        assert_eq!(slot.get(), 5.0);
    }

    #[test]
    fn test_tick_is_noop_when_stopped() {
        let clock = ManualClock::default();
        let (mut tween, slot) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        clock.advance(1.0);
        assert_eq!(tween.tick(), TickEvent::Idle);
        assert!(slot.get().is_nan());
        assert_eq!(tween.time(), 0.0);
    }

    #[test]
    fn test_start_writes_begin() {
        let clock = ManualClock::starting_at(10.0);
        let (mut tween, slot) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        tween.start();
        assert!(tween.is_playing());
        assert_eq!(slot.get(), 0.0);
    }

    #[test]
    fn test_set_time_records_previous_time() {
        let clock = ManualClock::default();
        let (mut tween, _) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        tween.set_time(0.5);
        tween.set_time(1.25);
        assert_eq!(tween.previous_time(), 0.5);
        assert_eq!(tween.time(), 1.25);
        assert_eq!(tween.time_delta(), 0.75);
    }

    #[test]
    fn test_negative_time_rewinds_and_stops() {
        let clock = ManualClock::default();
        let (mut tween, slot) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        tween.start();
        tween.set_time(1.0);
        assert_eq!(tween.set_time(-0.5), TickEvent::Rewound);
        assert_eq!(tween.time(), 0.0);
        assert_eq!(slot.get(), 0.0);
        assert!(!tween.is_playing());
    }

    #[test]
    fn test_rewind_clamps_into_range() {
        let clock = ManualClock::default();
        let (mut tween, slot) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        tween.rewind(Some(5.0));
        assert_eq!(tween.time(), 2.0);
        assert_eq!(slot.get(), 100.0);

        tween.rewind(Some(0.5));
        assert_eq!(slot.get(), 25.0);
    }

    #[test]
    fn test_fast_forward_keeps_play_state() {
        let clock = ManualClock::default();
        let (mut tween, slot) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        tween.start();
        tween.fast_forward();
        assert_eq!(slot.get(), 100.0);
        assert!(tween.is_playing());

        // Anchored at the end, so the next tick past it finishes
        clock.advance(0.1);
        assert_eq!(tween.tick(), TickEvent::Finished);
    }

    #[test]
    fn test_position_at_does_not_write() {
        let clock = ManualClock::default();
        let (tween, slot) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        assert_eq!(tween.position_at(Some(1.0)), 50.0);
        assert_eq!(tween.position_at(None), 0.0);
        assert!(slot.get().is_nan());
    }

    #[test]
    fn test_begin_and_finish_stay_in_sync() {
        let clock = ManualClock::default();
        let (mut tween, _) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        tween.set_finish(40.0);
        assert_eq!(tween.change(), 40.0);
        tween.set_begin(10.0);
        assert_eq!(tween.finish(), 40.0);
        assert_eq!(tween.change(), 30.0);
    }

    #[test]
    fn test_update_tracks_previous_position() {
        let clock = ManualClock::default();
        let (mut tween, _) = linear_tween(&clock, TweenOptions::exact(), 2.0);

        tween.set_time(0.5);
        tween.set_time(1.0);
        assert_eq!(tween.previous_position(), 25.0);
        assert_eq!(tween.position(), 50.0);
        assert_eq!(tween.position_delta(), 25.0);
    }

    #[test]
    fn test_easing_params_reach_the_curve() {
        let clock = ManualClock::default();
        let writes = Rc::new(RefCell::new(Vec::new()));
        let sink = writes.clone();
        let params = EasingParams {
            overshoot: Some(0.0),
            ..Default::default()
        };
        let mut tween = Tween::with_clock(
            clock,
            TweenOptions::exact().with_params(params),
            move |v| sink.borrow_mut().push(v),
            Easing::BackEaseIn,
            0.0,
            8.0,
            1.0,
        );

        // Zero overshoot makes back-in a plain cubic: 8 * 0.5^3 = 1
        tween.set_time(0.5);
        assert_eq!(*writes.borrow(), vec![1.0]);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: TweenOptions = ron::from_str("(looping: true)").unwrap();
        assert!(options.looping);
        assert!(options.legacy_halved_duration);
        assert_eq!(options.params, EasingParams::default());
    }
}
