//! Tweener
//!
//! Moves one value from a start to an end over a fixed duration, shaped by
//! an [`Easing`]. The tweener is driven entirely by the caller: each call to
//! [`Tweener::tick`] advances the elapsed time and recomputes the value.
//!
//! Two notifications are raised synchronously from inside `tick`:
//! - *changed*, with the new value, whenever the value actually moves
//! - *completed*, exactly once per run, when the elapsed time reaches the
//!   duration; at that point the value is exactly `start + change`
//!
//! The same information is returned from `tick` as a [`Tick`], so callers
//! that prefer polling can react without registering listeners.

use std::fmt;
use std::time::Duration;

use tracing::{debug, trace};

use crate::easing::Easing;
use crate::error::{validate_duration, validate_speed, Result};
use crate::looping::Loop;
use crate::values::Tweenable;

/// Handle to a registered listener, used to remove it again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Outcome of a single [`Tweener::tick`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Nothing happened: paused, already finished, or never given a start/end
    Idle,
    /// Time advanced but the value stayed the same
    Advanced,
    /// Time advanced and the value moved
    Changed,
    /// The run reached its end on this tick
    Completed,
}

/// Callback invoked with the new value whenever it changes
pub type ChangedCallback<T> = Box<dyn FnMut(&T)>;

/// Callback invoked when a run completes
pub type CompletedCallback = Box<dyn FnMut()>;

/// Time-driven interpolation of a single value
pub struct Tweener<T: Tweenable> {
    /// Value at `elapsed == 0`
    start: T,
    /// Total change applied by `elapsed == duration`
    change: T,
    value: T,
    /// Length of the run in seconds
    duration: f32,
    /// Seconds since the last reset, `0.0..=duration`
    elapsed: f32,
    running: bool,
    /// False until a start and end have been supplied
    primed: bool,
    easing: Easing,
    looping: Option<Loop>,
    changed_listeners: Vec<(ListenerId, ChangedCallback<T>)>,
    completed_listeners: Vec<(ListenerId, CompletedCallback)>,
    next_listener_id: u64,
}

impl<T: Tweenable> Tweener<T> {
    /// Create a running tweener that moves from `from` to `to` in `duration` seconds
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Result<Self> {
        let duration = validate_duration(duration)?;
        let change = T::change(&to, &from);
        debug!(%easing, ?from, ?to, duration, "created tweener");
        Ok(Self::from_parts(from, change, duration, easing, true))
    }

    /// Create a running tweener whose duration is derived from an average speed
    ///
    /// The speed is measured in units per second along the whole change, so
    /// the duration is `|to - from| / speed`. The easing still decides how
    /// fast the value actually moves at any instant.
    pub fn with_speed(from: T, to: T, easing: Easing, speed: f32) -> Result<Self> {
        let speed = validate_speed(speed)?;
        let change = T::change(&to, &from);
        let duration = validate_duration(T::magnitude(&change) / speed)?;
        debug!(%easing, ?from, ?to, speed, duration, "created tweener from speed");
        Ok(Self::from_parts(from, change, duration, easing, true))
    }

    /// Create a paused tweener with no start or end yet
    ///
    /// Ticks are ignored until [`reset_to`](Self::reset_to) or
    /// [`reset_between`](Self::reset_between) supplies the motion. Useful for
    /// declaring a tweener up front and deciding where it goes later.
    pub fn lazy(duration: f32, easing: Easing) -> Result<Self>
    where
        T: Default,
    {
        let duration = validate_duration(duration)?;
        let origin = T::default();
        let change = T::change(&origin, &origin);
        debug!(%easing, duration, "created lazy tweener");
        let mut tweener = Self::from_parts(origin, change, duration, easing, false);
        tweener.primed = false;
        Ok(tweener)
    }

    fn from_parts(start: T, change: T, duration: f32, easing: Easing, running: bool) -> Self {
        Self {
            value: start.clone(),
            start,
            change,
            duration,
            elapsed: 0.0,
            running,
            primed: true,
            easing,
            looping: None,
            changed_listeners: Vec::new(),
            completed_listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    // =========================================================================
    // Driving
    // =========================================================================

    /// Advance the run by `dt` seconds
    ///
    /// Does nothing while paused, once the run has finished, or before a lazy
    /// tweener has been given its motion. A NaN or infinite `dt` is ignored. When the elapsed time reaches the
    /// duration the value is set to the exact end, the completed listeners
    /// run, and an attached [`Loop`] gets the chance to re-arm the tweener.
    pub fn tick(&mut self, dt: f32) -> Tick {
        if !self.running || self.is_finished() {
            return Tick::Idle;
        }
        if !self.primed {
            trace!("ignoring tick, tweener has no start or end yet");
            return Tick::Idle;
        }
        if !dt.is_finite() {
            trace!(dt, "ignoring non-finite tick");
            return Tick::Idle;
        }

        self.elapsed += dt;

        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            let end = self.end();
            self.set_value(end);
            self.notify_completed();
            self.rearm();
            return Tick::Completed;
        }

        let value = T::ease(
            self.easing.function(),
            self.elapsed,
            &self.start,
            &self.change,
            self.duration,
        );
        if self.set_value(value) {
            Tick::Changed
        } else {
            Tick::Advanced
        }
    }

    /// Advance the run by a [`Duration`]
    pub fn tick_duration(&mut self, dt: Duration) -> Tick {
        self.tick(dt.as_secs_f32())
    }

    /// Resume ticking. Has no effect if already running.
    pub fn play(&mut self) {
        self.running = true;
    }

    /// Stop ticking without touching the elapsed time or the value
    pub fn pause(&mut self) {
        self.running = false;
    }

    // =========================================================================
    // Resetting
    // =========================================================================

    /// Start the same change again from wherever the value is now
    ///
    /// The current value becomes the new start, so the value does not jump.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.start = self.value.clone();
        debug!(tweener = %self, "reset");
    }

    /// Move from the current value to `to`, keeping the duration
    ///
    /// The value does not change until the next tick.
    pub fn reset_to(&mut self, to: T) {
        self.change = T::change(&to, &self.value);
        self.primed = true;
        self.reset();
    }

    /// Move from the current value to `to` over a new duration
    pub fn reset_to_over(&mut self, to: T, duration: f32) -> Result<()> {
        let duration = validate_duration(duration)?;
        self.duration = duration;
        self.reset_to(to);
        Ok(())
    }

    /// Move from the current value to `to` at an average speed
    pub fn reset_to_at_speed(&mut self, to: T, speed: f32) -> Result<()> {
        let speed = validate_speed(speed)?;
        let change = T::change(&to, &self.value);
        self.duration = validate_duration(T::magnitude(&change) / speed)?;
        self.reset_to(to);
        Ok(())
    }

    /// Replace the whole motion
    ///
    /// Unlike the other resets the value jumps to `from` immediately.
    pub fn reset_between(&mut self, from: T, to: T, duration: f32) -> Result<()> {
        let duration = validate_duration(duration)?;
        self.change = T::change(&to, &from);
        self.start = from.clone();
        self.duration = duration;
        self.elapsed = 0.0;
        self.primed = true;
        self.set_value(from);
        debug!(tweener = %self, "reset between");
        Ok(())
    }

    /// Head back towards the start of the current run
    ///
    /// Works mid-flight. Reversing twice without a reset in between returns
    /// to the point of the first reversal, not to the original end.
    pub fn reverse(&mut self) {
        self.elapsed = 0.0;
        self.change = T::change(&self.start, &self.value);
        self.start = self.value.clone();
        debug!(tweener = %self, "reversed");
    }

    /// Rewind the current run: the value jumps back to the start and the same
    /// change plays again
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        let start = self.start.clone();
        self.set_value(start);
        debug!(tweener = %self, "restarted");
    }

    // =========================================================================
    // Looping
    // =========================================================================

    /// Attach a loop policy (builder form)
    pub fn with_loop(mut self, looping: Loop) -> Self {
        self.set_loop(looping);
        self
    }

    /// Attach a loop policy, replacing any previous one
    pub fn set_loop(&mut self, looping: Loop) {
        debug!(?looping, "attached loop");
        self.looping = Some(looping);
    }

    /// Detach the loop policy, returning it
    pub fn clear_loop(&mut self) -> Option<Loop> {
        self.looping.take()
    }

    pub fn looping(&self) -> Option<&Loop> {
        self.looping.as_ref()
    }

    fn rearm(&mut self) {
        // Taken out so the policy can borrow the tweener mutably.
        if let Some(mut looping) = self.looping.take() {
            looping.on_completed(self);
            self.looping = Some(looping);
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Register a listener called with the new value whenever it changes
    pub fn on_changed<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&T) + 'static,
    {
        let id = self.next_id();
        self.changed_listeners.push((id, Box::new(callback)));
        id
    }

    /// Register a listener called once each time a run completes
    pub fn on_completed<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        let id = self.next_id();
        self.completed_listeners.push((id, Box::new(callback)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.changed_listeners.len() + self.completed_listeners.len();
        self.changed_listeners.retain(|(listener, _)| *listener != id);
        self.completed_listeners.retain(|(listener, _)| *listener != id);
        before != self.changed_listeners.len() + self.completed_listeners.len()
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        id
    }

    /// Store a new value, notifying listeners if it differs from the old one
    fn set_value(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        for (_, callback) in self.changed_listeners.iter_mut() {
            callback(&self.value);
        }
        true
    }

    fn notify_completed(&mut self) {
        for (_, callback) in self.completed_listeners.iter_mut() {
            callback();
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    /// Value the current run ends on
    pub fn end(&self) -> T {
        self.start.offset(&self.change)
    }

    pub fn change(&self) -> &T {
        &self.change
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Fraction of the run completed (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the run has reached its end and until the next reset
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// False for a lazy tweener that has not been given a start and end yet
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Use a different curve from the next tick on
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }
}

impl<T: Tweenable> fmt::Display for Tweener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Tween {:?} -> {:?} in {}s. Elapsed {:.2}s",
            self.easing,
            self.start,
            self.end(),
            self.duration,
            self.elapsed
        )
    }
}

impl<T: Tweenable> fmt::Debug for Tweener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tweener")
            .field("start", &self.start)
            .field("change", &self.change)
            .field("value", &self.value)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("running", &self.running)
            .field("primed", &self.primed)
            .field("easing", &self.easing)
            .field("looping", &self.looping)
            .finish_non_exhaustive()
    }
}
