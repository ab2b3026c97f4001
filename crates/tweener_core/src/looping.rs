//! Loop control
//!
//! A [`Loop`] is attached to a [`Tweener`] and re-arms it every time a run
//! completes, either indefinitely or for a fixed number of runs. It keeps no
//! clock of its own; it only reacts to completions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tweener::Tweener;
use crate::values::Tweenable;

/// How a completed run is re-armed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopMode {
    /// Jump back to the start and play the same run again
    FrontToBack,
    /// Play the run backwards, then forwards again, alternating
    BackAndForth,
}

/// Loop policy for a [`Tweener`]
///
/// ```rust
/// use tweener_core::{Easing, Loop, Tweener};
///
/// let mut tweener = Tweener::new(0.0_f32, 100.0, 4.0, Easing::Linear)
///     .unwrap()
///     .with_loop(Loop::back_and_forth().times(2));
///
/// tweener.tick(4.0);
/// assert_eq!(*tweener.value(), 100.0);
/// tweener.tick(4.0);
/// assert_eq!(*tweener.value(), 0.0);
/// assert!(tweener.looping().unwrap().is_exhausted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loop {
    mode: LoopMode,
    /// Runs left before looping stops, `None` for unbounded
    remaining: Option<u32>,
    completions: u32,
}

impl Loop {
    pub fn new(mode: LoopMode) -> Self {
        Self {
            mode,
            remaining: None,
            completions: 0,
        }
    }

    /// Replay the same run from its start on every completion
    pub fn front_to_back() -> Self {
        Self::new(LoopMode::FrontToBack)
    }

    /// Reverse direction on every completion
    pub fn back_and_forth() -> Self {
        Self::new(LoopMode::BackAndForth)
    }

    /// Stop after `runs` completed runs, counting the one in progress
    ///
    /// The tweener is left at the end of its last run. The run in progress
    /// always completes, so `0` behaves as `1`.
    pub fn times(mut self, runs: u32) -> Self {
        self.remaining = Some(runs.max(1));
        self
    }

    pub fn mode(&self) -> LoopMode {
        self.mode
    }

    /// Runs left, `None` when unbounded
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Completions seen since the loop was attached
    pub fn completions(&self) -> u32 {
        self.completions
    }

    /// True once a bounded loop has stopped re-arming
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// React to a completed run. Returns true if the tweener was re-armed.
    pub(crate) fn on_completed<T: Tweenable>(&mut self, tweener: &mut Tweener<T>) -> bool {
        self.completions = self.completions.saturating_add(1);

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                debug!(completions = self.completions, "loop exhausted");
                return false;
            }
        }

        match self.mode {
            LoopMode::FrontToBack => tweener.restart(),
            LoopMode::BackAndForth => tweener.reverse(),
        }
        debug!(mode = ?self.mode, remaining = ?self.remaining, "loop re-armed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{Easing, Variant};
    use crate::tweener::Tick;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tweener() -> Tweener<f32> {
        Tweener::new(0.0, 100.0, 4.0, Easing::Linear).unwrap()
    }

    #[test]
    fn test_front_to_back_loops_forever() {
        let mut tweener = tweener().with_loop(Loop::front_to_back());
        for _ in 0..5 {
            tweener.tick(2.0);
            assert!(*tweener.value() > 0.0);
            assert_eq!(tweener.tick(2.0), Tick::Completed);
            assert_eq!(*tweener.value(), 0.0);
        }
        assert_eq!(tweener.looping().unwrap().completions(), 5);
        assert!(!tweener.looping().unwrap().is_exhausted());
    }

    #[test]
    fn test_front_to_back_bounded() {
        let mut tweener = tweener().with_loop(Loop::front_to_back().times(3));
        for _ in 0..3 {
            tweener.tick(2.0);
            assert!(*tweener.value() > 0.0);
            tweener.tick(2.0);
        }

        let changed = Rc::new(Cell::new(false));
        let c = changed.clone();
        tweener.on_changed(move |_| c.set(true));
        assert_eq!(tweener.tick(2.0), Tick::Idle);
        assert!(!changed.get());
        assert_eq!(*tweener.value(), 100.0);
        assert!(tweener.looping().unwrap().is_exhausted());
    }

    #[test]
    fn test_back_and_forth_loops_forever() {
        let mut tweener = tweener().with_loop(Loop::back_and_forth());
        for _ in 0..5 {
            tweener.tick(2.0);
            assert!(*tweener.value() > 0.0);
            tweener.tick(2.0);
            assert_eq!(*tweener.value(), 100.0);
            tweener.tick(2.0);
            assert!(*tweener.value() < 100.0);
            tweener.tick(2.0);
            assert_eq!(*tweener.value(), 0.0);
        }
    }

    #[test]
    fn test_back_and_forth_bounded() {
        let mut tweener = tweener().with_loop(Loop::back_and_forth().times(4));
        let completions = Rc::new(Cell::new(0));
        let c = completions.clone();
        tweener.on_completed(move || c.set(c.get() + 1));

        for _ in 0..4 {
            tweener.tick(2.0);
            tweener.tick(2.0);
        }
        assert_eq!(completions.get(), 4);
        assert_eq!(*tweener.value(), 0.0);

        let changed = Rc::new(Cell::new(false));
        let c = changed.clone();
        tweener.on_changed(move |_| c.set(true));
        for _ in 0..3 {
            tweener.tick(2.0);
        }
        assert!(!changed.get());
        assert_eq!(completions.get(), 4);
    }

    #[test]
    fn test_single_run_does_not_loop() {
        let mut tweener = tweener().with_loop(Loop::front_to_back().times(1));
        tweener.tick(4.0);
        assert_eq!(*tweener.value(), 100.0);
        assert!(tweener.is_finished());
        assert_eq!(tweener.looping().unwrap().remaining(), Some(0));
    }

    #[test]
    fn test_zero_runs_counts_as_one() {
        let looping = Loop::front_to_back().times(0);
        assert_eq!(looping.remaining(), Some(1));
        assert!(!looping.is_exhausted());

        let mut tweener = tweener().with_loop(looping);
        assert_eq!(tweener.tick(4.0), Tick::Completed);
        assert_eq!(*tweener.value(), 100.0);
        assert!(tweener.looping().unwrap().is_exhausted());
        assert_eq!(tweener.tick(4.0), Tick::Idle);
    }

    #[test]
    fn test_completion_count_saturates() {
        let mut looping = Loop::front_to_back();
        looping.completions = u32::MAX - 1;
        let mut tweener = tweener().with_loop(looping);
        tweener.tick(4.0);
        tweener.tick(4.0);
        assert_eq!(tweener.looping().unwrap().completions(), u32::MAX);
        assert_eq!(*tweener.value(), 0.0);
    }

    #[test]
    fn test_loop_attached_mid_run() {
        let mut tweener = tweener();
        tweener.tick(1.0);
        tweener.set_loop(Loop::back_and_forth().times(2));
        tweener.tick(3.0);
        assert_eq!(*tweener.value(), 100.0);
        tweener.tick(4.0);
        assert_eq!(*tweener.value(), 0.0);
        assert!(tweener.is_finished());
    }

    #[test]
    fn test_loop_with_curved_easing_returns_to_exact_start() {
        let mut tweener =
            Tweener::<f32>::new(3.0, 17.0, 1.0, Easing::Sinusoidal(Variant::EaseInOut))
                .unwrap()
                .with_loop(Loop::back_and_forth());
        for _ in 0..2 {
            while tweener.tick(0.1) != Tick::Completed {}
        }
        assert_eq!(*tweener.value(), 3.0);
    }

    #[test]
    fn test_clear_loop() {
        let mut tweener = tweener().with_loop(Loop::front_to_back());
        let looping = tweener.clear_loop();
        assert_eq!(looping.map(|l| l.mode()), Some(LoopMode::FrontToBack));
        tweener.tick(4.0);
        assert!(tweener.is_finished());
        assert_eq!(*tweener.value(), 100.0);
    }

    #[test]
    fn test_loop_on_lazy_tweener() {
        let mut tweener = Tweener::<f32>::lazy(2.0, Easing::Linear)
            .unwrap()
            .with_loop(Loop::front_to_back());
        tweener.reset_between(10.0, 20.0, 2.0).unwrap();
        tweener.play();
        assert_eq!(tweener.tick(2.0), Tick::Completed);
        assert_eq!(*tweener.value(), 10.0);
    }
}
