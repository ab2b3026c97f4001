//! Declarative tween settings
//!
//! Describes how a tween moves without saying what it moves, so the same
//! settings can drive scalars, vectors or colors:
//!
//! ```toml
//! easing = "Quadratic.EaseInOut"
//! duration = 1.5
//!
//! [loop]
//! mode = "back-and-forth"
//! times = 4
//! ```
//!
//! Exactly one of `duration` (seconds) or `speed` (units per second) must be
//! given. The easing name is resolved through [`Easing::lookup`], so unknown
//! names fail instead of falling back to a default curve.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::{Result, TweenError};
use crate::looping::{Loop, LoopMode};
use crate::tweener::Tweener;
use crate::values::Tweenable;

/// Settings shared by every tween built from a config
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TweenConfig {
    #[serde(default)]
    pub easing: Easing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    /// Start ticking immediately
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub looping: Option<LoopConfig>,
}

fn default_autoplay() -> bool {
    true
}

enum Timing {
    Duration(f32),
    Speed(f32),
}

/// `[loop]` table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoopConfig {
    pub mode: LoopMode,
    /// Number of runs before looping stops; unbounded when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,
}

impl LoopConfig {
    pub fn to_loop(self) -> Loop {
        let looping = Loop::new(self.mode);
        match self.times {
            Some(times) => looping.times(times),
            None => looping,
        }
    }
}

impl TweenConfig {
    /// Settings for a run of fixed length
    pub fn with_duration(easing: Easing, duration: f32) -> Self {
        Self {
            easing,
            duration: Some(duration),
            speed: None,
            autoplay: true,
            looping: None,
        }
    }

    /// Settings for a run whose length follows from an average speed
    pub fn with_speed(easing: Easing, speed: f32) -> Self {
        Self {
            easing,
            duration: None,
            speed: Some(speed),
            autoplay: true,
            looping: None,
        }
    }

    /// Parse settings from TOML text
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: TweenConfig =
            toml::from_str(source).map_err(|e| TweenError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| TweenError::Config(e.to_string()))
    }

    /// Check that the timing is given exactly once
    pub fn validate(&self) -> Result<()> {
        self.timing().map(|_| ())
    }

    fn timing(&self) -> Result<Timing> {
        match (self.duration, self.speed) {
            (Some(duration), None) => Ok(Timing::Duration(duration)),
            (None, Some(speed)) => Ok(Timing::Speed(speed)),
            (Some(_), Some(_)) => Err(TweenError::Config(
                "`duration` and `speed` are mutually exclusive".to_string(),
            )),
            (None, None) => Err(TweenError::Config(
                "one of `duration` or `speed` is required".to_string(),
            )),
        }
    }

    /// Build a tweener that moves from `from` to `to` with these settings
    pub fn build<T: Tweenable>(&self, from: T, to: T) -> Result<Tweener<T>> {
        let mut tweener = match self.timing()? {
            Timing::Duration(duration) => Tweener::new(from, to, duration, self.easing)?,
            Timing::Speed(speed) => Tweener::with_speed(from, to, self.easing, speed)?,
        };
        if !self.autoplay {
            tweener.pause();
        }
        if let Some(looping) = self.looping {
            tweener.set_loop(looping.to_loop());
        }
        Ok(tweener)
    }
}
