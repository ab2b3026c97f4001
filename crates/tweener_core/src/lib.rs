//! Tweener Core
//!
//! Time-driven interpolation: move a value from a start to an end over a
//! duration, shaped by an easing curve, advanced by caller-supplied ticks.
//!
//! # Features
//!
//! - **Easing Catalog**: The full Penner set (Linear, Quadratic, Cubic,
//!   Quartic, Quintic, Sinusoidal, Exponential, Circular, Elastic, Back,
//!   Bounce) with In/Out/InOut variants, resolvable by name
//! - **Generic Tweener**: One engine for scalars, `[f32; N]` vectors and
//!   colors through the [`Tweenable`] trait
//! - **Controls**: Play, pause, reset from the current value, retarget,
//!   reverse mid-flight
//! - **Notifications**: Changed/completed listeners delivered synchronously
//!   inside `tick`, mirrored by the returned [`Tick`]
//! - **Looping**: Front-to-back or back-and-forth, forever or a fixed number
//!   of runs
//! - **Config**: Tween settings from TOML
//!
//! # Example
//!
//! ```rust
//! use tweener_core::{Easing, Tick, Tweener, Variant};
//!
//! let mut tweener =
//!     Tweener::new(0.0_f32, 100.0, 10.0, Easing::Quadratic(Variant::EaseOut)).unwrap();
//!
//! let mut ticks = 0;
//! while tweener.tick(1.0) != Tick::Completed {
//!     ticks += 1;
//! }
//! assert_eq!(ticks, 9);
//! assert_eq!(*tweener.value(), 100.0);
//! ```
//!
//! The engine never reads a clock and is not thread-safe; each tweener is
//! expected to be ticked from a single driving loop.

pub mod config;
pub mod easing;
pub mod error;
pub mod looping;
pub mod tweener;
pub mod values;

pub use config::{LoopConfig, TweenConfig};
pub use easing::{Easing, EasingFn, Variant};
pub use error::{Result, TweenError};
pub use looping::{Loop, LoopMode};
pub use tweener::{ChangedCallback, CompletedCallback, ListenerId, Tick, Tweener};
pub use values::{Color, Tweenable};
