//! Tweenable value types
//!
//! A tweener never stores its end value. It keeps a start value and the
//! total change, and asks the value type how to combine the two. Scalars,
//! fixed-size vectors and colors are supported out of the box; every
//! component is eased independently with the same curve.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::easing::EasingFn;

/// Values that a [`Tweener`](crate::Tweener) can move
pub trait Tweenable: Clone + PartialEq + fmt::Debug {
    /// Change needed to go from `from` to `to`
    fn change(to: &Self, from: &Self) -> Self;

    /// Value reached by applying `change` to `self`
    fn offset(&self, change: &Self) -> Self;

    /// Value `t` seconds into a run of `d` seconds shaped by `easing`
    fn ease(easing: EasingFn, t: f32, start: &Self, change: &Self, d: f32) -> Self;

    /// Length of a change, used to derive a duration from an average speed
    fn magnitude(change: &Self) -> f32;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Tweenable for f32 {
    fn change(to: &Self, from: &Self) -> Self {
        to - from
    }

    fn offset(&self, change: &Self) -> Self {
        self + change
    }

    fn ease(easing: EasingFn, t: f32, start: &Self, change: &Self, d: f32) -> Self {
        easing(t, *start, *change, d)
    }

    fn magnitude(change: &Self) -> f32 {
        change.abs()
    }
}

// ============================================================================
// Vector Implementation
// ============================================================================

/// Points and vectors as plain arrays, e.g. `[x, y]` or `[x, y, z]`
impl<const N: usize> Tweenable for [f32; N] {
    fn change(to: &Self, from: &Self) -> Self {
        std::array::from_fn(|i| to[i] - from[i])
    }

    fn offset(&self, change: &Self) -> Self {
        std::array::from_fn(|i| self[i] + change[i])
    }

    fn ease(easing: EasingFn, t: f32, start: &Self, change: &Self, d: f32) -> Self {
        std::array::from_fn(|i| easing(t, start[i], change[i], d))
    }

    fn magnitude(change: &Self) -> f32 {
        change.iter().map(|c| c * c).sum::<f32>().sqrt()
    }
}

// ============================================================================
// Color Implementation
// ============================================================================

/// RGBA color with `f32` channels, nominally in `0.0..=1.0`
///
/// Channels are not clamped while tweening so overshooting curves such as
/// `Back` and `Elastic` behave the same as they do on scalars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({:.3}, {:.3}, {:.3}, {:.3})",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Tweenable for Color {
    fn change(to: &Self, from: &Self) -> Self {
        Color::from_array(<[f32; 4]>::change(&to.to_array(), &from.to_array()))
    }

    fn offset(&self, change: &Self) -> Self {
        Color::from_array(self.to_array().offset(&change.to_array()))
    }

    fn ease(easing: EasingFn, t: f32, start: &Self, change: &Self, d: f32) -> Self {
        Color::from_array(<[f32; 4]>::ease(
            easing,
            t,
            &start.to_array(),
            &change.to_array(),
            d,
        ))
    }

    fn magnitude(change: &Self) -> f32 {
        <[f32; 4]>::magnitude(&change.to_array())
    }
}
