//! Easing (shaping) functions
//!
//! The classic Robert Penner catalog. Every function has the signature
//! `(elapsed, start, change, duration) -> value` and is pure: the same
//! inputs always produce the same output.
//!
//! Functions are grouped by family and selected through the [`Easing`] enum,
//! which can also be resolved by name (`"Quadratic.EaseInOut"`) for
//! configuration files and command-line tools.
//!
//! The `EaseInOut` forms of [`Easing::Back`] and [`Easing::Elastic`] keep the
//! historical closed forms whose two halves do not meet exactly at the
//! midpoint. Curves are reproduced as-is so that values stay numerically
//! compatible with existing content.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};

/// Signature shared by every easing function
///
/// - `t`: time elapsed since the start, `0.0..=d`
/// - `b`: value at `t == 0`
/// - `c`: total change applied by `t == d`
/// - `d`: duration, strictly positive
pub type EasingFn = fn(t: f32, b: f32, c: f32, d: f32) -> f32;

/// Direction of an easing curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Accelerate from rest
    EaseIn,
    /// Decelerate to rest
    EaseOut,
    /// Accelerate through the first half, decelerate through the second
    EaseInOut,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::EaseIn, Variant::EaseOut, Variant::EaseInOut];

    pub fn name(self) -> &'static str {
        match self {
            Variant::EaseIn => "EaseIn",
            Variant::EaseOut => "EaseOut",
            Variant::EaseInOut => "EaseInOut",
        }
    }
}

/// A registered easing curve: a family plus its direction
///
/// `Linear` has a single form, reported as `Linear.EaseNone`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    #[default]
    Linear,
    Quadratic(Variant),
    Cubic(Variant),
    Quartic(Variant),
    Quintic(Variant),
    Sinusoidal(Variant),
    Exponential(Variant),
    Circular(Variant),
    Elastic(Variant),
    Back(Variant),
    Bounce(Variant),
}

/// Name used for the only variant of `Linear`
const EASE_NONE: &str = "EaseNone";

impl Easing {
    /// Every supported family/variant pair
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::Quadratic(Variant::EaseIn),
        Easing::Quadratic(Variant::EaseOut),
        Easing::Quadratic(Variant::EaseInOut),
        Easing::Cubic(Variant::EaseIn),
        Easing::Cubic(Variant::EaseOut),
        Easing::Cubic(Variant::EaseInOut),
        Easing::Quartic(Variant::EaseIn),
        Easing::Quartic(Variant::EaseOut),
        Easing::Quartic(Variant::EaseInOut),
        Easing::Quintic(Variant::EaseIn),
        Easing::Quintic(Variant::EaseOut),
        Easing::Quintic(Variant::EaseInOut),
        Easing::Sinusoidal(Variant::EaseIn),
        Easing::Sinusoidal(Variant::EaseOut),
        Easing::Sinusoidal(Variant::EaseInOut),
        Easing::Exponential(Variant::EaseIn),
        Easing::Exponential(Variant::EaseOut),
        Easing::Exponential(Variant::EaseInOut),
        Easing::Circular(Variant::EaseIn),
        Easing::Circular(Variant::EaseOut),
        Easing::Circular(Variant::EaseInOut),
        Easing::Elastic(Variant::EaseIn),
        Easing::Elastic(Variant::EaseOut),
        Easing::Elastic(Variant::EaseInOut),
        Easing::Back(Variant::EaseIn),
        Easing::Back(Variant::EaseOut),
        Easing::Back(Variant::EaseInOut),
        Easing::Bounce(Variant::EaseIn),
        Easing::Bounce(Variant::EaseOut),
        Easing::Bounce(Variant::EaseInOut),
    ];

    /// Resolve an easing from its family and variant names
    ///
    /// Matching ignores case, `-`, `_` and spaces, and accepts the usual short
    /// aliases (`quad`, `sine`, `expo`, `circ`, `in`, `out`, `inout`).
    /// Combinations that do not exist, such as `Linear.EaseIn`, are rejected.
    pub fn lookup(family: &str, variant: &str) -> Result<Easing> {
        let unsupported = || TweenError::UnsupportedEasing {
            family: family.to_string(),
            variant: variant.to_string(),
        };

        let variant_key = normalize(variant);
        let parsed_variant = match variant_key.as_str() {
            "easein" | "in" => Some(Variant::EaseIn),
            "easeout" | "out" => Some(Variant::EaseOut),
            "easeinout" | "inout" => Some(Variant::EaseInOut),
            "easenone" | "none" | "" => None,
            _ => return Err(unsupported()),
        };

        let build: fn(Variant) -> Easing = match normalize(family).as_str() {
            "linear" => {
                return match parsed_variant {
                    None => Ok(Easing::Linear),
                    Some(_) => Err(unsupported()),
                }
            }
            "quadratic" | "quad" => Easing::Quadratic,
            "cubic" => Easing::Cubic,
            "quartic" | "quart" => Easing::Quartic,
            "quintic" | "quint" => Easing::Quintic,
            "sinusoidal" | "sine" | "sin" => Easing::Sinusoidal,
            "exponential" | "expo" | "exp" => Easing::Exponential,
            "circular" | "circ" => Easing::Circular,
            "elastic" => Easing::Elastic,
            "back" => Easing::Back,
            "bounce" => Easing::Bounce,
            _ => return Err(unsupported()),
        };

        parsed_variant.map(build).ok_or_else(unsupported)
    }

    pub fn family_name(self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::Quadratic(_) => "Quadratic",
            Easing::Cubic(_) => "Cubic",
            Easing::Quartic(_) => "Quartic",
            Easing::Quintic(_) => "Quintic",
            Easing::Sinusoidal(_) => "Sinusoidal",
            Easing::Exponential(_) => "Exponential",
            Easing::Circular(_) => "Circular",
            Easing::Elastic(_) => "Elastic",
            Easing::Back(_) => "Back",
            Easing::Bounce(_) => "Bounce",
        }
    }

    /// Direction of the curve, `None` for `Linear`
    pub fn variant(self) -> Option<Variant> {
        match self {
            Easing::Linear => None,
            Easing::Quadratic(v)
            | Easing::Cubic(v)
            | Easing::Quartic(v)
            | Easing::Quintic(v)
            | Easing::Sinusoidal(v)
            | Easing::Exponential(v)
            | Easing::Circular(v)
            | Easing::Elastic(v)
            | Easing::Back(v)
            | Easing::Bounce(v) => Some(v),
        }
    }

    pub fn variant_name(self) -> &'static str {
        self.variant().map_or(EASE_NONE, Variant::name)
    }

    /// The function pointer backing this easing
    pub fn function(self) -> EasingFn {
        use Variant::*;
        match self {
            Easing::Linear => linear,
            Easing::Quadratic(EaseIn) => quadratic_in,
            Easing::Quadratic(EaseOut) => quadratic_out,
            Easing::Quadratic(EaseInOut) => quadratic_in_out,
            Easing::Cubic(EaseIn) => cubic_in,
            Easing::Cubic(EaseOut) => cubic_out,
            Easing::Cubic(EaseInOut) => cubic_in_out,
            Easing::Quartic(EaseIn) => quartic_in,
            Easing::Quartic(EaseOut) => quartic_out,
            Easing::Quartic(EaseInOut) => quartic_in_out,
            Easing::Quintic(EaseIn) => quintic_in,
            Easing::Quintic(EaseOut) => quintic_out,
            Easing::Quintic(EaseInOut) => quintic_in_out,
            Easing::Sinusoidal(EaseIn) => sinusoidal_in,
            Easing::Sinusoidal(EaseOut) => sinusoidal_out,
            Easing::Sinusoidal(EaseInOut) => sinusoidal_in_out,
            Easing::Exponential(EaseIn) => exponential_in,
            Easing::Exponential(EaseOut) => exponential_out,
            Easing::Exponential(EaseInOut) => exponential_in_out,
            Easing::Circular(EaseIn) => circular_in,
            Easing::Circular(EaseOut) => circular_out,
            Easing::Circular(EaseInOut) => circular_in_out,
            Easing::Elastic(EaseIn) => elastic_in,
            Easing::Elastic(EaseOut) => elastic_out,
            Easing::Elastic(EaseInOut) => elastic_in_out,
            Easing::Back(EaseIn) => back_in,
            Easing::Back(EaseOut) => back_out,
            Easing::Back(EaseInOut) => back_in_out,
            Easing::Bounce(EaseIn) => bounce_in,
            Easing::Bounce(EaseOut) => bounce_out,
            Easing::Bounce(EaseInOut) => bounce_in_out,
        }
    }

    /// Evaluate the curve at `t` seconds into a run of `d` seconds
    #[inline]
    pub fn apply(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        (self.function())(t, b, c, d)
    }

    /// Evaluate the normalized curve: `x` in `0.0..=1.0` maps to the eased
    /// fraction of the change
    pub fn sample(self, x: f32) -> f32 {
        self.apply(x.clamp(0.0, 1.0), 0.0, 1.0, 1.0)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.family_name(), self.variant_name())
    }
}

impl FromStr for Easing {
    type Err = TweenError;

    /// Parse `"Family.Variant"`; a bare family name means its `EaseNone` form
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('.') {
            Some((family, variant)) => Easing::lookup(family, variant),
            None => Easing::lookup(s.trim(), EASE_NONE),
        }
    }
}

impl TryFrom<String> for Easing {
    type Error = TweenError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Linear
// ============================================================================

pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

// ============================================================================
// Polynomial families
// ============================================================================

pub fn quadratic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t + b
}

pub fn quadratic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

pub fn quadratic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

pub fn cubic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t + b
}

pub fn cubic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

pub fn cubic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

pub fn quartic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t * t + b
}

pub fn quartic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    -c * (t * t * t * t - 1.0) + b
}

pub fn quartic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t + b;
    }
    let t = t - 2.0;
    -c / 2.0 * (t * t * t * t - 2.0) + b
}

pub fn quintic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t * t * t + b
}

pub fn quintic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t * t * t + 1.0) + b
}

pub fn quintic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t * t * t + 2.0) + b
}

// ============================================================================
// Sinusoidal
// ============================================================================

pub fn sinusoidal_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * (t / d * FRAC_PI_2).cos() + c + b
}

pub fn sinusoidal_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d * FRAC_PI_2).sin() + b
}

pub fn sinusoidal_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

// ============================================================================
// Exponential
// ============================================================================

pub fn exponential_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    c * 2f32.powf(10.0 * (t / d - 1.0)) + b
}

pub fn exponential_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == d {
        return b + c;
    }
    c * (1.0 - 2f32.powf(-10.0 * t / d)) + b
}

pub fn exponential_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2f32.powf(10.0 * (t - 1.0)) + b;
    }
    c / 2.0 * (2.0 - 2f32.powf(-10.0 * (t - 1.0))) + b
}

// ============================================================================
// Circular
// ============================================================================

pub fn circular_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

pub fn circular_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

pub fn circular_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    let t = t - 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

// ============================================================================
// Elastic
// ============================================================================

/// Period of the elastic oscillation as a fraction of the duration
const ELASTIC_PERIOD: f32 = 0.3;

pub fn elastic_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * ELASTIC_PERIOD;
    let s = p / 4.0;
    let t = t - 1.0;
    -(c * 2f32.powf(10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin()) + b
}

pub fn elastic_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * ELASTIC_PERIOD;
    let s = p / 4.0;
    c * 2f32.powf(-10.0 * t) * ((t * d - s) * (2.0 * PI) / p).sin() + c + b
}

/// Historical form: the second half scales `c + b` by `c`, so the halves
/// only agree at the endpoints.
pub fn elastic_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = d * (ELASTIC_PERIOD * 1.5);
    let s = p / 4.0;
    let t = t - 1.0;
    let wave = ((t * d - s) * (2.0 * PI) / p).sin();
    if t < 0.0 {
        return -0.5 * (c * 2f32.powf(10.0 * t) * wave) + b;
    }
    c * (2f32.powf(-10.0 * t) * wave * 0.5 + c + b)
}

// ============================================================================
// Back
// ============================================================================

/// Overshoot amount, roughly 10%
const BACK_OVERSHOOT: f32 = 1.70158;

pub fn back_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT) + b
}

pub fn back_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * ((BACK_OVERSHOOT + 1.0) * t + BACK_OVERSHOOT) + 1.0) + b
}

/// Historical form: the scaled overshoot is used for the slope but the
/// unscaled one for the offset, so the halves miss at the midpoint.
pub fn back_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let s = BACK_OVERSHOOT * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - BACK_OVERSHOOT)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + BACK_OVERSHOOT) + 2.0) + b
}

// ============================================================================
// Bounce
// ============================================================================

pub fn bounce_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984375) + b
    }
}

pub fn bounce_in(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c - bounce_out(d - t, 0.0, c, d) + b
}

pub fn bounce_in_out(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        bounce_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        bounce_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}
