//! Tweener error types

use thiserror::Error;

/// Errors raised when a tween is built or reconfigured with bad parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweenError {
    /// Duration was zero, negative or not finite
    #[error("Invalid duration: {0}s (must be finite and greater than zero)")]
    InvalidDuration(f32),

    /// Speed was zero, negative or not finite
    #[error("Invalid speed: {0} (must be finite and greater than zero)")]
    InvalidSpeed(f32),

    /// No easing is registered under this family/variant pair
    #[error("Unsupported easing function: {family}.{variant}")]
    UnsupportedEasing { family: String, variant: String },

    /// Tween settings could not be parsed or were contradictory
    #[error("Invalid tween config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TweenError>;

/// Check that a duration can be used as the length of a run
pub(crate) fn validate_duration(duration: f32) -> Result<f32> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(TweenError::InvalidDuration(duration))
    }
}

/// Check that an average speed can be turned into a duration
pub(crate) fn validate_speed(speed: f32) -> Result<f32> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(TweenError::InvalidSpeed(speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_validation() {
        assert_eq!(validate_duration(1.5), Ok(1.5));
        assert_eq!(validate_duration(0.0), Err(TweenError::InvalidDuration(0.0)));
        assert_eq!(
            validate_duration(-2.0),
            Err(TweenError::InvalidDuration(-2.0))
        );
        assert!(validate_duration(f32::INFINITY).is_err());
        assert!(validate_duration(f32::NAN).is_err());
    }

    #[test]
    fn test_speed_validation() {
        assert_eq!(validate_speed(10.0), Ok(10.0));
        assert_eq!(validate_speed(0.0), Err(TweenError::InvalidSpeed(0.0)));
        assert!(validate_speed(-1.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = TweenError::UnsupportedEasing {
            family: "Linear".to_string(),
            variant: "EaseIn".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported easing function: Linear.EaseIn");
    }
}
