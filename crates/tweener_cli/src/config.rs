//! Sample file handling
//!
//! A sample file describes one scalar tween and how to sample it:
//!
//! ```toml
//! from = 0.0
//! to = 100.0
//!
//! [tween]
//! easing = "Quadratic.EaseInOut"
//! duration = 2.0
//!
//! [tween.loop]
//! mode = "back-and-forth"
//! times = 3
//!
//! [sampling]
//! fps = 30
//! frames = 180
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tweener_core::TweenConfig;

/// Contents of a sample file
#[derive(Debug, Deserialize, Serialize)]
pub struct SampleFile {
    pub from: f32,
    pub to: f32,
    pub tween: TweenConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// How often and for how long to tick the tween
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct SamplingConfig {
    /// Ticks per second
    #[serde(default)]
    pub fps: Option<u32>,
    /// Number of ticks; defaults to one full run
    #[serde(default)]
    pub frames: Option<u32>,
}

impl SampleFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Sample file {} does not exist", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: SampleFile = toml::from_str(content)?;
        file.tween.validate()?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweener_core::{Easing, LoopMode, Variant};

    #[test]
    fn test_parse_sample_file() {
        let file = SampleFile::parse(
            r#"
            from = -10.0
            to = 10.0

            [tween]
            easing = "Cubic.EaseOut"
            duration = 0.5

            [tween.loop]
            mode = "front-to-back"

            [sampling]
            fps = 20
            "#,
        )
        .unwrap();

        assert_eq!(file.from, -10.0);
        assert_eq!(file.tween.easing, Easing::Cubic(Variant::EaseOut));
        assert_eq!(file.tween.looping.unwrap().mode, LoopMode::FrontToBack);
        assert_eq!(file.sampling.fps, Some(20));
        assert_eq!(file.sampling.frames, None);
    }

    #[test]
    fn test_sampling_is_optional() {
        let file = SampleFile::parse(
            r#"
            from = 0.0
            to = 1.0

            [tween]
            speed = 2.0
            "#,
        )
        .unwrap();
        assert!(file.sampling.fps.is_none());
    }

    #[test]
    fn test_tween_timing_is_checked() {
        let err = SampleFile::parse(
            r#"
            from = 0.0
            to = 1.0

            [tween]
            easing = "Linear"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn test_missing_file() {
        assert!(SampleFile::load(Path::new("/definitely/not/here.toml")).is_err());
    }
}
