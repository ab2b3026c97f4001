//! `tweener sample`: drive a scalar tween at a fixed frame rate and print
//! every frame

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tweener_core::{Easing, LoopConfig, LoopMode, Tick, TweenConfig, Tweener};

use crate::config::{SampleFile, SamplingConfig};

const DEFAULT_FPS: u32 = 60;

/// Upper bound on sampled frames; every frame is held in memory
const MAX_FRAMES: u32 = 1_000_000;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Read the tween and sampling settings from a TOML file
    #[arg(short, long, conflicts_with_all = ["from", "to", "easing", "duration", "speed", "looping", "times"])]
    pub config: Option<PathBuf>,

    /// Start value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub from: f32,

    /// End value
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub to: f32,

    /// Easing function, e.g. "Cubic.EaseOut" or "bounce.in-out"
    #[arg(short, long, default_value = "Linear")]
    pub easing: Easing,

    /// Length of one run in seconds
    #[arg(short, long, conflicts_with = "speed")]
    pub duration: Option<f32>,

    /// Average speed in units per second; the duration follows from it
    #[arg(short, long)]
    pub speed: Option<f32>,

    /// Loop the run when it completes
    #[arg(short = 'l', long = "loop", value_enum)]
    pub looping: Option<LoopArg>,

    /// Stop looping after this many runs
    #[arg(short, long, requires = "looping")]
    pub times: Option<u32>,

    /// Frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Number of frames to sample (default: enough for every bounded run)
    #[arg(long)]
    pub frames: Option<u32>,

    /// Print frames as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LoopArg {
    FrontToBack,
    BackAndForth,
}

impl From<LoopArg> for LoopMode {
    fn from(arg: LoopArg) -> Self {
        match arg {
            LoopArg::FrontToBack => LoopMode::FrontToBack,
            LoopArg::BackAndForth => LoopMode::BackAndForth,
        }
    }
}

/// One sampled frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub frame: u32,
    pub time: f32,
    pub value: f32,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    easing: String,
    from: f32,
    to: f32,
    duration: f32,
    fps: u32,
    frames: &'a [Frame],
}

/// A fully resolved sampling job
#[derive(Debug)]
pub struct Job {
    pub from: f32,
    pub to: f32,
    pub tween: TweenConfig,
    pub sampling: SamplingConfig,
}

impl Job {
    fn from_args(args: &SampleArgs) -> Result<Self> {
        let mut job = match &args.config {
            Some(path) => {
                let file = SampleFile::load(path)?;
                info!("Loaded sample file {}", path.display());
                Job {
                    from: file.from,
                    to: file.to,
                    tween: file.tween,
                    sampling: file.sampling,
                }
            }
            None => {
                let mut tween = match args.speed {
                    Some(speed) => TweenConfig::with_speed(args.easing, speed),
                    None => TweenConfig::with_duration(args.easing, args.duration.unwrap_or(1.0)),
                };
                tween.looping = args.looping.map(|mode| LoopConfig {
                    mode: mode.into(),
                    times: args.times,
                });
                Job {
                    from: args.from,
                    to: args.to,
                    tween,
                    sampling: SamplingConfig::default(),
                }
            }
        };

        if args.fps.is_some() {
            job.sampling.fps = args.fps;
        }
        if args.frames.is_some() {
            job.sampling.frames = args.frames;
        }
        Ok(job)
    }

    fn fps(&self) -> Result<u32> {
        match self.sampling.fps.unwrap_or(DEFAULT_FPS) {
            0 => anyhow::bail!("Frame rate must be at least 1 fps"),
            fps => Ok(fps),
        }
    }

    /// Frames needed to play every run once; a single run when unbounded
    fn default_frames(&self, duration: f32, fps: u32) -> Option<u32> {
        let runs = self
            .tween
            .looping
            .and_then(|looping| looping.times)
            .unwrap_or(1)
            .max(1);
        let per_run = (duration * fps as f32).ceil();
        if per_run >= u32::MAX as f32 {
            return None;
        }
        (per_run as u32).checked_mul(runs)
    }

    /// Number of frames to sample, explicit or derived from the tween
    fn frame_count(&self, duration: f32, fps: u32) -> Result<u32> {
        let frames = match self.sampling.frames {
            Some(frames) => frames,
            None => self.default_frames(duration, fps).with_context(|| {
                format!("Too many frames needed to sample every run at {fps} fps, pass --frames")
            })?,
        };
        if frames > MAX_FRAMES {
            anyhow::bail!(
                "Cannot sample {frames} frames (at most {MAX_FRAMES}), pass a smaller --frames"
            );
        }
        Ok(frames)
    }
}

pub fn run(args: SampleArgs) -> Result<()> {
    let job = Job::from_args(&args)?;
    let fps = job.fps()?;
    let mut tweener = job
        .tween
        .build(job.from, job.to)
        .context("Failed to build tween")?;

    let frames = job.frame_count(tweener.duration(), fps)?;
    info!(
        "Sampling {} from {} to {} over {}s at {} fps",
        tweener.easing(),
        job.from,
        job.to,
        tweener.duration(),
        fps
    );

    let samples = collect_frames(&mut tweener, fps, frames);

    if args.json {
        let report = Report {
            easing: tweener.easing().to_string(),
            from: job.from,
            to: job.to,
            duration: tweener.duration(),
            fps,
            frames: &samples,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&samples);
    }

    info!("{}", tweener);
    Ok(())
}

/// Tick `tweener` `frames` times at `fps`, recording the starting value as
/// frame 0
pub fn collect_frames(tweener: &mut Tweener<f32>, fps: u32, frames: u32) -> Vec<Frame> {
    let dt = 1.0 / fps as f32;
    let mut samples = Vec::with_capacity(frames as usize + 1);
    samples.push(Frame {
        frame: 0,
        time: 0.0,
        value: *tweener.value(),
        status: "start",
    });

    for frame in 1..=frames {
        let tick = tweener.tick(dt);
        if tick == Tick::Completed {
            debug!(frame, value = *tweener.value(), "run completed");
            if let Some(looping) = tweener.looping().filter(|l| l.is_exhausted()) {
                info!("Loop finished after {} runs", looping.completions());
            }
        }
        samples.push(Frame {
            frame,
            time: frame as f32 * dt,
            value: *tweener.value(),
            status: status(tick),
        });
    }
    samples
}

fn status(tick: Tick) -> &'static str {
    match tick {
        Tick::Idle => "idle",
        Tick::Advanced => "advanced",
        Tick::Changed => "changed",
        Tick::Completed => "completed",
    }
}

fn print_table(samples: &[Frame]) {
    println!("{:>6}  {:>8}  {:>12}  status", "frame", "time", "value");
    for sample in samples {
        println!(
            "{:>6}  {:>8.3}  {:>12.4}  {}",
            sample.frame, sample.time, sample.value, sample.status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tweener_core::Variant;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: SampleArgs,
    }

    fn parse(argv: &[&str]) -> SampleArgs {
        let mut full = vec!["sample"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().args
    }

    #[test]
    fn test_collect_one_run() {
        let mut tweener = Tweener::<f32>::new(0.0, 10.0, 1.0, Easing::Linear).unwrap();
        let frames = collect_frames(&mut tweener, 4, 5);

        assert_eq!(frames.len(), 6);
        assert_eq!(frames[0].status, "start");
        assert_eq!(frames[2].value, 5.0);
        assert_eq!(frames[4].status, "completed");
        assert_eq!(frames[4].value, 10.0);
        assert_eq!(frames[5].status, "idle");
    }

    #[test]
    fn test_collect_back_and_forth() {
        let mut tweener = TweenConfig {
            looping: Some(LoopConfig {
                mode: LoopMode::BackAndForth,
                times: Some(2),
            }),
            ..TweenConfig::with_duration(Easing::Linear, 1.0)
        }
        .build(0.0_f32, 10.0)
        .unwrap();

        let frames = collect_frames(&mut tweener, 2, 4);
        let values: Vec<f32> = frames.iter().map(|f| f.value).collect();
        assert_eq!(values, vec![0.0, 5.0, 10.0, 5.0, 0.0]);
    }

    #[test]
    fn test_args_build_job() {
        let args = parse(&[
            "--from",
            "-5",
            "--to",
            "5",
            "--easing",
            "quad.in-out",
            "--speed",
            "5",
            "--loop",
            "back-and-forth",
            "--times",
            "3",
            "--fps",
            "10",
        ]);
        let job = Job::from_args(&args).unwrap();

        assert_eq!(job.from, -5.0);
        assert_eq!(job.tween.easing, Easing::Quadratic(Variant::EaseInOut));
        assert_eq!(job.tween.speed, Some(5.0));
        assert_eq!(job.fps().unwrap(), 10);
        assert_eq!(job.frame_count(2.0, 10).unwrap(), 60);
    }

    #[test]
    fn test_args_defaults() {
        let job = Job::from_args(&parse(&[])).unwrap();
        assert_eq!(job.tween.duration, Some(1.0));
        assert_eq!(job.fps().unwrap(), DEFAULT_FPS);
        assert_eq!(job.frame_count(1.0, DEFAULT_FPS).unwrap(), 60);
    }

    #[test]
    fn test_conflicting_args() {
        let argv = ["sample", "--duration", "1", "--speed", "2"];
        assert!(Harness::try_parse_from(argv).is_err());

        let argv = ["sample", "--times", "2"];
        assert!(Harness::try_parse_from(argv).is_err());

        let argv = ["sample", "--easing", "Linear.EaseIn"];
        assert!(Harness::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_huge_loop_count_is_an_error() {
        let args = parse(&[
            "--duration",
            "2",
            "--loop",
            "front-to-back",
            "--times",
            "100000000",
        ]);
        let job = Job::from_args(&args).unwrap();
        assert_eq!(job.default_frames(2.0, 60), None);
        assert!(job.frame_count(2.0, 60).is_err());

        let args = parse(&[
            "--duration",
            "2",
            "--loop",
            "back-and-forth",
            "--times",
            "4294967295",
        ]);
        let job = Job::from_args(&args).unwrap();
        assert!(job.frame_count(2.0, 60).is_err());
    }

    #[test]
    fn test_frame_limit() {
        let job = Job::from_args(&parse(&["--frames", "4000000000"])).unwrap();
        assert!(job.frame_count(1.0, 60).is_err());

        let job = Job::from_args(&parse(&["--frames", "1000000"])).unwrap();
        assert_eq!(job.frame_count(1.0, 60).unwrap(), MAX_FRAMES);

        let job = Job::from_args(&parse(&["--duration", "1e30"])).unwrap();
        assert!(job.frame_count(1e30, 60).is_err());
    }

    #[test]
    fn test_zero_fps_is_rejected() {
        let job = Job::from_args(&parse(&["--fps", "0"])).unwrap();
        assert!(job.fps().is_err());
    }
}
