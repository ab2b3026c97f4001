//! `tweener plot`: draw an easing curve as a sideways bar chart

use anyhow::Result;
use clap::Args;
use tweener_core::Easing;

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Easing function to draw
    pub easing: Easing,

    /// Number of samples, one per row
    #[arg(short, long, default_value_t = 21, value_parser = clap::value_parser!(u32).range(2..))]
    pub rows: u32,

    /// Width of the widest bar in characters
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
}

pub fn run(args: PlotArgs) -> Result<()> {
    println!("{}", args.easing);
    for line in render(args.easing, args.rows, args.width) {
        println!("{line}");
    }
    Ok(())
}

/// Render `rows` samples of the normalized curve
///
/// Bars are scaled between the lowest and highest point of the curve, with
/// 0 and 1 always in range, so overshooting curves stay readable.
pub fn render(easing: Easing, rows: u32, width: u32) -> Vec<String> {
    let last = rows.saturating_sub(1).max(1) as f32;
    let samples: Vec<(f32, f32)> = (0..rows)
        .map(|i| {
            let x = i as f32 / last;
            (x, easing.sample(x))
        })
        .collect();

    let (min, max) = samples
        .iter()
        .fold((0.0_f32, 1.0_f32), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let span = max - min;

    samples
        .into_iter()
        .map(|(x, y)| {
            let len = ((y - min) / span * width as f32).round() as usize;
            format!("{x:>5.2} {y:>8.4} |{}", "█".repeat(len))
        })
        .collect()
}
