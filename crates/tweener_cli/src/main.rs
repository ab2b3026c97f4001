//! Tweener CLI
//!
//! Inspect easing curves and sample tweens from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tweener_core::Easing;

mod config;
mod plot;
mod sample;

#[derive(Parser)]
#[command(name = "tweener")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Easing and tweening toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every available easing function
    List,

    /// Run a tween at a fixed frame rate and print each frame
    Sample(sample::SampleArgs),

    /// Draw an easing curve
    Plot(plot::PlotArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Sample(args) => sample::run(args),
        Commands::Plot(args) => plot::run(args),
    }
}

fn cmd_list() -> Result<()> {
    debug!("{} easing functions", Easing::ALL.len());
    let mut family = "";
    for easing in Easing::ALL {
        if easing.family_name() != family {
            family = easing.family_name();
            println!("{family}");
        }
        println!("  {easing}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["tweener", "-v", "plot", "Elastic.EaseOut"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Plot(_)));

        let cli = Cli::try_parse_from(["tweener", "sample", "--json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Sample(ref args) if args.json));
    }
}
