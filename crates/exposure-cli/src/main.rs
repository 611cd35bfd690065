//! Exposure — command-line front end for `exposure-core`.
//!
//! Parses inputs, resolves configuration from flags and `EXPOSURE_*`
//! environment variables, and prints the results as text.

use clap::Parser;

use exposure_core::solve::{
    Baseline, ExposureInputs, Priority, convert_shutter_for_iso, convert_with_priority,
    place_zone_v, solve_exposure,
};
use exposure_core::sunny16::sunny_16_suggestion;
use exposure_core::{zone_shift, zone_shift_short};

mod cli;
mod config;
mod output;

use cli::{Cli, Commands, LockArgs};
use config::CliConfig;

fn main() {
    if let Err(error) = run() {
        eprintln!("exposure error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = CliConfig::resolve(&cli);
    tracing::debug!(?config, "configuration resolved");

    let text = match cli.command {
        Commands::Solve {
            aperture,
            shutter,
            ev,
        } => {
            let inputs = ExposureInputs {
                aperture,
                shutter_speed: shutter,
                ev,
            };
            let (kind, settings) = solve_exposure(inputs, config.iso, &config.adjustments)?;
            output::solved(kind, &settings)
        }
        Commands::Sunny16 { condition } => {
            let suggestion = sunny_16_suggestion(config.iso, &condition, &config.adjustments)?;
            output::sunny16(config.iso, &suggestion)
        }
        Commands::Iso {
            aperture,
            shutter,
            from,
            to,
        } => {
            let seconds = convert_shutter_for_iso(aperture, shutter, from, to, &config.adjustments)?;
            output::iso_shift(aperture, to, seconds)
        }
        Commands::Convert {
            from_iso,
            aperture,
            shutter,
            to_iso,
            lock,
        } => {
            let baseline = Baseline {
                iso: from_iso,
                aperture,
                shutter_speed: shutter,
            };
            let priority = priority_from(&lock)?;
            let settings = convert_with_priority(baseline, to_iso, priority, &config.adjustments)?;
            output::converted(priority, &settings)
        }
        Commands::Zone { ev, lock } => {
            let placement = place_zone_v(ev, config.iso, priority_from(&lock)?, &config.adjustments)?;
            output::zone_placement(&placement)
        }
        Commands::Zones { short } => {
            if short {
                output::zone_table(zone_shift_short())
            } else {
                output::zone_table(zone_shift())
            }
        }
    };

    println!("{text}");
    Ok(())
}

fn priority_from(lock: &LockArgs) -> anyhow::Result<Priority> {
    match (lock.keep_aperture, lock.keep_shutter) {
        (Some(aperture), None) => Ok(Priority::Aperture(aperture)),
        (None, Some(shutter)) => Ok(Priority::Shutter(shutter)),
        _ => anyhow::bail!("pass exactly one of --keep-aperture or --keep-shutter"),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EXPOSURE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
