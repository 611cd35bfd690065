use clap::{Args, Parser, Subcommand};

use exposure_core::ReciprocityModel;

/// Top-level parser for the `exposure` binary.
#[derive(Debug, Parser)]
#[command(name = "exposure", version, about = "Photographic exposure calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Film or sensor ISO (overrides EXPOSURE_ISO)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub iso: Option<u32>,

    /// Filter factor, e.g. 2 for one stop
    #[arg(long, global = true)]
    pub filter_factor: Option<f64>,

    /// Filter correction in stops (wins over --filter-factor)
    #[arg(long, global = true)]
    pub filter_stops: Option<f64>,

    /// Reciprocity model: none, generic, hp5, trix, acros2
    #[arg(long, global = true, value_parser = parse_reciprocity)]
    pub reciprocity: Option<ReciprocityModel>,

    /// Custom reciprocity: extra stops at 1 s (replaces --reciprocity)
    #[arg(long, global = true, conflicts_with = "reciprocity")]
    pub reciprocity_p1: Option<f64>,

    /// Custom reciprocity: extra stops at 10 s (defaults to the 1 s value)
    #[arg(long, global = true, requires = "reciprocity_p1")]
    pub reciprocity_p10: Option<f64>,

    /// Custom reciprocity: extra stops at 100 s (defaults to the 10 s value)
    #[arg(long, global = true, requires = "reciprocity_p1")]
    pub reciprocity_p100: Option<f64>,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Solve the missing value from any two of aperture, shutter and EV100
    Solve {
        /// f-number
        #[arg(short, long)]
        aperture: Option<f64>,
        /// Shutter denominator (125 = 1/125 s)
        #[arg(short, long)]
        shutter: Option<f64>,
        /// Exposure value at ISO 100
        #[arg(short, long, allow_negative_numbers = true)]
        ev: Option<f64>,
    },

    /// Sunny-16 suggestion for a lighting condition
    Sunny16 {
        /// Lighting condition label (unknown labels use Bright Sun)
        #[arg(short, long, default_value = "Bright Sun")]
        condition: String,
    },

    /// New shutter speed after an ISO change at a fixed aperture
    Iso {
        /// f-number
        #[arg(short, long)]
        aperture: f64,
        /// Shutter denominator at the metered ISO
        #[arg(short, long)]
        shutter: f64,
        /// Metered ISO
        #[arg(long)]
        from: u32,
        /// Target ISO
        #[arg(long)]
        to: u32,
    },

    /// Convert a baseline exposure to another ISO with aperture or shutter priority
    Convert {
        /// Baseline ISO
        #[arg(long)]
        from_iso: u32,
        /// Baseline f-number
        #[arg(short, long)]
        aperture: f64,
        /// Baseline shutter denominator
        #[arg(short, long)]
        shutter: f64,
        /// Target ISO
        #[arg(long)]
        to_iso: u32,
        #[command(flatten)]
        lock: LockArgs,
    },

    /// Expose for a Zone V EV and print the zone scale
    Zone {
        /// EV100 metered for Zone V
        #[arg(short, long, allow_negative_numbers = true)]
        ev: f64,
        #[command(flatten)]
        lock: LockArgs,
    },

    /// Print the Zone System offsets
    Zones {
        /// Use short labels ("Zone V" instead of "Zone V (Middle Gray)")
        #[arg(long)]
        short: bool,
    },
}

/// Exactly one of aperture or shutter is held fixed.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct LockArgs {
    /// Keep this f-number and solve the shutter
    #[arg(long)]
    pub keep_aperture: Option<f64>,
    /// Keep this shutter denominator and solve the aperture
    #[arg(long)]
    pub keep_shutter: Option<f64>,
}

fn parse_reciprocity(raw: &str) -> Result<ReciprocityModel, String> {
    ReciprocityModel::from_name(raw).ok_or_else(|| {
        format!("unknown reciprocity model '{raw}' (expected none, generic, hp5, trix, acros2)")
    })
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};
    use exposure_core::ReciprocityModel;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "exposure",
            "solve",
            "--aperture",
            "8",
            "--ev",
            "12",
            "--iso",
            "400",
            "--reciprocity",
            "trix",
        ])
        .expect("cli should parse");

        assert_eq!(cli.iso, Some(400));
        assert_eq!(cli.reciprocity, Some(ReciprocityModel::TriX));
        assert!(matches!(
            cli.command,
            Commands::Solve {
                aperture: Some(_),
                shutter: None,
                ev: Some(_)
            }
        ));
    }

    #[test]
    fn zone_requires_exactly_one_lock() {
        assert!(Cli::try_parse_from(["exposure", "zone", "--ev", "12"]).is_err());
        assert!(
            Cli::try_parse_from([
                "exposure",
                "zone",
                "--ev",
                "12",
                "--keep-aperture",
                "8",
                "--keep-shutter",
                "60",
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["exposure", "zone", "--ev", "-1", "--keep-shutter", "2"]).is_ok());
    }

    #[test]
    fn zero_iso_is_rejected() {
        assert!(Cli::try_parse_from(["exposure", "--iso", "0", "zones"]).is_err());
    }

    #[test]
    fn custom_reciprocity_points_parse() {
        let cli = Cli::try_parse_from([
            "exposure",
            "zones",
            "--reciprocity-p1",
            "0.5",
            "--reciprocity-p100",
            "2",
        ])
        .expect("cli should parse");
        assert_eq!(cli.reciprocity_p1, Some(0.5));
        assert_eq!(cli.reciprocity_p10, None);
        assert_eq!(cli.reciprocity_p100, Some(2.0));
    }

    #[test]
    fn custom_reciprocity_needs_p1_and_excludes_named_model() {
        assert!(Cli::try_parse_from(["exposure", "zones", "--reciprocity-p10", "1"]).is_err());
        assert!(
            Cli::try_parse_from([
                "exposure",
                "zones",
                "--reciprocity",
                "hp5",
                "--reciprocity-p1",
                "1",
            ])
            .is_err()
        );
    }

    #[test]
    fn unknown_reciprocity_is_rejected() {
        assert!(Cli::try_parse_from(["exposure", "--reciprocity", "portra", "zones"]).is_err());
    }
}
