//! Runtime configuration for the calculator.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `EXPOSURE_ISO` | Film/sensor ISO (positive integer) |
//! | `EXPOSURE_FILTER_FACTOR` | Filter factor, e.g. `2` for one stop |
//! | `EXPOSURE_FILTER_STOPS` | Filter correction in stops (wins over the factor) |
//! | `EXPOSURE_RECIPROCITY` | `none`, `generic`, `hp5`, `trix` or `acros2` |
//! | `EXPOSURE_RECIPROCITY_P1` | Custom curve: extra stops at 1 s (wins over the named model) |
//! | `EXPOSURE_RECIPROCITY_P10` | Custom curve: extra stops at 10 s |
//! | `EXPOSURE_RECIPROCITY_P100` | Custom curve: extra stops at 100 s |
//!
//! Invalid values are logged and ignored. Command-line flags override the
//! environment.

use exposure_core::{FilterCorrection, GlobalAdjustments, ReciprocityModel};

use crate::cli::Cli;

/// Default film ISO.
const DEFAULT_ISO: u32 = 100;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CliConfig {
    /// Film or sensor ISO.
    pub iso: u32,
    /// Filter and reciprocity corrections.
    pub adjustments: GlobalAdjustments,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            iso: DEFAULT_ISO,
            adjustments: GlobalAdjustments::default(),
        }
    }
}

impl CliConfig {
    /// Defaults, then `EXPOSURE_*` environment variables, then explicit flags.
    pub fn resolve(cli: &Cli) -> Self {
        resolve_with(cli, |key| std::env::var(key).ok())
    }
}

fn resolve_with<F>(cli: &Cli, lookup: F) -> CliConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = load_config_from(lookup);
    if let Some(iso) = cli.iso {
        config.iso = iso;
    }
    if cli.filter_factor.is_some() || cli.filter_stops.is_some() {
        config.adjustments.filter = FilterCorrection::resolve(cli.filter_factor, cli.filter_stops);
    }
    if let Some(model) = cli.reciprocity {
        config.adjustments.reciprocity = model;
    }
    if let Some(p1) = cli.reciprocity_p1 {
        config.adjustments.reciprocity =
            ReciprocityModel::custom(p1, cli.reciprocity_p10, cli.reciprocity_p100);
    }
    config
}

fn load_config_from<F>(lookup: F) -> CliConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = CliConfig::default();

    if let Some(raw) = lookup("EXPOSURE_ISO") {
        match raw.trim().parse::<u32>() {
            Ok(iso) if iso > 0 => config.iso = iso,
            _ => tracing::warn!(value = %raw, "ignoring invalid EXPOSURE_ISO"),
        }
    }

    let factor = parse_finite(&lookup, "EXPOSURE_FILTER_FACTOR");
    let stops = parse_finite(&lookup, "EXPOSURE_FILTER_STOPS");
    config.adjustments.filter = FilterCorrection::resolve(factor, stops);

    if let Some(raw) = lookup("EXPOSURE_RECIPROCITY") {
        match ReciprocityModel::from_name(&raw) {
            Some(model) => config.adjustments.reciprocity = model,
            None => tracing::warn!(value = %raw, "ignoring unknown EXPOSURE_RECIPROCITY"),
        }
    }

    if let Some(p1) = parse_finite(&lookup, "EXPOSURE_RECIPROCITY_P1") {
        config.adjustments.reciprocity = ReciprocityModel::custom(
            p1,
            parse_finite(&lookup, "EXPOSURE_RECIPROCITY_P10"),
            parse_finite(&lookup, "EXPOSURE_RECIPROCITY_P100"),
        );
    }

    config
}

fn parse_finite<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring non-numeric value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> CliConfig {
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        load_config_from(|key| env.get(key).map(|v| v.to_string()))
    }

    fn resolve(args: &[&str], pairs: &[(&str, &str)]) -> CliConfig {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("cli should parse");
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        resolve_with(&cli, |key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.iso, 100);
        assert_eq!(config.adjustments, GlobalAdjustments::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = load(&[
            ("EXPOSURE_ISO", "400"),
            ("EXPOSURE_FILTER_FACTOR", "4"),
            ("EXPOSURE_RECIPROCITY", "HP5"),
        ]);
        assert_eq!(config.iso, 400);
        assert!((config.adjustments.filter.stops() - 2.0).abs() < 1e-12);
        assert_eq!(config.adjustments.reciprocity, ReciprocityModel::Hp5);
    }

    #[test]
    fn test_filter_stops_win_over_factor() {
        let config = load(&[("EXPOSURE_FILTER_FACTOR", "8"), ("EXPOSURE_FILTER_STOPS", "0.5")]);
        assert_eq!(config.adjustments.filter.stops(), 0.5);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let config = load(&[
            ("EXPOSURE_ISO", "0"),
            ("EXPOSURE_FILTER_FACTOR", "lots"),
            ("EXPOSURE_RECIPROCITY", "portra"),
        ]);
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_custom_reciprocity_from_env() {
        let config = load(&[
            ("EXPOSURE_RECIPROCITY", "hp5"),
            ("EXPOSURE_RECIPROCITY_P1", "0.5"),
            ("EXPOSURE_RECIPROCITY_P100", "2"),
        ]);
        assert_eq!(
            config.adjustments.reciprocity,
            ReciprocityModel::custom(0.5, None, Some(2.0))
        );
    }

    #[test]
    fn test_env_applies_without_flags() {
        let config = resolve(&["exposure", "zones"], &[("EXPOSURE_ISO", "800")]);
        assert_eq!(config.iso, 800);
    }

    #[test]
    fn test_flags_override_env() {
        let config = resolve(
            &["exposure", "zones", "--iso", "200", "--reciprocity", "trix"],
            &[("EXPOSURE_ISO", "800"), ("EXPOSURE_RECIPROCITY", "acros2")],
        );
        assert_eq!(config.iso, 200);
        assert_eq!(config.adjustments.reciprocity, ReciprocityModel::TriX);
    }

    #[test]
    fn test_filter_factor_flag_replaces_env_stops() {
        let config = resolve(
            &["exposure", "zones", "--filter-factor", "4"],
            &[("EXPOSURE_FILTER_STOPS", "0.5")],
        );
        assert!((config.adjustments.filter.stops() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_reciprocity_flags_override_env_model() {
        let config = resolve(
            &["exposure", "zones", "--reciprocity-p1", "1", "--reciprocity-p10", "1.5"],
            &[("EXPOSURE_RECIPROCITY", "hp5")],
        );
        assert_eq!(
            config.adjustments.reciprocity,
            ReciprocityModel::custom(1.0, Some(1.5), None)
        );
    }
}
