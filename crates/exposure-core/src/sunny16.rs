//! Sunny-16 exposure guide.
//!
//! In bright sun the correct exposure is f/16 at a shutter of 1/ISO. Dimmer
//! conditions keep the shutter and open the aperture.
//!
//! Conditions are keyed by their display label. An unrecognised label is not
//! an error: it falls back to the Bright Sun setting.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::adjustments::GlobalAdjustments;
use crate::error::{Result, checked_recip};
use crate::ev::calculate_ev;

/// Scene brightness categories of the Sunny-16 guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightingCondition {
    BrightSun,
    SlightOvercast,
    Overcast,
    HeavyOvercast,
    OpenShadeSunset,
}

impl LightingCondition {
    /// Display label, also the lookup key of [`sunny_16_guide`].
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BrightSun => "Bright Sun",
            Self::SlightOvercast => "Slight Overcast",
            Self::Overcast => "Overcast",
            Self::HeavyOvercast => "Heavy Overcast",
            Self::OpenShadeSunset => "Open Shade/Sunset",
        }
    }

    /// Recommended f-number.
    pub const fn aperture(&self) -> f64 {
        match self {
            Self::BrightSun => 16.0,
            Self::SlightOvercast => 11.0,
            Self::Overcast => 8.0,
            Self::HeavyOvercast => 5.6,
            Self::OpenShadeSunset => 4.0,
        }
    }

    /// All conditions, brightest first.
    pub fn all() -> &'static [Self] {
        const ALL: [LightingCondition; 5] = [
            LightingCondition::BrightSun,
            LightingCondition::SlightOvercast,
            LightingCondition::Overcast,
            LightingCondition::HeavyOvercast,
            LightingCondition::OpenShadeSunset,
        ];
        &ALL
    }

    /// Exact-label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }
}

static GUIDE: LazyLock<IndexMap<&'static str, f64>> = LazyLock::new(|| {
    LightingCondition::all()
        .iter()
        .map(|c| (c.label(), c.aperture()))
        .collect()
});

/// Label → aperture table, brightest first.
pub fn sunny_16_guide() -> &'static IndexMap<&'static str, f64> {
    &GUIDE
}

/// Suggested `(aperture, shutter)` for a lighting condition.
///
/// The shutter is returned as the fraction `1 / iso` (seconds), so ISO 100
/// gives `(16.0, 0.01)` in bright sun. Unknown conditions use the Bright Sun
/// aperture.
///
/// # Errors
/// `iso == 0` → [`DomainError::DivisionByZero`](crate::DomainError::DivisionByZero).
pub fn sunny_16_settings(iso: u32, condition: &str) -> Result<(f64, f64)> {
    let shutter = checked_recip(f64::from(iso))?;
    let aperture = match GUIDE.get(condition) {
        Some(&aperture) => aperture,
        None => {
            tracing::debug!(condition, "unknown lighting condition, using Bright Sun");
            LightingCondition::BrightSun.aperture()
        }
    };
    Ok((aperture, shutter))
}

/// A Sunny-16 recommendation with stop corrections applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sunny16Suggestion {
    /// Recommended f-number.
    pub aperture: f64,
    /// Exposure time in seconds after filter and reciprocity corrections.
    pub exposure_time: f64,
    /// EV100 of the uncorrected guide setting.
    pub ev100: f64,
}

/// Sunny-16 setting refined through `adjustments`.
///
/// The guide's aperture and 1/ISO shutter define the EV; the exposure time is
/// then re-solved at that aperture so filters and reciprocity lengthen it.
pub fn sunny_16_suggestion(
    iso: u32,
    condition: &str,
    adjustments: &GlobalAdjustments,
) -> Result<Sunny16Suggestion> {
    let (aperture, _) = sunny_16_settings(iso, condition)?;
    let ev100 = calculate_ev(aperture, f64::from(iso))?;
    let exposure_time = adjustments.exposure_time(aperture, ev100)?;
    Ok(Sunny16Suggestion {
        aperture,
        exposure_time,
        ev100,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;
    use crate::adjustments::{FilterCorrection, ReciprocityModel};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_bright_sun_iso_100() {
        assert_eq!(sunny_16_settings(100, "Bright Sun"), Ok((16.0, 1.0 / 100.0)));
    }

    #[test]
    fn test_unknown_condition_falls_back_to_bright_sun() {
        assert_eq!(sunny_16_settings(100, "Nonexistent"), Ok((16.0, 1.0 / 100.0)));
        assert_eq!(sunny_16_settings(400, ""), Ok((16.0, 1.0 / 400.0)));
    }

    #[test]
    fn test_every_condition_is_in_the_guide() {
        let guide = sunny_16_guide();
        assert_eq!(guide.len(), 5);
        for c in LightingCondition::all() {
            assert_eq!(sunny_16_settings(200, c.label()), Ok((c.aperture(), 1.0 / 200.0)));
            assert_eq!(guide[c.label()], c.aperture());
        }
        assert_eq!(guide.get_index(4), Some((&"Open Shade/Sunset", &4.0)));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(LightingCondition::from_label("Overcast"), Some(LightingCondition::Overcast));
        assert_eq!(LightingCondition::from_label("overcast"), None);
        assert_eq!(sunny_16_settings(100, "overcast"), Ok((16.0, 0.01)));
    }

    #[test]
    fn test_zero_iso_is_rejected() {
        assert_eq!(sunny_16_settings(0, "Bright Sun"), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn test_suggestion_without_adjustments_keeps_one_over_iso() {
        let s = sunny_16_suggestion(125, "Bright Sun", &GlobalAdjustments::default()).unwrap();
        assert_eq!(s.aperture, 16.0);
        assert!((s.exposure_time - 1.0 / 125.0).abs() < EPSILON);
        assert!((s.ev100 - (256.0_f64 * 125.0).log2()).abs() < EPSILON);
    }

    #[test]
    fn test_suggestion_with_filter() {
        let adj = GlobalAdjustments::new(FilterCorrection::from_factor(4.0), ReciprocityModel::None);
        let s = sunny_16_suggestion(100, "Overcast", &adj).unwrap();
        assert_eq!(s.aperture, 8.0);
        assert!((s.exposure_time - 4.0 / 100.0).abs() < EPSILON);
    }
}
