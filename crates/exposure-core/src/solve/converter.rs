//! Keep exposure constant while changing ISO.

use serde::{Deserialize, Serialize};

use super::ExposureSettings;
use crate::adjustments::GlobalAdjustments;
use crate::error::{Result, checked_recip};
use crate::ev::{calculate_ev, convert_iso};

/// The value held fixed while the other one follows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "lock", content = "value", rename_all = "snake_case")]
pub enum Priority {
    /// Keep this f-number, solve the exposure time.
    Aperture(f64),
    /// Keep this shutter denominator, solve the aperture.
    Shutter(f64),
}

impl Priority {
    /// Derive the free value for `ev100`.
    pub(crate) fn resolve(
        self,
        ev100: f64,
        iso: u32,
        adjustments: &GlobalAdjustments,
    ) -> Result<ExposureSettings> {
        match self {
            Self::Aperture(aperture) => {
                let exposure_time = adjustments.exposure_time(aperture, ev100)?;
                ExposureSettings::new(aperture, exposure_time, ev100, iso)
            }
            Self::Shutter(shutter_speed) => {
                let aperture = adjustments.aperture(shutter_speed, ev100)?;
                ExposureSettings::new(aperture, checked_recip(shutter_speed)?, ev100, iso)
            }
        }
    }
}

/// A metered exposure to convert from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub iso: u32,
    pub aperture: f64,
    /// Shutter denominator.
    pub shutter_speed: f64,
}

/// New exposure time (seconds) after moving from `from_iso` to `to_iso` at a
/// fixed aperture.
pub fn convert_shutter_for_iso(
    aperture: f64,
    shutter_speed: f64,
    from_iso: u32,
    to_iso: u32,
    adjustments: &GlobalAdjustments,
) -> Result<f64> {
    let ev = convert_iso(calculate_ev(aperture, shutter_speed)?, from_iso, to_iso)?;
    adjustments.exposure_time(aperture, ev)
}

/// Equivalent exposure at `target_iso`, holding the value named by `priority`.
pub fn convert_with_priority(
    baseline: Baseline,
    target_iso: u32,
    priority: Priority,
    adjustments: &GlobalAdjustments,
) -> Result<ExposureSettings> {
    let ev_baseline = calculate_ev(baseline.aperture, baseline.shutter_speed)?;
    let ev_target = convert_iso(ev_baseline, baseline.iso, target_iso)?;
    priority.resolve(ev_target, target_iso, adjustments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_two_stops_faster_at_iso_400() {
        let t = convert_shutter_for_iso(8.0, 125.0, 100, 400, &GlobalAdjustments::default())
            .unwrap();
        assert!((t - 1.0 / 500.0).abs() < EPSILON);
    }

    #[test]
    fn test_same_iso_keeps_shutter() {
        let t = convert_shutter_for_iso(5.6, 60.0, 200, 200, &GlobalAdjustments::default())
            .unwrap();
        assert!((t - 1.0 / 60.0).abs() < EPSILON);
    }

    #[test]
    fn test_aperture_priority() {
        let baseline = Baseline {
            iso: 100,
            aperture: 8.0,
            shutter_speed: 125.0,
        };
        let s = convert_with_priority(
            baseline,
            400,
            Priority::Aperture(8.0),
            &GlobalAdjustments::default(),
        )
        .unwrap();
        assert_eq!(s.iso, 400);
        assert!((s.exposure_time - 1.0 / 500.0).abs() < EPSILON);
        assert!((s.ev100 - (8000.0_f64.log2() + 2.0)).abs() < EPSILON);
    }

    #[test]
    fn test_shutter_priority() {
        let baseline = Baseline {
            iso: 100,
            aperture: 8.0,
            shutter_speed: 125.0,
        };
        let s = convert_with_priority(
            baseline,
            400,
            Priority::Shutter(125.0),
            &GlobalAdjustments::default(),
        )
        .unwrap();
        assert!((s.aperture - 16.0).abs() < EPSILON);
        assert!((s.shutter_speed().unwrap() - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_baseline_iso() {
        let baseline = Baseline {
            iso: 0,
            aperture: 8.0,
            shutter_speed: 125.0,
        };
        assert_eq!(
            convert_with_priority(baseline, 400, Priority::Aperture(8.0), &GlobalAdjustments::default()),
            Err(DomainError::DivisionByZero)
        );
    }
}
