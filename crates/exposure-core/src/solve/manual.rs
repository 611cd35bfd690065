//! Manual entry: any two of aperture, shutter and EV100 give the third.

use serde::{Deserialize, Serialize};

use super::ExposureSettings;
use crate::adjustments::GlobalAdjustments;
use crate::error::{SolveError, checked_recip};
use crate::ev::calculate_ev;

/// Values the user has entered. `None` means "solve for this".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExposureInputs {
    /// f-number.
    pub aperture: Option<f64>,
    /// Shutter denominator (125 means 1/125 s).
    pub shutter_speed: Option<f64>,
    /// Exposure value at ISO 100.
    pub ev: Option<f64>,
}

impl ExposureInputs {
    /// Number of values present.
    pub fn known(&self) -> usize {
        [self.aperture, self.shutter_speed, self.ev]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

/// Which value the solver derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solved {
    Ev,
    ExposureTime,
    Aperture,
}

/// Solve the missing exposure value.
///
/// - aperture + shutter → EV100 (a supplied EV is ignored)
/// - EV + aperture → exposure time, with filter and reciprocity corrections
/// - EV + shutter → aperture, with the shutter's corrections
///
/// `iso` only affects the reported `ev_at_iso`.
pub fn solve_exposure(
    inputs: ExposureInputs,
    iso: u32,
    adjustments: &GlobalAdjustments,
) -> Result<(Solved, ExposureSettings), SolveError> {
    let known = inputs.known();
    if known < 2 {
        return Err(SolveError::NotEnoughInputs { known });
    }

    let (solved, settings) = match inputs {
        ExposureInputs {
            aperture: Some(aperture),
            shutter_speed: Some(shutter_speed),
            ..
        } => {
            let ev100 = calculate_ev(aperture, shutter_speed)?;
            let exposure_time = checked_recip(shutter_speed)?;
            (
                Solved::Ev,
                ExposureSettings::new(aperture, exposure_time, ev100, iso)?,
            )
        }
        ExposureInputs {
            aperture: Some(aperture),
            ev: Some(ev100),
            ..
        } => {
            let exposure_time = adjustments.exposure_time(aperture, ev100)?;
            (
                Solved::ExposureTime,
                ExposureSettings::new(aperture, exposure_time, ev100, iso)?,
            )
        }
        ExposureInputs {
            shutter_speed: Some(shutter_speed),
            ev: Some(ev100),
            ..
        } => {
            let aperture = adjustments.aperture(shutter_speed, ev100)?;
            let exposure_time = checked_recip(shutter_speed)?;
            (
                Solved::Aperture,
                ExposureSettings::new(aperture, exposure_time, ev100, iso)?,
            )
        }
        _ => return Err(SolveError::NotEnoughInputs { known }),
    };

    tracing::debug!(?solved, ev100 = settings.ev100, "manual exposure solved");
    Ok((solved, settings))
}
