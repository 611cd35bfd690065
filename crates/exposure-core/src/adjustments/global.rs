//! Combined stop corrections and the solves that honour them.

use serde::{Deserialize, Serialize};

use super::{FilterCorrection, ReciprocityModel};
use crate::error::{Result, checked_recip};
use crate::ev::{ev_to_aperture, ev_to_shutter};

/// Shortest exposure time fed to the reciprocity curve.
const MIN_EXPOSURE_SECONDS: f64 = 1e-6;
/// Iteration cap for the reciprocity-aware shutter solve.
const MAX_ITERATIONS: usize = 15;
/// Convergence tolerance in seconds.
const TOLERANCE_SECONDS: f64 = 1e-4;

/// Every stop correction applied on top of the metered EV.
///
/// The default is the identity: no filter, no reciprocity failure, and every
/// solve reduces exactly to the closed-form functions in [`crate::ev`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalAdjustments {
    /// Lens filter light loss.
    #[serde(default)]
    pub filter: FilterCorrection,
    /// Film reciprocity behaviour.
    #[serde(default)]
    pub reciprocity: ReciprocityModel,
}

impl GlobalAdjustments {
    pub fn new(filter: FilterCorrection, reciprocity: ReciprocityModel) -> Self {
        Self { filter, reciprocity }
    }

    /// Total stops of extra exposure for an exposure of `seconds`.
    pub fn total_stops(&self, seconds: f64) -> f64 {
        self.filter.stops() + self.reciprocity.stops(seconds.max(MIN_EXPOSURE_SECONDS))
    }

    /// Effective EV100 once filter and reciprocity losses are taken out.
    ///
    /// ```text
    /// ev_eff = ev100 − (filter_stops + reciprocity_stops(t))
    /// ```
    pub fn apply_to_ev(&self, ev100: f64, seconds: f64) -> f64 {
        ev100 - self.total_stops(seconds)
    }

    /// Exposure time in seconds at `aperture`, including corrections.
    ///
    /// Reciprocity depends on the time being solved for, so the time is
    /// refined by fixed-point iteration until successive estimates differ by
    /// less than 0.1 ms, giving up after 15 rounds with the last estimate.
    pub fn exposure_time(&self, aperture: f64, ev100: f64) -> Result<f64> {
        let mut t = ev_to_shutter(ev100, aperture)?;
        for iteration in 0..MAX_ITERATIONS {
            let next = ev_to_shutter(self.apply_to_ev(ev100, t), aperture)?;
            if (next - t).abs() < TOLERANCE_SECONDS {
                tracing::trace!(iteration, seconds = next, "shutter solve converged");
                return Ok(next);
            }
            t = next;
        }
        tracing::debug!(
            aperture,
            ev100,
            seconds = t,
            "shutter solve hit the iteration cap without converging"
        );
        Ok(t)
    }

    /// Aperture for a shutter denominator, using that shutter's reciprocity.
    pub fn aperture(&self, shutter_speed: f64, ev100: f64) -> Result<f64> {
        let seconds = checked_recip(shutter_speed)?;
        ev_to_aperture(self.apply_to_ev(ev100, seconds), shutter_speed)
    }
}
