//! A fully resolved exposure.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ev::{ev_at_iso, exposure_time_to_denominator};

/// Aperture, time and EV that belong together, plus the EV at the film ISO.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureSettings {
    /// f-number.
    pub aperture: f64,
    /// Exposure time in seconds.
    pub exposure_time: f64,
    /// Exposure value at ISO 100.
    pub ev100: f64,
    /// Film or sensor ISO.
    pub iso: u32,
    /// `ev100` shifted to `iso`.
    pub ev_at_iso: f64,
}

impl ExposureSettings {
    pub(crate) fn new(aperture: f64, exposure_time: f64, ev100: f64, iso: u32) -> Result<Self> {
        Ok(Self {
            aperture,
            exposure_time,
            ev100,
            iso,
            ev_at_iso: ev_at_iso(ev100, iso)?,
        })
    }

    /// Shutter as a 1/x denominator.
    pub fn shutter_speed(&self) -> Result<f64> {
        exposure_time_to_denominator(self.exposure_time)
    }
}
