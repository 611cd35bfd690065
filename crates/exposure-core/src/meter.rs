//! Reflected-light metering from image luminance.
//!
//! A frame's mean Rec. 709 luma is smoothed with an exponential moving
//! average and converted to EV100 relative to a calibration point. Calibrate
//! by pointing the camera at a Zone V (middle gray) target of known EV:
//!
//! ```text
//! Y     = 0.2126·R + 0.7152·G + 0.0722·B          (per pixel, 0–255)
//! Ȳₙ    = α·Y + (1 − α)·Ȳₙ₋₁                       α = 0.2
//! EV100 = EV_cal + log2(max(1e-6, Ȳ / Y_cal))
//! ```
//!
//! Frame capture is the caller's concern; this module only sees RGBA bytes.

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ev::ev_at_iso;

/// Rec. 709 luma weights for R, G and B.
pub const REC709_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// EV assigned to the calibration target when none is given.
pub const DEFAULT_EV_CAL: f64 = 10.0;

/// EMA weight of the newest sample.
pub const DEFAULT_SMOOTHING: f64 = 0.2;

/// Floor for the luma ratio so a black frame stays finite.
const MIN_LUMA_RATIO: f64 = 1e-6;

/// Luma of one gamma-encoded pixel, in 0–255.
pub fn pixel_luma(pixel: Srgb<u8>) -> f64 {
    let [wr, wg, wb] = REC709_WEIGHTS;
    wr * f64::from(pixel.red) + wg * f64::from(pixel.green) + wb * f64::from(pixel.blue)
}

/// Mean luma of a packed RGBA frame. Alpha is ignored, as is a trailing
/// partial pixel. Returns `None` for an empty frame.
pub fn frame_luma(rgba: &[u8]) -> Option<f64> {
    let (sum, count) = rgba
        .chunks_exact(4)
        .map(|px| pixel_luma(Srgb::new(px[0], px[1], px[2])))
        .fold((0.0, 0usize), |(sum, n), y| (sum + y, n + 1));

    (count > 0).then(|| sum / count as f64)
}

/// Smoothed luminance tracker with a Zone V calibration point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightMeter {
    /// EV100 of the calibration target.
    pub ev_cal: f64,
    /// EMA weight of each new sample, in (0, 1].
    pub alpha: f64,
    y_cal: Option<f64>,
    ema: Option<f64>,
}

impl Default for LightMeter {
    fn default() -> Self {
        Self {
            ev_cal: DEFAULT_EV_CAL,
            alpha: DEFAULT_SMOOTHING,
            y_cal: None,
            ema: None,
        }
    }
}

/// A calibrated meter reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeterReading {
    pub ev100: f64,
    pub ev_at_iso: f64,
}

impl LightMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calibration luma, if the meter has been calibrated.
    pub fn calibration_luma(&self) -> Option<f64> {
        self.y_cal
    }

    /// Current smoothed luma.
    pub fn smoothed_luma(&self) -> Option<f64> {
        self.ema
    }

    /// Record `luma` as Zone V at `ev_cal`.
    ///
    /// A zero or non-finite `ev_cal` falls back to [`DEFAULT_EV_CAL`]. A
    /// non-positive `luma` (no frame yet) keeps the previous calibration
    /// luma but still updates `ev_cal`. A valid luma also resets the average.
    pub fn calibrate(&mut self, ev_cal: f64, luma: f64) {
        self.ev_cal = if ev_cal.is_finite() && ev_cal != 0.0 {
            ev_cal
        } else {
            DEFAULT_EV_CAL
        };
        if luma > 0.0 {
            self.y_cal = Some(luma);
            self.ema = Some(luma);
        }
        tracing::debug!(ev_cal = self.ev_cal, y_cal = ?self.y_cal, "light meter calibrated");
    }

    /// Feed one luma sample and return the smoothed value.
    ///
    /// Non-positive or non-finite samples are skipped.
    pub fn update(&mut self, luma: f64) -> Option<f64> {
        if luma > 0.0 && luma.is_finite() {
            self.ema = Some(match self.ema {
                None => luma,
                Some(prev) => self.alpha * luma + (1.0 - self.alpha) * prev,
            });
        }
        self.ema
    }

    /// [`frame_luma`] followed by [`update`](Self::update).
    pub fn update_frame(&mut self, rgba: &[u8]) -> Option<f64> {
        match frame_luma(rgba) {
            Some(luma) => self.update(luma),
            None => self.ema,
        }
    }

    /// EV100 of the smoothed luma. `None` until calibrated.
    pub fn ev100(&self) -> Option<f64> {
        let y_cal = self.y_cal.filter(|y| *y > 0.0)?;
        let ema = self.ema?;
        Some(self.ev_cal + (ema / y_cal).max(MIN_LUMA_RATIO).log2())
    }

    /// Calibrated reading with the EV shifted to `iso`. `None` until
    /// calibrated; `iso == 0` is an error.
    pub fn reading(&self, iso: u32) -> Result<Option<MeterReading>> {
        self.ev100()
            .map(|ev100| {
                Ok(MeterReading {
                    ev100,
                    ev_at_iso: ev_at_iso(ev100, iso)?,
                })
            })
            .transpose()
    }
}
