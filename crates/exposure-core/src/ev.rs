//! Closed-form exposure value relationships.
//!
//! Everything revolves around EV100, the exposure value at ISO 100:
//!
//! ```text
//! EV = log2(N² / t)            N = f-number, t = exposure time in seconds
//!    = log2(N² · S)            S = shutter denominator, t = 1/S
//! ```
//!
//! # Shutter conventions
//! [`calculate_ev`] and [`ev_to_aperture`] take the shutter as a *denominator*
//! (125 means 1/125 s). [`ev_to_shutter`] returns `N² / 2^EV`, which is the
//! exposure *time* in seconds. Callers relying on either form must not invert
//! a value twice; use [`exposure_time_to_denominator`] and
//! [`denominator_to_exposure_time`] to move between them.

use crate::error::{
    DomainError, Result, checked_log2, checked_recip, checked_sqrt, require_positive,
};

/// ISO sensitivity that EV values are referenced to.
pub const REFERENCE_ISO: u32 = 100;

/// Compute EV from an f-number and a shutter denominator.
///
/// ```text
/// EV = log2(aperture² / (1 / shutter_speed))
/// ```
///
/// # Errors
/// - `shutter_speed == 0` → [`DomainError::DivisionByZero`]
/// - `aperture <= 0` or negative shutter → [`DomainError::NonPositiveLogarithm`]
pub fn calculate_ev(aperture: f64, shutter_speed: f64) -> Result<f64> {
    let exposure_time = checked_recip(shutter_speed)?;
    // Squaring hides the sign of a negative f-number.
    if aperture < 0.0 {
        return Err(DomainError::NonPositiveLogarithm(aperture));
    }
    checked_log2(aperture * aperture / exposure_time)
}

/// Shift an EV to the equivalent value at another ISO.
///
/// ```text
/// new_ev = ev + log2(to_iso / from_iso)
/// ```
///
/// Doubling the ISO adds exactly one stop. This models an equivalent-exposure
/// adjustment, not a change in exposure.
pub fn convert_iso(ev: f64, from_iso: u32, to_iso: u32) -> Result<f64> {
    if from_iso == 0 {
        return Err(DomainError::DivisionByZero);
    }
    let ratio = f64::from(to_iso) / f64::from(from_iso);
    Ok(ev + checked_log2(ratio)?)
}

/// Exposure time for an EV with the aperture held fixed.
///
/// ```text
/// t = aperture² / 2^ev
/// ```
///
/// The result is in **seconds** (the reciprocal of the denominator accepted by
/// [`calculate_ev`]). At f/8 and EV 12.966 this returns `0.008`, i.e. 1/125 s.
pub fn ev_to_shutter(ev: f64, aperture: f64) -> Result<f64> {
    let aperture = require_positive("aperture", aperture)?;
    Ok(aperture * aperture / ev.exp2())
}

/// Aperture for an EV with the shutter denominator held fixed.
///
/// ```text
/// N = sqrt(2^ev · (1 / shutter_speed))
/// ```
pub fn ev_to_aperture(ev: f64, shutter_speed: f64) -> Result<f64> {
    let exposure_time = checked_recip(shutter_speed)?;
    checked_sqrt(ev.exp2() * exposure_time)
}

/// Pass-through for a directly entered EV.
///
/// Lets callers route "EV was specified" through the same interface as the
/// derived values.
pub const fn ev_to_ev(ev: f64) -> f64 {
    ev
}

/// EV as seen at `iso`, given the ISO 100 value.
pub fn ev_at_iso(ev100: f64, iso: u32) -> Result<f64> {
    convert_iso(ev100, REFERENCE_ISO, iso)
}

/// EV100 back from a value referenced to `iso`.
pub fn ev100_from_iso(ev_iso: f64, iso: u32) -> Result<f64> {
    convert_iso(ev_iso, iso, REFERENCE_ISO)
}

/// Seconds → shutter denominator (`0.008` → `125`).
pub fn exposure_time_to_denominator(seconds: f64) -> Result<f64> {
    checked_recip(seconds)
}

/// Shutter denominator → seconds (`125` → `0.008`).
pub fn denominator_to_exposure_time(shutter_speed: f64) -> Result<f64> {
    checked_recip(shutter_speed)
}

/// Render an exposure time the way a camera dial shows it.
///
/// One second and longer prints with millisecond precision (`"2.000s"`),
/// shorter times print as a rounded fraction (`"1/125"`).
pub fn format_exposure_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return format!("{seconds}s");
    }
    if seconds >= 1.0 {
        format!("{seconds:.3}s")
    } else {
        format!("1/{}", (1.0 / seconds).round())
    }
}
