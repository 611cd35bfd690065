//! Zone V placement: meter a subject as middle gray and lay out the scale.

use super::{ExposureSettings, Priority};
use crate::adjustments::GlobalAdjustments;
use crate::error::Result;
use crate::zones::{ZoneStop, zone_scale};

/// Exposure for a chosen Zone V EV and the resulting zone scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePlacement {
    pub settings: ExposureSettings,
    pub scale: Vec<ZoneStop>,
}

/// Expose for `ev_zone_v` with one of aperture or shutter locked.
pub fn place_zone_v(
    ev_zone_v: f64,
    iso: u32,
    lock: Priority,
    adjustments: &GlobalAdjustments,
) -> Result<ZonePlacement> {
    let settings = lock.resolve(ev_zone_v, iso, adjustments)?;
    Ok(ZonePlacement {
        settings,
        scale: zone_scale(ev_zone_v),
    })
}
