//! Exposure Core — photographic exposure math.
//!
//! Closed-form relationships between aperture, shutter speed, exposure value
//! and ISO, the Sunny-16 guide, the Zone System scale, and a luminance light
//! meter. Pure functions with no I/O; every operation is recomputed from its
//! inputs.

pub mod adjustments;
pub mod error;
pub mod ev;
pub mod meter;
pub mod solve;
pub mod sunny16;
pub mod zones;

// Re-exports for convenience.
pub use adjustments::{FilterCorrection, GlobalAdjustments, ReciprocityModel};
pub use error::{DomainError, Result, SolveError};
pub use ev::{
    calculate_ev, convert_iso, ev_at_iso, ev_to_aperture, ev_to_ev, ev_to_shutter,
    ev100_from_iso, format_exposure_time,
};
pub use meter::{LightMeter, MeterReading, frame_luma};
pub use solve::{ExposureInputs, ExposureSettings, Priority, solve_exposure};
pub use sunny16::{LightingCondition, sunny_16_settings};
pub use zones::{Zone, zone_shift, zone_shift_short};
