//! Higher-level solves built on the closed-form functions — manual entry,
//! ISO conversion, and Zone V placement.

pub mod converter;
pub mod manual;
pub mod settings;
pub mod zone;

pub use converter::{Baseline, Priority, convert_shutter_for_iso, convert_with_priority};
pub use manual::{ExposureInputs, Solved, solve_exposure};
pub use settings::ExposureSettings;
pub use zone::{ZonePlacement, place_zone_v};
