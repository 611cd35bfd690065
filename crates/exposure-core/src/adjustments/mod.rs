//! Global stop corrections — lens filters and film reciprocity failure.

pub mod filter;
pub mod global;
pub mod reciprocity;

pub use filter::FilterCorrection;
pub use global::GlobalAdjustments;
pub use reciprocity::{ReciprocityModel, ReciprocityPoints};
