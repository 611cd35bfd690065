//! Filter factor ↔ stop conversion.

use serde::{Deserialize, Serialize};

/// Light loss of a lens filter, stored in stops.
///
/// A filter can be described by its factor (2× = one stop) or directly in
/// stops. Whichever is given last is authoritative and the other is derived:
///
/// ```text
/// stops  = log2(max(1, factor))
/// factor = max(1, 2^stops)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCorrection {
    stops: f64,
}

impl FilterCorrection {
    /// No filter.
    pub const NONE: Self = Self { stops: 0.0 };

    /// Correction for a filter factor. Factors below 1 (or non-finite) count as no filter.
    pub fn from_factor(factor: f64) -> Self {
        let stops = if factor.is_finite() { factor.max(1.0).log2() } else { 0.0 };
        Self { stops }
    }

    /// Correction given directly in stops.
    pub fn from_stops(stops: f64) -> Self {
        Self {
            stops: if stops.is_finite() { stops } else { 0.0 },
        }
    }

    /// Resolve a factor/stops pair, preferring explicit stops.
    pub fn resolve(factor: Option<f64>, stops: Option<f64>) -> Self {
        match (stops.filter(|s| s.is_finite()), factor) {
            (Some(stops), _) => Self::from_stops(stops),
            (None, Some(factor)) => Self::from_factor(factor),
            (None, None) => Self::NONE,
        }
    }

    pub fn stops(&self) -> f64 {
        self.stops
    }

    /// Equivalent filter factor, never below 1.
    pub fn factor(&self) -> f64 {
        self.stops.exp2().max(1.0)
    }
}
