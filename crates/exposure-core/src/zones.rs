//! Ansel Adams' Zone System.
//!
//! Eleven tonal zones, Zone 0 (pure black) to Zone X (paper white), one stop
//! apart and centred on Zone V (middle gray). Each zone carries a fixed EV
//! offset relative to Zone V.
//!
//! Two label sets are published: short (`"Zone V"`) and descriptive
//! (`"Zone V (Middle Gray)"`). Presentation code picks whichever it needs.

use std::sync::LazyLock;

use indexmap::IndexMap;
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// A tonal zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    Zero,
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    IX,
    X,
}

impl Zone {
    /// Short label, e.g. `"Zone V"`.
    pub const fn short_label(&self) -> &'static str {
        match self {
            Self::Zero => "Zone 0",
            Self::I => "Zone I",
            Self::II => "Zone II",
            Self::III => "Zone III",
            Self::IV => "Zone IV",
            Self::V => "Zone V",
            Self::VI => "Zone VI",
            Self::VII => "Zone VII",
            Self::VIII => "Zone VIII",
            Self::IX => "Zone IX",
            Self::X => "Zone X",
        }
    }

    /// Descriptive label, e.g. `"Zone V (Middle Gray)"`. Key of [`zone_shift`].
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Zero => "Zone 0 (Pure Black)",
            Self::II => "Zone II (Shadow Detail)",
            Self::V => "Zone V (Middle Gray)",
            Self::VIII => "Zone VIII (Highlight Detail)",
            Self::X => "Zone X (Paper White)",
            other => other.short_label(),
        }
    }

    /// Zone number, 0 to 10.
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// EV offset from Zone V.
    pub const fn offset(&self) -> i32 {
        self.index() as i32 - 5
    }

    /// All zones, darkest first.
    pub fn all() -> &'static [Self] {
        const ALL: [Zone; 11] = [
            Zone::Zero,
            Zone::I,
            Zone::II,
            Zone::III,
            Zone::IV,
            Zone::V,
            Zone::VI,
            Zone::VII,
            Zone::VIII,
            Zone::IX,
            Zone::X,
        ];
        &ALL
    }

    /// Lookup by either label form.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|z| z.label() == label || z.short_label() == label)
    }

    /// Print swatch for the zone: an even sRGB gray step, `round(255 × i / 10)`.
    pub fn swatch(&self) -> Srgb<u8> {
        let level = (f32::from(self.index()) * 25.5).round() as u8;
        Srgb::new(level, level, level)
    }
}

static ZONE_SHIFT: LazyLock<IndexMap<&'static str, i32>> =
    LazyLock::new(|| Zone::all().iter().map(|z| (z.label(), z.offset())).collect());

static ZONE_SHIFT_SHORT: LazyLock<IndexMap<&'static str, i32>> = LazyLock::new(|| {
    Zone::all()
        .iter()
        .map(|z| (z.short_label(), z.offset()))
        .collect()
});

/// EV offsets keyed by descriptive label, Zone 0 first.
pub fn zone_shift() -> &'static IndexMap<&'static str, i32> {
    &ZONE_SHIFT
}

/// EV offsets keyed by short label, Zone 0 first.
pub fn zone_shift_short() -> &'static IndexMap<&'static str, i32> {
    &ZONE_SHIFT_SHORT
}

/// One zone placed on an absolute EV scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneStop {
    pub zone: Zone,
    pub ev: f64,
    pub swatch: Srgb<u8>,
}

impl ZoneStop {
    /// `#rrggbb` form of the swatch.
    pub fn swatch_hex(&self) -> String {
        let c = self.swatch;
        format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
    }
}

/// Place every zone relative to the EV metered for Zone V.
pub fn zone_scale(ev_zone_v: f64) -> Vec<ZoneStop> {
    Zone::all()
        .iter()
        .map(|&zone| ZoneStop {
            zone,
            ev: ev_zone_v + f64::from(zone.offset()),
            swatch: zone.swatch(),
        })
        .collect()
}
