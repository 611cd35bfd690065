//! Text rendering of calculator results.

use exposure_core::format_exposure_time;
use exposure_core::solve::{ExposureSettings, Priority, Solved, ZonePlacement};
use exposure_core::sunny16::Sunny16Suggestion;

pub fn solved(kind: Solved, s: &ExposureSettings) -> String {
    let ev_iso = format!("EV(ISO {})={:.2}", s.iso, s.ev_at_iso);
    match kind {
        Solved::Ev => format!(
            "EV100={:.2} | {ev_iso}\nKeeps: f/{}, t={}",
            s.ev100,
            s.aperture,
            format_exposure_time(s.exposure_time)
        ),
        Solved::ExposureTime => format!(
            "Solved t={} | {ev_iso}",
            format_exposure_time(s.exposure_time)
        ),
        Solved::Aperture => format!("Solved f/{:.2} | {ev_iso}", s.aperture),
    }
}

pub fn sunny16(iso: u32, s: &Sunny16Suggestion) -> String {
    format!(
        "Suggested: f/{}, t≈{} @ ISO {iso}  (EV100≈{:.1})",
        s.aperture,
        format_exposure_time(s.exposure_time),
        s.ev100
    )
}

pub fn iso_shift(aperture: f64, to_iso: u32, seconds: f64) -> String {
    format!(
        "Keep f/{aperture} → new shutter at ISO {to_iso}: {}",
        format_exposure_time(seconds)
    )
}

pub fn converted(priority: Priority, s: &ExposureSettings) -> String {
    let label = match priority {
        Priority::Aperture(_) => "Aperture Priority",
        Priority::Shutter(_) => "Shutter Priority",
    };
    format!(
        "{label}: f/{:.2}, t={} @ ISO {} (EV {:.2})",
        s.aperture,
        format_exposure_time(s.exposure_time),
        s.iso,
        s.ev100
    )
}

pub fn zone_placement(p: &ZonePlacement) -> String {
    let s = &p.settings;
    let mut out = format!(
        "Zone V → EV100={:.2} | EV(ISO {})={:.2} | f/{:.2} @ {}",
        s.ev100,
        s.iso,
        s.ev_at_iso,
        s.aperture,
        format_exposure_time(s.exposure_time)
    );
    for stop in &p.scale {
        out.push_str(&format!(
            "\n{:<10} EV {:>5.1}  {}",
            stop.zone.short_label(),
            stop.ev,
            stop.swatch_hex()
        ));
    }
    out
}

pub fn zone_table<'a>(rows: impl IntoIterator<Item = (&'a &'static str, &'a i32)>) -> String {
    rows.into_iter()
        .map(|(label, offset)| format!("{label:<30} {offset:+}"))
        .collect::<Vec<_>>()
        .join("\n")
}
