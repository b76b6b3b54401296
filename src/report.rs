use std::fmt::Write;

use crate::angles::rad_to_deg;
use crate::grid::{format_clock, format_hours};
use crate::measurements::ColumnStats;
use crate::types::{DayProfile, MeasurementSeries, SunriseSunset};

pub fn format_energy(energy_wh: f64) -> String {
    format!("Daily energy estimate: {:.2} Wh", energy_wh)
}

fn optional_hour(hour: Option<f64>) -> String {
    hour.map_or_else(|| "-".to_string(), format_hours)
}

pub fn format_summary(profile: &DayProfile, sun: Option<SunriseSunset>) -> String {
    let summary = profile.summary();
    let config = &profile.config;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Location: {:.4}°, {:.4}°  Date: {}",
        config.location.latitude, config.location.longitude, config.date
    );
    let _ = writeln!(
        out,
        "Panel: tilt {:.1}°, azimuth {:.1}° (0°=N, 90°=E, 180°=S), {:.2} m² at {:.1}%",
        config.panel.tilt,
        config.panel.azimuth,
        config.spec.area_m2,
        config.spec.efficiency * 100.0
    );
    match sun {
        Some(SunriseSunset::Regular { sunrise, sunset }) => {
            let _ = writeln!(
                out,
                "Sunrise: {}  Sunset: {}",
                format_clock(sunrise),
                format_clock(sunset)
            );
        }
        Some(SunriseSunset::PolarDay) => {
            let _ = writeln!(out, "Sun stays above the horizon all day");
        }
        Some(SunriseSunset::PolarNight) => {
            let _ = writeln!(out, "Sun stays below the horizon all day");
        }
        None => {}
    }
    let _ = writeln!(
        out,
        "Daylight samples: {} of {} (first {}, last {})",
        summary.daylight_samples,
        profile.grid.len(),
        optional_hour(summary.first_daylight_hour),
        optional_hour(summary.last_daylight_hour)
    );
    let _ = writeln!(
        out,
        "Peak power: {:.1} W at {}",
        summary.peak_power_w,
        optional_hour(summary.peak_hour)
    );
    let _ = write!(out, "{}", format_energy(summary.energy_wh));
    out
}

pub fn format_table(profile: &DayProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>10} {:>10} {:>12} {:>10}",
        "time", "alt [°]", "az [°]", "POA [kW/m²]", "P [W]"
    );
    for (i, &hour) in profile.grid.hours().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>6} {:>10.2} {:>10.2} {:>12.4} {:>10.2}",
            format_hours(hour),
            rad_to_deg(profile.positions.altitude[i]),
            rad_to_deg(profile.positions.azimuth[i]),
            profile.irradiance[i],
            profile.power[i]
        );
    }
    out
}

pub fn format_measurements(series: &MeasurementSeries) -> String {
    let mut out = String::new();
    let dated = series.timestamps.iter().flatten().count();
    let _ = writeln!(out, "Rows: {} ({} with a valid timestamp)", series.len(), dated);
    if let (Some(first), Some(last)) = (
        series.timestamps.iter().flatten().min(),
        series.timestamps.iter().flatten().max(),
    ) {
        let _ = writeln!(out, "Span: {} .. {}", first, last);
    }
    for column in &series.columns {
        match column.stats() {
            Some(ColumnStats {
                count,
                min,
                max,
                mean,
            }) => {
                let _ = writeln!(
                    out,
                    "{}: {} values, min {:.3}, max {:.3}, mean {:.3}",
                    column.name, count, min, max, mean
                );
            }
            None => {
                let _ = writeln!(out, "{}: no numeric values", column.name);
            }
        }
    }
    out
}
