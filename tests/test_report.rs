use solar_yield::report::*;
use solar_yield::types::{SimulationConfig, SunriseSunset};
use solar_yield::{read_measurements, simulate_day, sunrise_sunset, MeasurementOptions};

#[test]
fn test_format_energy() {
    assert_eq!(format_energy(1234.567), "Daily energy estimate: 1234.57 Wh");
    assert_eq!(format_energy(0.0), "Daily energy estimate: 0.00 Wh");
}

#[test]
fn test_summary_ends_with_energy_line() {
    let config = SimulationConfig::default();
    let profile = simulate_day(&config).unwrap();
    let sun = sunrise_sunset(&config.location, config.date).unwrap();
    let text = format_summary(&profile, Some(sun));
    assert!(text.ends_with(&format_energy(profile.energy_wh)), "{}", text);
    assert!(text.contains("Sunrise: 11:48  Sunset: 00:04 (+1 day)"), "{}", text);
    assert!(text.contains("2025-06-21"), "{}", text);
}

#[test]
fn test_summary_reports_polar_night() {
    let profile = simulate_day(&SimulationConfig::default()).unwrap();
    let text = format_summary(&profile, Some(SunriseSunset::PolarNight));
    assert!(text.contains("below the horizon all day"));
    assert!(!format_summary(&profile, None).contains("Sunrise"));
}

#[test]
fn test_table_has_one_row_per_sample() {
    let profile = simulate_day(&SimulationConfig::default()).unwrap();
    let table = format_table(&profile);
    assert_eq!(table.lines().count(), profile.grid.len() + 1);
    assert!(table.lines().nth(1).unwrap().trim_start().starts_with("05:30"));
}

#[test]
fn test_measurement_report() {
    let data = "Timestamp;AH3;LSParking\n21/06/2025 10:00;1,5;x\nbad;2,5;y\n";
    let series = read_measurements(data.as_bytes(), &MeasurementOptions::default()).unwrap();
    let text = format_measurements(&series);
    assert!(text.contains("Rows: 2 (1 with a valid timestamp)"), "{}", text);
    assert!(text.contains("AH3: 2 values"), "{}", text);
    assert!(text.contains("LSParking: no numeric values"), "{}", text);
}
