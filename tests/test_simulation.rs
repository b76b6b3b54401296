use std::f64::consts::TAU;

use solar_yield::types::*;
use solar_yield::{simulate_day, sunrise_sunset, SolarError};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

/// Upper bound for one sample: zenith clear-sky term on the default panel.
const MAX_POWER_W: f64 = 1000.0 * 1.4883 * 0.7 * 1.6 * 0.18;

fn reference() -> SimulationConfig {
    SimulationConfig::default()
}

// ── Reference scenario ──

#[test]
fn test_default_config_is_reference_scenario() {
    let c = reference();
    assert_eq!(c.location.latitude, 4.6);
    assert_eq!(c.location.longitude, -74.1);
    assert_eq!(c.date.to_string(), "2025-06-21");
    assert_eq!(c.panel.tilt, 10.0);
    assert_eq!(c.panel.azimuth, 0.0);
    assert_eq!(c.spec.area_m2, 1.6);
    assert_eq!(c.spec.efficiency, 0.18);
    assert_eq!(c.grid, GridSpec { start_hour: 5.5, end_hour: 20.0, step_hours: 0.25 });
}

#[test]
fn test_reference_energy_positive_and_bounded() {
    let profile = simulate_day(&reference()).unwrap();
    assert_eq!(profile.grid.len(), 59);
    assert!(profile.energy_wh.is_finite());
    assert!(profile.energy_wh > 0.0, "energy={}", profile.energy_wh);
    assert!(profile.energy_wh < MAX_POWER_W * 14.5, "energy={}", profile.energy_wh);
}

#[test]
fn test_reference_energy_value() {
    let profile = simulate_day(&reference()).unwrap();
    assert_approx!(profile.energy_wh, 1634.5045, 1e-3);
}

#[test]
fn test_reference_altitude_has_both_signs() {
    let profile = simulate_day(&reference()).unwrap();
    assert!(profile.positions.altitude.iter().any(|&a| a < 0.0));
    assert!(profile.positions.altitude.iter().any(|&a| a > 0.0));
}

// ── Invariants ──

#[test]
fn test_night_samples_are_exactly_zero() {
    let profile = simulate_day(&reference()).unwrap();
    for (i, &alt) in profile.positions.altitude.iter().enumerate() {
        if alt <= 0.0 {
            assert_eq!(profile.irradiance[i], 0.0, "sample {}", i);
            assert_eq!(profile.power[i], 0.0, "sample {}", i);
        }
    }
}

#[test]
fn test_outputs_non_negative_and_azimuth_in_range() {
    for (lat, lon, tilt, az) in [(4.6, -74.1, 10.0, 0.0), (52.0, 13.4, 35.0, 180.0), (-33.9, 151.2, 30.0, 0.0)] {
        let mut config = reference();
        config.location = Location::new(lat, lon).unwrap();
        config.panel = PanelGeometry { tilt, azimuth: az };
        config.grid = GridSpec { start_hour: 0.0, end_hour: 24.0, step_hours: 0.25 };
        let profile = simulate_day(&config).unwrap();
        assert!(profile.irradiance.iter().all(|&v| v >= 0.0));
        assert!(profile.power.iter().all(|&v| (0.0..=MAX_POWER_W + 1e-9).contains(&v)));
        assert!(profile.positions.azimuth.iter().all(|&a| (0.0..TAU).contains(&a)));
    }
}

#[test]
fn test_energy_monotonic_in_area() {
    let mut prev = 0.0;
    for area in [0.5, 1.0, 1.6, 2.0, 3.5] {
        let mut config = reference();
        config.spec.area_m2 = area;
        let energy = simulate_day(&config).unwrap().energy_wh;
        assert!(energy >= prev, "area={} energy={} prev={}", area, energy, prev);
        prev = energy;
    }
}

#[test]
fn test_energy_monotonic_in_efficiency() {
    let mut prev = 0.0;
    for eff in [0.0, 0.05, 0.18, 0.22, 1.0] {
        let mut config = reference();
        config.spec.efficiency = eff;
        let energy = simulate_day(&config).unwrap().energy_wh;
        assert!(energy >= prev, "eff={} energy={} prev={}", eff, energy, prev);
        prev = energy;
    }
}

#[test]
fn test_flat_panel_energy_independent_of_azimuth() {
    let mut config = reference();
    config.panel.tilt = 0.0;
    let baseline = simulate_day(&config).unwrap();
    for az in [90.0, 180.0, 270.0, 360.0] {
        config.panel.azimuth = az;
        let profile = simulate_day(&config).unwrap();
        assert_eq!(profile.irradiance, baseline.irradiance);
        assert_eq!(profile.energy_wh, baseline.energy_wh);
    }
}

#[test]
fn test_zero_efficiency_yields_zero_energy() {
    let mut config = reference();
    config.spec.efficiency = 0.0;
    assert_eq!(simulate_day(&config).unwrap().energy_wh, 0.0);
}

#[test]
fn test_polar_night_yields_zero_energy() {
    let mut config = reference();
    config.location = Location::new(80.0, 0.0).unwrap();
    config.date = chrono::NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();
    let profile = simulate_day(&config).unwrap();
    assert_eq!(profile.energy_wh, 0.0);
    assert_eq!(profile.summary().daylight_samples, 0);
    assert_eq!(profile.summary().peak_hour, None);
}

// ── Validation ──

#[test]
fn test_invalid_inputs_fail_fast() {
    let mut config = reference();
    config.location.latitude = 95.0;
    assert!(matches!(simulate_day(&config), Err(SolarError::InvalidLocation(_))));

    let mut config = reference();
    config.panel.tilt = -5.0;
    assert!(matches!(simulate_day(&config), Err(SolarError::InvalidPanel(_))));

    let mut config = reference();
    config.spec.area_m2 = 0.0;
    assert!(matches!(simulate_day(&config), Err(SolarError::InvalidPanel(_))));

    let mut config = reference();
    config.grid.start_hour = 21.0;
    assert!(matches!(simulate_day(&config), Err(SolarError::InvalidGrid(_))));

    let mut config = reference();
    config.grid.step_hours = 0.0;
    assert!(matches!(simulate_day(&config), Err(SolarError::InvalidGrid(_))));

    let mut config = reference();
    config.grid.end_hour = 25.0;
    assert!(matches!(simulate_day(&config), Err(SolarError::InvalidGrid(_))));
}

// ── Summary ──

#[test]
fn test_summary_matches_profile() {
    let profile = simulate_day(&reference()).unwrap();
    let summary = profile.summary();
    assert_eq!(summary.energy_wh, profile.energy_wh);

    let max = profile.power.iter().copied().fold(0.0, f64::max);
    assert_eq!(summary.peak_power_w, max);
    let peak_hour = summary.peak_hour.unwrap();
    let idx = profile.grid.hours().iter().position(|&h| h == peak_hour).unwrap();
    assert_eq!(profile.power[idx], max);

    let daylight = profile.positions.altitude.iter().filter(|&&a| a > 0.0).count();
    assert_eq!(summary.daylight_samples, daylight);
}

#[test]
fn test_first_daylight_sample_follows_sunrise() {
    let config = reference();
    let profile = simulate_day(&config).unwrap();
    let summary = profile.summary();
    let SunriseSunset::Regular { sunrise, sunset } = sunrise_sunset(&config.location, config.date).unwrap() else {
        panic!("expected regular day");
    };
    let first = summary.first_daylight_hour.unwrap();
    assert!(first >= sunrise && first - sunrise <= config.grid.step_hours, "first={} sunrise={}", first, sunrise);
    assert!(sunset > config.grid.end_hour);
    assert_eq!(summary.last_daylight_hour, Some(config.grid.end_hour));
}
