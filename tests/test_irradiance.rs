use std::f64::consts::{FRAC_PI_2, PI};

use solar_yield::angles::deg_to_rad;
use solar_yield::irradiance::*;
use solar_yield::SolarError;

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

// ── Clear-sky term ──

#[test]
fn test_clear_sky_at_zenith() {
    assert_approx!(clear_sky_irradiance(FRAC_PI_2), 1.4883 * 0.7, 1e-12);
}

#[test]
fn test_clear_sky_zero_at_or_below_horizon() {
    assert_eq!(clear_sky_irradiance(0.0), 0.0);
    assert_eq!(clear_sky_irradiance(-0.3), 0.0);
    assert_eq!(clear_sky_irradiance(-FRAC_PI_2), 0.0);
}

#[test]
fn test_clear_sky_near_horizon_is_finite() {
    for alt in [f64::MIN_POSITIVE, 1e-300, 1e-12, 1e-6, 1e-3] {
        let s = clear_sky_irradiance(alt);
        assert!(s.is_finite() && s >= 0.0, "alt={} s={}", alt, s);
    }
    assert_eq!(clear_sky_irradiance(1e-300), 0.0);
}

#[test]
fn test_clear_sky_increases_with_altitude() {
    let mut prev = 0.0;
    for deg in 1..=90 {
        let s = clear_sky_irradiance(deg_to_rad(deg as f64));
        assert!(s > prev, "deg={} s={} prev={}", deg, s, prev);
        prev = s;
    }
}

// ── Angle of incidence ──

#[test]
fn test_cos_incidence_flat_panel_is_sin_altitude() {
    let alt = deg_to_rad(35.0);
    for az in [0.0, 1.0, PI, 5.0] {
        assert_approx!(cos_incidence(alt, az, 0.0, 0.0), alt.sin(), 1e-12);
    }
}

#[test]
fn test_cos_incidence_sun_normal_to_panel() {
    let alt = deg_to_rad(60.0);
    let c = cos_incidence(alt, PI, deg_to_rad(30.0), PI);
    assert_approx!(c, 1.0, 1e-12);
}

#[test]
fn test_cos_incidence_sun_behind_panel_clamped() {
    let alt = deg_to_rad(10.0);
    let c = cos_incidence(alt, 0.0, deg_to_rad(80.0), PI);
    assert_eq!(c, 0.0);
}

// ── Panel irradiance ──

#[test]
fn test_panel_irradiance_zero_below_horizon() {
    let alt = [-0.2, 0.0, 0.5];
    let az = [1.0, 2.0, PI];
    let s = panel_irradiance(&alt, &az, 20.0, 180.0).unwrap();
    assert_eq!(s[0], 0.0);
    assert_eq!(s[1], 0.0);
    assert!(s[2] > 0.0);
}

#[test]
fn test_panel_irradiance_facing_the_sun() {
    let alt = [deg_to_rad(60.0)];
    let az = [PI];
    let s = panel_irradiance(&alt, &az, 30.0, 180.0).unwrap();
    assert_approx!(s[0], clear_sky_irradiance(alt[0]), 1e-12);
}

#[test]
fn test_flat_panel_ignores_panel_azimuth() {
    let alt: Vec<f64> = (0..20).map(|i| deg_to_rad(-10.0 + i as f64 * 5.0)).collect();
    let az: Vec<f64> = (0..20).map(|i| i as f64 * 0.3).collect();
    let reference = panel_irradiance(&alt, &az, 0.0, 0.0).unwrap();
    for panel_az in [45.0, 90.0, 180.0, 270.0, 360.0] {
        assert_eq!(panel_irradiance(&alt, &az, 0.0, panel_az).unwrap(), reference);
    }
}

#[test]
fn test_panel_irradiance_never_negative() {
    let alt: Vec<f64> = (0..90).map(|i| deg_to_rad(-5.0 + i as f64)).collect();
    let az: Vec<f64> = (0..90).map(|i| i as f64 * 0.07).collect();
    for tilt in [0.0, 15.0, 45.0, 90.0] {
        for panel_az in [0.0, 90.0, 180.0, 270.0] {
            let s = panel_irradiance(&alt, &az, tilt, panel_az).unwrap();
            assert!(s.iter().all(|&v| v >= 0.0 && v.is_finite()), "{:?}", s);
        }
    }
}

#[test]
fn test_panel_irradiance_rejects_mismatched_lengths() {
    assert!(matches!(
        panel_irradiance(&[0.1, 0.2], &[0.0], 10.0, 0.0),
        Err(SolarError::InvalidGrid(_))
    ));
}

#[test]
fn test_panel_irradiance_rejects_bad_geometry() {
    for (tilt, az) in [(-1.0, 0.0), (91.0, 0.0), (10.0, -1.0), (10.0, 361.0), (f64::NAN, 0.0)] {
        assert!(matches!(
            panel_irradiance(&[0.1], &[0.0], tilt, az),
            Err(SolarError::InvalidPanel(_))
        ));
    }
}
