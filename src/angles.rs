use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate};

use crate::error::SolarError;
use crate::grid::validate_hours;
use crate::types::{Location, SolarPositions, SunriseSunset};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Below this `cos(altitude)` the sun is treated as being at the zenith.
const ZENITH_COS_EPSILON: f64 = 1e-12;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, SolarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| SolarError::InvalidDate {
        input: input.to_string(),
    })
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

/// Simplified local solar time: one hour offset plus 15° of longitude per hour,
/// with no equation-of-time term.
pub fn local_solar_time(hour: f64, longitude: f64) -> f64 {
    hour - 1.0 + longitude / DEGREES_PER_HOUR
}

/// Hour angle in degrees, zero at local solar noon and positive in the afternoon.
pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let sin_alt = declination.sin() * latitude.sin()
        + declination.cos() * latitude.cos() * hour_angle.cos();
    sin_alt.clamp(-1.0, 1.0).asin()
}

/// Azimuth in radians clockwise from north, normalized to `[0, 2π)`.
///
/// The acos branch is resolved by the sign of the hour angle: afternoon
/// positions mirror to the western half. At the zenith `cos(altitude)` vanishes
/// and the raw angle is taken as 0.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64, altitude: f64) -> f64 {
    let cos_alt = altitude.cos();
    let raw = if cos_alt.abs() < ZENITH_COS_EPSILON {
        0.0
    } else {
        let cos_az = (declination.sin() * latitude.cos()
            - declination.cos() * latitude.sin() * hour_angle.cos())
            / cos_alt;
        cos_az.clamp(-1.0, 1.0).acos()
    };
    let az = if hour_angle > 0.0 { TAU - raw } else { raw };
    normalize_angle(az)
}

pub fn sun_angles_at(latitude_rad: f64, declination_rad: f64, longitude: f64, hour: f64) -> (f64, f64) {
    let lst = local_solar_time(hour, longitude);
    let hra = deg_to_rad(hour_angle(lst));
    let alt = solar_altitude(latitude_rad, declination_rad, hra);
    let az = solar_azimuth(latitude_rad, declination_rad, hra, alt);
    (alt, az)
}

pub fn solar_position(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    hours: &[f64],
) -> Result<SolarPositions, SolarError> {
    Location::new(latitude, longitude)?;
    validate_hours(hours)?;

    let n = day_of_year(date);
    let dec = deg_to_rad(solar_declination(n));
    let lat = deg_to_rad(latitude);

    let (altitude, azimuth) = hours
        .iter()
        .map(|&hour| sun_angles_at(lat, dec, longitude, hour))
        .unzip();
    Ok(SolarPositions { altitude, azimuth })
}

/// Clock hours (same convention as the time grid) where the model altitude
/// crosses zero. Far from the grid's reference meridian these fall outside
/// 0..24; `format_clock` wraps them for display.
pub fn sunrise_sunset(location: &Location, date: NaiveDate) -> Result<SunriseSunset, SolarError> {
    location.validate()?;
    let lat_rad = deg_to_rad(location.latitude);
    let decl_rad = deg_to_rad(solar_declination(day_of_year(date)));
    let cos_h = -lat_rad.tan() * decl_rad.tan();

    if cos_h >= 1.0 {
        return Ok(SunriseSunset::PolarNight);
    }
    if cos_h <= -1.0 {
        return Ok(SunriseSunset::PolarDay);
    }
    let half_day_hours = rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR;
    let solar_noon = 13.0 - location.longitude / DEGREES_PER_HOUR;
    Ok(SunriseSunset::Regular {
        sunrise: solar_noon - half_day_hours,
        sunset: solar_noon + half_day_hours,
    })
}
