use crate::angles::deg_to_rad;
use crate::error::SolarError;
use crate::types::PanelGeometry;

pub const CLEAR_SKY_SCALE: f64 = 1.4883;
pub const ATTENUATION_BASE: f64 = 0.7;
pub const AIR_MASS_EXPONENT: f64 = -0.678;

/// Clear-sky irradiance in kW/m² for a sun altitude in radians.
pub fn clear_sky_irradiance(altitude: f64) -> f64 {
    if altitude <= 0.0 {
        return 0.0;
    }
    let s = CLEAR_SKY_SCALE * ATTENUATION_BASE.powf(altitude.sin().powf(AIR_MASS_EXPONENT));
    if s.is_finite() {
        s.max(0.0)
    } else {
        0.0
    }
}

pub fn cos_incidence(altitude: f64, azimuth: f64, tilt: f64, panel_azimuth: f64) -> f64 {
    let cos_theta =
        altitude.sin() * tilt.cos() + altitude.cos() * tilt.sin() * (azimuth - panel_azimuth).cos();
    if cos_theta.is_nan() {
        return 0.0;
    }
    cos_theta.clamp(0.0, 1.0)
}

/// Plane-of-array irradiance in kW/m² for aligned altitude/azimuth series
/// (radians) and a panel tilt and azimuth given in degrees.
pub fn panel_irradiance(
    altitude: &[f64],
    azimuth: &[f64],
    tilt: f64,
    panel_azimuth: f64,
) -> Result<Vec<f64>, SolarError> {
    PanelGeometry {
        tilt,
        azimuth: panel_azimuth,
    }
    .validate()?;
    if altitude.len() != azimuth.len() {
        return Err(SolarError::InvalidGrid(format!(
            "altitude has {} samples but azimuth has {}",
            altitude.len(),
            azimuth.len()
        )));
    }

    let tilt = deg_to_rad(tilt);
    let panel_azimuth = deg_to_rad(panel_azimuth);
    Ok(altitude
        .iter()
        .zip(azimuth)
        .map(|(&alt, &az)| {
            if alt <= 0.0 {
                return 0.0;
            }
            clear_sky_irradiance(alt) * cos_incidence(alt, az, tilt, panel_azimuth)
        })
        .collect())
}
