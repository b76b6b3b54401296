use crate::error::SolarError;
use crate::grid::validate_hours;
use crate::types::PanelSpec;

pub const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Panel output in W from plane-of-array irradiance in kW/m².
pub fn panel_production(
    irradiance: &[f64],
    area_m2: f64,
    efficiency: f64,
) -> Result<Vec<f64>, SolarError> {
    PanelSpec {
        area_m2,
        efficiency,
    }
    .validate()?;
    Ok(irradiance
        .iter()
        .map(|&s| (WATTS_PER_KILOWATT * s * area_m2 * efficiency).max(0.0))
        .collect())
}

/// Forces output to exactly 0 wherever the sun is on or below the horizon.
/// Returns the number of samples that were changed.
pub fn zero_night_output(power: &mut [f64], altitude: &[f64]) -> Result<usize, SolarError> {
    if power.len() != altitude.len() {
        return Err(SolarError::InvalidGrid(format!(
            "power has {} samples but altitude has {}",
            power.len(),
            altitude.len()
        )));
    }
    let mut changed = 0;
    for (p, &alt) in power.iter_mut().zip(altitude) {
        if alt <= 0.0 {
            if *p != 0.0 {
                changed += 1;
            }
            *p = 0.0;
        }
    }
    Ok(changed)
}

/// Trapezoidal integral of `power` (W) over `hours`, in Wh.
pub fn integrate_energy(power: &[f64], hours: &[f64]) -> Result<f64, SolarError> {
    validate_hours(hours)?;
    if power.len() != hours.len() {
        return Err(SolarError::InvalidGrid(format!(
            "power has {} samples but the grid has {}",
            power.len(),
            hours.len()
        )));
    }
    Ok(power
        .windows(2)
        .zip(hours.windows(2))
        .fold(0.0, |acc, (p, h)| acc + 0.5 * (p[0] + p[1]) * (h[1] - h[0])))
}
