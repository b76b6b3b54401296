use tracing::{debug, info};

use crate::angles::solar_position;
use crate::error::SolarError;
use crate::grid::TimeGrid;
use crate::irradiance::panel_irradiance;
use crate::production::{integrate_energy, panel_production, zero_night_output};
use crate::types::{DayProfile, DaySummary, SimulationConfig};

/// Runs solar position, irradiance, production and integration for one day.
///
/// Every input is validated before any computation starts.
pub fn simulate_day(config: &SimulationConfig) -> Result<DayProfile, SolarError> {
    config.location.validate()?;
    config.panel.validate()?;
    config.spec.validate()?;
    let grid = TimeGrid::from_spec(&config.grid)?;

    debug!(
        latitude = config.location.latitude,
        longitude = config.location.longitude,
        date = %config.date,
        samples = grid.len(),
        "computing solar position"
    );
    let positions = solar_position(
        config.location.latitude,
        config.location.longitude,
        config.date,
        grid.hours(),
    )?;

    let irradiance = panel_irradiance(
        &positions.altitude,
        &positions.azimuth,
        config.panel.tilt,
        config.panel.azimuth,
    )?;

    let mut power = panel_production(&irradiance, config.spec.area_m2, config.spec.efficiency)?;
    let clamped = zero_night_output(&mut power, &positions.altitude)?;
    if clamped > 0 {
        debug!(clamped, "zeroed night-time output samples");
    }

    ensure_finite("altitude", &positions.altitude, &grid)?;
    ensure_finite("azimuth", &positions.azimuth, &grid)?;
    ensure_finite("irradiance", &irradiance, &grid)?;
    ensure_finite("power", &power, &grid)?;

    let energy_wh = integrate_energy(&power, grid.hours())?;
    info!(energy_wh, "daily energy estimated");

    Ok(DayProfile {
        config: config.clone(),
        grid,
        positions,
        irradiance,
        power,
        energy_wh,
    })
}

fn ensure_finite(series: &'static str, values: &[f64], grid: &TimeGrid) -> Result<(), SolarError> {
    grid.check_aligned(series, values)?;
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SolarError::NumericDegenerate {
            series,
            index,
            hour: grid.hours()[index],
        }),
        None => Ok(()),
    }
}

impl DayProfile {
    pub fn summary(&self) -> DaySummary {
        let hours = self.grid.hours();

        let peak = self
            .power
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p > 0.0)
            .fold(None, |best: Option<(usize, f64)>, (i, &p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((i, p)),
            });

        let daylight: Vec<usize> = self
            .positions
            .altitude
            .iter()
            .enumerate()
            .filter(|&(_, &alt)| alt > 0.0)
            .map(|(i, _)| i)
            .collect();

        DaySummary {
            energy_wh: self.energy_wh,
            peak_power_w: peak.map_or(0.0, |(_, p)| p),
            peak_hour: peak.map(|(i, _)| hours[i]),
            first_daylight_hour: daylight.first().map(|&i| hours[i]),
            last_daylight_hour: daylight.last().map(|&i| hours[i]),
            daylight_samples: daylight.len(),
        }
    }
}
