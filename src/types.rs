use chrono::{NaiveDate, NaiveDateTime};

use crate::error::SolarError;
use crate::grid::TimeGrid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SolarError> {
        let location = Self {
            latitude,
            longitude,
        };
        location.validate()?;
        Ok(location)
    }

    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SolarError::InvalidLocation(format!(
                "latitude must be between -90 and 90, got {}",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SolarError::InvalidLocation(format!(
                "longitude must be between -180 and 180, got {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Fixed panel orientation in degrees.
///
/// `azimuth` uses the same convention as the computed sun azimuth:
/// clockwise from north (0 = N, 90 = E, 180 = S, 270 = W).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub tilt: f64,
    pub azimuth: f64,
}

impl PanelGeometry {
    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.tilt.is_finite() || !(0.0..=90.0).contains(&self.tilt) {
            return Err(SolarError::InvalidPanel(format!(
                "tilt must be between 0 and 90 degrees, got {}",
                self.tilt
            )));
        }
        if !self.azimuth.is_finite() || !(0.0..=360.0).contains(&self.azimuth) {
            return Err(SolarError::InvalidPanel(format!(
                "panel azimuth must be between 0 and 360 degrees, got {}",
                self.azimuth
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    /// Panel area in m²
    pub area_m2: f64,
    /// Conversion efficiency as a fraction
    pub efficiency: f64,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            area_m2: 1.6,
            efficiency: 0.18,
        }
    }
}

impl PanelSpec {
    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.area_m2.is_finite() || self.area_m2 <= 0.0 {
            return Err(SolarError::InvalidPanel(format!(
                "area must be positive, got {}",
                self.area_m2
            )));
        }
        if !self.efficiency.is_finite() || !(0.0..=1.0).contains(&self.efficiency) {
            return Err(SolarError::InvalidPanel(format!(
                "efficiency must be between 0.0 and 1.0, got {}",
                self.efficiency
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub start_hour: f64,
    pub end_hour: f64,
    pub step_hours: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            start_hour: 5.5,
            end_hour: 20.0,
            step_hours: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub location: Location,
    pub date: NaiveDate,
    pub panel: PanelGeometry,
    pub spec: PanelSpec,
    pub grid: GridSpec,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            location: Location {
                latitude: 4.6,
                longitude: -74.1,
            },
            date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap_or_default(),
            panel: PanelGeometry {
                tilt: 10.0,
                azimuth: 0.0,
            },
            spec: PanelSpec::default(),
            grid: GridSpec::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolarPositions {
    pub altitude: Vec<f64>,
    pub azimuth: Vec<f64>,
}

impl SolarPositions {
    pub fn len(&self) -> usize {
        self.altitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitude.is_empty()
    }
}

/// Zero-altitude crossings in grid clock hours, unwrapped so that
/// `sunset - sunrise` is always the day length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunriseSunset {
    Regular { sunrise: f64, sunset: f64 },
    PolarDay,
    PolarNight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayProfile {
    pub config: SimulationConfig,
    pub grid: TimeGrid,
    pub positions: SolarPositions,
    /// Plane-of-array irradiance in kW/m²
    pub irradiance: Vec<f64>,
    pub power: Vec<f64>,
    /// Daily energy in Wh
    pub energy_wh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub energy_wh: f64,
    pub peak_power_w: f64,
    pub peak_hour: Option<f64>,
    pub first_daylight_hour: Option<f64>,
    pub last_daylight_hour: Option<f64>,
    pub daylight_samples: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementColumn {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Rows loaded from a delimited measurement file. Unparsable cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSeries {
    pub timestamps: Vec<Option<NaiveDateTime>>,
    pub columns: Vec<MeasurementColumn>,
}

impl MeasurementSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&MeasurementColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}
