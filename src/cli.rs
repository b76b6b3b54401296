use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use solar_yield::{
    parse_date, GridSpec, Location, MeasurementOptions, PanelGeometry, PanelSpec,
    SimulationConfig,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate irradiance and output of a fixed panel over one day
    Simulate(SimulateArgs),
    /// Load and chart a delimited measurement file
    Measurements(MeasurementArgs),
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Latitude in decimal degrees (-90 to 90)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude, env = "SOLAR_YIELD_LATITUDE")]
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_longitude, env = "SOLAR_YIELD_LONGITUDE")]
    pub longitude: f64,
    /// Date as YYYY-MM-DD
    #[arg(long, value_parser = parse_date_arg, env = "SOLAR_YIELD_DATE")]
    pub date: NaiveDate,
    /// Panel tilt from horizontal in degrees (0 = flat, 90 = vertical)
    #[arg(long, value_parser = parse_tilt, env = "SOLAR_YIELD_TILT")]
    pub tilt: f64,
    /// Panel azimuth in degrees, clockwise from north (0 = N, 90 = E, 180 = S, 270 = W)
    #[arg(long, value_parser = parse_azimuth, env = "SOLAR_YIELD_PANEL_AZIMUTH")]
    pub panel_azimuth: f64,

    /// Panel area in square meters
    #[arg(long, default_value_t = 1.6, value_parser = parse_positive_f64, env = "SOLAR_YIELD_AREA")]
    pub area: f64,
    /// Panel efficiency (0.0-1.0)
    #[arg(long, default_value_t = 0.18, value_parser = parse_efficiency, env = "SOLAR_YIELD_EFFICIENCY")]
    pub efficiency: f64,

    /// First sample, decimal hours
    #[arg(long, default_value_t = 5.5, value_parser = parse_hour, env = "SOLAR_YIELD_START_HOUR")]
    pub start_hour: f64,
    /// Last sample, decimal hours (inclusive)
    #[arg(long, default_value_t = 20.0, value_parser = parse_hour, env = "SOLAR_YIELD_END_HOUR")]
    pub end_hour: f64,
    /// Sampling step in hours
    #[arg(long, default_value_t = 0.25, value_parser = parse_positive_f64, env = "SOLAR_YIELD_STEP_HOURS")]
    pub step_hours: f64,

    /// Print one row per sample
    #[arg(long)]
    pub table: bool,
    /// Write the 2x2 chart to this file (.png or .svg)
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

impl SimulateArgs {
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            location: Location {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            date: self.date,
            panel: PanelGeometry {
                tilt: self.tilt,
                azimuth: self.panel_azimuth,
            },
            spec: PanelSpec {
                area_m2: self.area,
                efficiency: self.efficiency,
            },
            grid: GridSpec {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
                step_hours: self.step_hours,
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct MeasurementArgs {
    /// Delimited text file to load
    #[arg(long, env = "SOLAR_YIELD_MEASUREMENTS_FILE")]
    pub file: PathBuf,
    /// Field delimiter
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,
    /// Name of the timestamp column
    #[arg(long, default_value = "Timestamp")]
    pub timestamp_column: String,
    /// Numeric columns to load, comma separated
    #[arg(long, value_delimiter = ',', default_value = "AH3,LSParking")]
    pub columns: Vec<String>,
    /// Write the chart to this file (.png or .svg)
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

impl MeasurementArgs {
    pub fn to_options(&self) -> MeasurementOptions {
        MeasurementOptions {
            delimiter: self.delimiter,
            timestamp_column: self.timestamp_column.clone(),
            value_columns: self.columns.clone(),
        }
    }
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn parse_tilt(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=90.0).contains(&v) {
        return Err(format!("Tilt must be between 0 and 90 degrees, got {}", v));
    }
    Ok(v)
}

fn parse_azimuth(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=360.0).contains(&v) {
        return Err(format!("Azimuth must be between 0 and 360 degrees, got {}", v));
    }
    Ok(v)
}

fn parse_positive_f64(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !v.is_finite() || v <= 0.0 {
        return Err(format!("Value must be positive, got {}", v));
    }
    Ok(v)
}

fn parse_efficiency(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("Efficiency must be between 0.0 and 1.0, got {}", v));
    }
    Ok(v)
}

fn parse_hour(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(0.0..=24.0).contains(&v) {
        return Err(format!("Hour must be between 0 and 24, got {}", v));
    }
    Ok(v)
}
