pub mod angles;
pub mod error;
pub mod grid;
pub mod irradiance;
pub mod measurements;
pub mod plot;
pub mod production;
pub mod report;
pub mod simulation;
pub mod types;

pub use angles::{
    day_of_year, deg_to_rad, hour_angle, local_solar_time, normalize_angle, parse_date, rad_to_deg,
    solar_altitude, solar_azimuth, solar_declination, solar_position, sun_angles_at,
    sunrise_sunset, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use error::SolarError;

pub use grid::{format_clock, format_hours, hours_to_time, time_to_hours, TimeGrid};

pub use irradiance::{clear_sky_irradiance, cos_incidence, panel_irradiance};

pub use measurements::{load_measurements, read_measurements, ColumnStats, MeasurementOptions};

pub use plot::{plot_day_profile, plot_measurements};

pub use production::{integrate_energy, panel_production, zero_night_output};

pub use simulation::simulate_day;

pub use types::{
    DayProfile, DaySummary, GridSpec, Location, MeasurementColumn, MeasurementSeries,
    PanelGeometry, PanelSpec, SimulationConfig, SolarPositions, SunriseSunset,
};
