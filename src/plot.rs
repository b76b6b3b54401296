use std::error::Error;
use std::path::Path;

use chrono::TimeDelta;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::angles::rad_to_deg;
use crate::error::SolarError;
use crate::types::{DayProfile, MeasurementSeries};

const ORANGE: RGBColor = RGBColor(255, 165, 0);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const TEAL: RGBColor = RGBColor(0, 128, 128);
const GREEN_DARK: RGBColor = RGBColor(0, 128, 0);
const SERIES_PALETTE: [RGBColor; 6] = [PURPLE, TEAL, ORANGE, BLUE, RED, GREEN_DARK];

const DAY_PROFILE_SIZE: (u32, u32) = (1400, 800);
const MEASUREMENT_SIZE: (u32, u32) = (1200, 500);

type DrawResult = Result<(), Box<dyn Error>>;

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn plot_error(e: Box<dyn Error>) -> SolarError {
    SolarError::Plot(e.to_string())
}

/// Renders altitude, azimuth, irradiance and power as a 2×2 chart.
pub fn plot_day_profile(profile: &DayProfile, path: impl AsRef<Path>) -> Result<(), SolarError> {
    let path = path.as_ref();
    if is_svg(path) {
        let root = SVGBackend::new(path, DAY_PROFILE_SIZE).into_drawing_area();
        draw_day_profile(&root, profile).map_err(plot_error)
    } else {
        let root = BitMapBackend::new(path, DAY_PROFILE_SIZE).into_drawing_area();
        draw_day_profile(&root, profile).map_err(plot_error)
    }
}

pub fn plot_measurements(series: &MeasurementSeries, path: impl AsRef<Path>) -> Result<(), SolarError> {
    let path = path.as_ref();
    if is_svg(path) {
        let root = SVGBackend::new(path, MEASUREMENT_SIZE).into_drawing_area();
        draw_measurements(&root, series).map_err(plot_error)
    } else {
        let root = BitMapBackend::new(path, MEASUREMENT_SIZE).into_drawing_area();
        draw_measurements(&root, series).map_err(plot_error)
    }
}

/// Axis bounds for a set of values, padded so flat series still render.
pub fn value_bounds(values: impl IntoIterator<Item = f64>, floor_at_zero: bool) -> (f64, f64) {
    let (mut lo, mut hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if floor_at_zero {
        lo = lo.min(0.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        hi = lo + 1.0;
    } else {
        let pad = (hi - lo) * 0.05;
        hi += pad;
        if !floor_at_zero {
            lo -= pad;
        }
    }
    (lo, hi)
}

/// Splits a series at missing points into contiguous runs.
pub fn contiguous_runs(points: impl IntoIterator<Item = Option<(f64, f64)>>) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for point in points {
        match point {
            Some(p) => current.push(p),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

struct Panel<'a> {
    title: &'a str,
    y_desc: &'a str,
    values: Vec<f64>,
    color: RGBColor,
    filled: bool,
}

fn draw_day_profile<DB>(root: &DrawingArea<DB, Shift>, profile: &DayProfile) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let hours = profile.grid.hours();
    let x0 = hours.first().copied().unwrap_or(0.0);
    let x1 = hours.last().copied().unwrap_or(24.0).max(x0 + f64::EPSILON);

    let panels = [
        Panel {
            title: "Solar altitude",
            y_desc: "Altitude [°]",
            values: profile.positions.altitude.iter().map(|&a| rad_to_deg(a)).collect(),
            color: ORANGE,
            filled: false,
        },
        Panel {
            title: "Solar azimuth",
            y_desc: "Azimuth [°]",
            values: profile.positions.azimuth.iter().map(|&a| rad_to_deg(a)).collect(),
            color: BLUE,
            filled: false,
        },
        Panel {
            title: "Irradiance on tilted panel",
            y_desc: "Irradiance [kW/m²]",
            values: profile.irradiance.clone(),
            color: RED,
            filled: true,
        },
        Panel {
            title: "Estimated panel output",
            y_desc: "Power [W]",
            values: profile.power.clone(),
            color: GREEN_DARK,
            filled: true,
        },
    ];

    for (area, panel) in root.split_evenly((2, 2)).iter().zip(panels.iter()) {
        let (y0, y1) = value_bounds(panel.values.iter().copied(), panel.filled);
        let mut chart = ChartBuilder::on(area)
            .caption(panel.title, ("sans-serif", 20).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x0..x1, y0..y1)?;

        chart
            .configure_mesh()
            .x_desc("Hour [h]")
            .y_desc(panel.y_desc)
            .draw()?;

        let data: Vec<(f64, f64)> = hours.iter().copied().zip(panel.values.iter().copied()).collect();
        if panel.filled {
            chart.draw_series(
                AreaSeries::new(data, 0.0, panel.color.mix(0.3)).border_style(panel.color.stroke_width(2)),
            )?;
        } else {
            chart.draw_series(LineSeries::new(data, panel.color.stroke_width(2)))?;
        }
    }

    root.present()?;
    Ok(())
}

fn draw_measurements<DB>(root: &DrawingArea<DB, Shift>, series: &MeasurementSeries) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let start = series
        .timestamps
        .iter()
        .flatten()
        .min()
        .copied()
        .ok_or("no valid timestamps to plot")?;
    let offset_hours = |t: &chrono::NaiveDateTime| (*t - start).num_seconds() as f64 / 3600.0;

    let x1 = series
        .timestamps
        .iter()
        .flatten()
        .map(offset_hours)
        .fold(0.0, f64::max)
        .max(f64::EPSILON);
    let (y0, y1) = value_bounds(
        series.columns.iter().flat_map(|c| c.values.iter().flatten().copied()),
        false,
    );

    let mut chart = ChartBuilder::on(root)
        .caption("Measured data", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x1, y0..y1)?;

    let label_time = |x: &f64| {
        TimeDelta::try_seconds((x * 3600.0).round() as i64)
            .and_then(|d| start.checked_add_signed(d))
            .map(|t| t.format("%d/%m %H:%M").to_string())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&label_time)
        .x_desc("Time")
        .y_desc("Measured value")
        .draw()?;

    for (column, &color) in series.columns.iter().zip(SERIES_PALETTE.iter().cycle()) {
        let points = series.timestamps.iter().zip(&column.values).map(|(t, v)| match (t, v) {
            (Some(t), Some(v)) => Some((offset_hours(t), *v)),
            _ => None,
        });
        let runs = contiguous_runs(points);
        for (i, run) in runs.into_iter().enumerate() {
            let drawn = chart.draw_series(LineSeries::new(run, color.stroke_width(2)))?;
            if i == 0 {
                drawn
                    .label(column.name.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            }
        }
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
