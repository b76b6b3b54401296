use crate::error::SolarError;
use crate::types::GridSpec;

pub const HOURS_PER_DAY: f64 = 24.0;

/// One sample per second over a full day.
pub const MAX_GRID_SAMPLES: usize = 86_401;

/// Strictly increasing decimal hours (5.5 = 05:30) covering one observation window.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    hours: Vec<f64>,
}

impl TimeGrid {
    pub fn new(hours: Vec<f64>) -> Result<Self, SolarError> {
        validate_hours(&hours)?;
        Ok(Self { hours })
    }

    /// Samples `start..=end` every `step` hours. The end point is included when
    /// it falls on the step within floating-point tolerance.
    pub fn from_range(start: f64, end: f64, step: f64) -> Result<Self, SolarError> {
        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(SolarError::InvalidGrid(format!(
                "range bounds must be finite, got {}..={} step {}",
                start, end, step
            )));
        }
        if step <= 0.0 {
            return Err(SolarError::InvalidGrid(format!(
                "step must be positive, got {}",
                step
            )));
        }
        if start > end {
            return Err(SolarError::InvalidGrid(format!(
                "start hour {} is after end hour {}",
                start, end
            )));
        }
        let intervals = (end - start) / step;
        if intervals >= MAX_GRID_SAMPLES as f64 {
            return Err(SolarError::InvalidGrid(format!(
                "step {} over {}..={} gives more than {} samples",
                step, start, end, MAX_GRID_SAMPLES
            )));
        }
        let count = samples_in_range(start, end, step);
        let hours = (0..count)
            .map(|i| (start + i as f64 * step).min(end))
            .collect();
        Self::new(hours)
    }

    pub fn from_spec(spec: &GridSpec) -> Result<Self, SolarError> {
        Self::from_range(spec.start_hour, spec.end_hour, spec.step_hours)
    }

    pub fn hours(&self) -> &[f64] {
        &self.hours
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Checks that a series has one value per grid sample.
    pub fn check_aligned(&self, name: &str, series: &[f64]) -> Result<(), SolarError> {
        if series.len() != self.hours.len() {
            return Err(SolarError::InvalidGrid(format!(
                "{} has {} samples but the grid has {}",
                name,
                series.len(),
                self.hours.len()
            )));
        }
        Ok(())
    }
}

pub fn validate_hours(hours: &[f64]) -> Result<(), SolarError> {
    if hours.is_empty() {
        return Err(SolarError::InvalidGrid("time grid is empty".to_string()));
    }
    for (i, &h) in hours.iter().enumerate() {
        if !h.is_finite() || !(0.0..=HOURS_PER_DAY).contains(&h) {
            return Err(SolarError::InvalidGrid(format!(
                "hour at index {} must be within 0..=24, got {}",
                i, h
            )));
        }
    }
    if let Some(i) = hours.windows(2).position(|w| w[1] <= w[0]) {
        return Err(SolarError::InvalidGrid(format!(
            "hours must be strictly increasing: index {} ({}) is not after index {} ({})",
            i + 1,
            hours[i + 1],
            i,
            hours[i]
        )));
    }
    Ok(())
}

pub fn samples_in_range(start: f64, end: f64, step: f64) -> usize {
    ((end - start) / step + 1e-9).floor() as usize + 1
}

/// Splits decimal hours into (hour, minute), rounding to the nearest minute.
pub fn hours_to_time(hours: f64) -> (u32, u32) {
    let total_minutes = (hours * 60.0).round().max(0.0) as u32;
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_hours(time: (u32, u32)) -> f64 {
    time.0 as f64 + time.1 as f64 / 60.0
}

pub fn format_hours(hours: f64) -> String {
    let (h, m) = hours_to_time(hours);
    format!("{:02}:{:02}", h, m)
}

/// Like `format_hours`, but wraps hours outside the day and marks the day shift.
pub fn format_clock(hours: f64) -> String {
    let days = (hours / HOURS_PER_DAY).floor();
    let text = format_hours(hours - days * HOURS_PER_DAY);
    match days as i64 {
        0 => text,
        d => format!("{} ({:+} day)", text, d),
    }
}
