use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::SolarError;
use crate::types::{MeasurementColumn, MeasurementSeries};

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementOptions {
    pub delimiter: char,
    pub timestamp_column: String,
    pub value_columns: Vec<String>,
}

impl Default for MeasurementOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            timestamp_column: "Timestamp".to_string(),
            value_columns: vec!["AH3".to_string(), "LSParking".to_string()],
        }
    }
}

pub fn load_measurements(
    path: impl AsRef<Path>,
    options: &MeasurementOptions,
) -> Result<MeasurementSeries, SolarError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading measurements");
    let file = File::open(path)?;
    read_measurements(BufReader::new(file), options)
}

pub fn read_measurements<R: Read>(
    reader: R,
    options: &MeasurementOptions,
) -> Result<MeasurementSeries, SolarError> {
    if !options.delimiter.is_ascii() {
        return Err(SolarError::Measurement(format!(
            "delimiter must be a single ASCII character, got '{}'",
            options.delimiter
        )));
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter as u8)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if header.iter().all(|h| h.is_empty()) {
        return Err(SolarError::Measurement("file has no header row".to_string()));
    }

    let column_index = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SolarError::MissingColumn(name.to_string()))
    };
    let ts_idx = column_index(options.timestamp_column.as_str())?;
    let value_idx = options
        .value_columns
        .iter()
        .map(|name| column_index(name.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut timestamps = Vec::new();
    let mut columns: Vec<MeasurementColumn> = options
        .value_columns
        .iter()
        .map(|name| MeasurementColumn {
            name: name.clone(),
            values: Vec::new(),
        })
        .collect();
    let mut bad_timestamps = 0usize;
    let mut bad_values = 0usize;

    for result in reader.records() {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let ts = record.get(ts_idx).and_then(parse_timestamp);
        if ts.is_none() {
            bad_timestamps += 1;
        }
        timestamps.push(ts);

        for (column, &idx) in columns.iter_mut().zip(&value_idx) {
            let value = record.get(idx).and_then(parse_decimal);
            if value.is_none() {
                bad_values += 1;
            }
            column.values.push(value);
        }
    }

    if bad_timestamps > 0 || bad_values > 0 {
        warn!(
            bad_timestamps,
            bad_values, "unparsable measurement cells kept as gaps"
        );
    }
    debug!(rows = timestamps.len(), "measurements loaded");

    Ok(MeasurementSeries {
        timestamps,
        columns,
    })
}

/// Parses a number that may use `,` as the decimal separator.
pub fn parse_decimal(field: &str) -> Option<f64> {
    let normalized = field.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_timestamp(field: &str) -> Option<NaiveDateTime> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(field, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(field, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl MeasurementColumn {
    pub fn stats(&self) -> Option<ColumnStats> {
        let values: Vec<f64> = self.values.iter().flatten().copied().collect();
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(ColumnStats {
            count: values.len(),
            min,
            max,
            mean,
        })
    }
}
