use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolarError {
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Invalid time grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid panel: {0}")]
    InvalidPanel(String),

    #[error("Non-finite {series} value at sample {index} (hour {hour})")]
    NumericDegenerate {
        series: &'static str,
        index: usize,
        hour: f64,
    },

    #[error("Column '{0}' not found in measurement header")]
    MissingColumn(String),

    #[error("Measurement file error: {0}")]
    Measurement(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}
