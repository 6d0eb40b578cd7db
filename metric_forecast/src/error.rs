//! Error types for the metric_forecast crate

use thiserror::Error;

/// Custom error types for the metric_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Fewer observations than the selected model requires
    #[error("Insufficient data for metric '{metric}': need at least {required} observations, got {actual}")]
    InsufficientData {
        metric: String,
        required: usize,
        actual: usize,
    },

    /// Model type key not present in the registry
    #[error("Unknown model type: {0}")]
    UnknownModelType(String),

    /// Forecast horizon outside the supported range
    #[error("Forecast horizon must be between 1 and 365 periods, got {periods}")]
    InvalidHorizon { periods: usize },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
