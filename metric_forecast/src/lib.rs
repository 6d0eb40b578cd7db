//! # Metric Forecast
//!
//! A Rust library for forecasting metric time series.
//!
//! ## Features
//!
//! - Statistical forecasting models (Linear Regression, Exponential
//!   Growth, Moving Average, Trend Analysis)
//! - Per-point confidence scores and uncertainty bounds
//! - A string-keyed model registry with pluggable implementations
//! - A forecast engine producing deterministic multi-period runs
//! - A request/service boundary with per-item batch isolation
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use metric_forecast::{ForecastEngine, ModelParameters, Observation, TimeSeries};
//!
//! # fn main() -> Result<(), metric_forecast::ForecastError> {
//! // Ten days of history for one metric
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let observations = (0..10)
//!     .map(|i| Observation::new(start + Duration::days(i), 100.0 + i as f64 * 5.0))
//!     .collect();
//! let series = TimeSeries::from_unsorted("daily_active_users", observations);
//!
//! // Forecast a week ahead with linear regression
//! let engine = ForecastEngine::new();
//! let run = engine.generate(&series, "linear", 7, &ModelParameters::new())?;
//!
//! assert_eq!(run.points.len(), 7);
//! for point in &run.points {
//!     assert!(point.lower_bound <= point.value && point.value <= point.upper_bound);
//! }
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod registry;
pub mod source;
pub mod stats;

// Re-export commonly used types
pub use crate::engine::{ForecastEngine, MAX_HORIZON_PERIODS};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{ForecastModel, ForecastRun, PredictionPoint};
pub use crate::params::{ModelParameters, MovingAverageParams};
pub use crate::registry::{ModelInfo, ModelRegistry};
pub use crate::source::{
    ForecastRequest, ForecastService, HistoricalDataSource, MemorySource,
};
pub use metric_data::{Observation, TimeSeries};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
