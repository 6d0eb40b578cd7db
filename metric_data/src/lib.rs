//! # Metric Data
//!
//! `metric_data` provides the plain data types shared by the metric
//! forecasting crates: a single recorded [`Observation`] and an ordered
//! [`TimeSeries`] of observations for one named metric.
//!
//! ## Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use metric_data::{Observation, TimeSeries};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let observations = vec![
//!     Observation::new(start + Duration::days(2), 104.0),
//!     Observation::new(start, 100.0),
//!     Observation::new(start + Duration::days(1), 102.0),
//! ];
//!
//! // Construction sorts ascending by timestamp.
//! let series = TimeSeries::from_unsorted("cpu_usage", observations);
//! assert_eq!(series.values(), vec![100.0, 102.0, 104.0]);
//! assert_eq!(series.last_observation().unwrap().value, 104.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building metric data structures
#[derive(Error, Debug)]
pub enum MetricDataError {
    #[error("Timestamp count ({timestamps}) doesn't match value count ({values})")]
    LengthMismatch { timestamps: usize, values: usize },
}

/// A single recorded value for a named metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// When the value was recorded
    pub timestamp: DateTime<Utc>,
    /// The recorded value
    pub value: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered history of observations for one metric.
///
/// Observations are kept sorted ascending by timestamp; every
/// constructor establishes that ordering. A series is built fresh per
/// forecast request and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Name of the metric the observations belong to
    metric_name: String,
    /// Observations, ascending by timestamp
    observations: Vec<Observation>,
}

impl TimeSeries {
    /// Build a series from observations in any order.
    ///
    /// Sorts ascending by timestamp. Duplicate timestamps are kept as
    /// supplied; this crate does not deduplicate.
    pub fn from_unsorted(
        metric_name: impl Into<String>,
        mut observations: Vec<Observation>,
    ) -> Self {
        observations.sort_by_key(|o| o.timestamp);
        Self {
            metric_name: metric_name.into(),
            observations,
        }
    }

    /// Build a series from parallel timestamp and value vectors
    pub fn new(
        metric_name: impl Into<String>,
        timestamps: Vec<DateTime<Utc>>,
        values: Vec<f64>,
    ) -> Result<Self, MetricDataError> {
        if timestamps.len() != values.len() {
            return Err(MetricDataError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }

        let observations = timestamps
            .into_iter()
            .zip(values)
            .map(|(timestamp, value)| Observation::new(timestamp, value))
            .collect();

        Ok(Self::from_unsorted(metric_name, observations))
    }

    /// Get the metric name
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    /// Get the observations, ascending by timestamp
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the observed values in timestamp order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Get the most recent observation
    pub fn last_observation(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Number of observations in the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series has no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
