//! Historical data access and the forecast request boundary

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use metric_data::{Observation, TimeSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::ForecastEngine;
use crate::error::Result;
use crate::models::ForecastRun;
use crate::params::ModelParameters;

/// How far back the service looks for historical data, in days
pub const DEFAULT_LOOKBACK_DAYS: i64 = 90;

/// Read access to historical metric observations.
///
/// Implementations may return observations in any order; the service
/// sorts them before forecasting. An empty result is a normal data
/// condition, not an error.
pub trait HistoricalDataSource: Send + Sync {
    /// Fetch observations for a metric within the date range
    fn fetch(
        &self,
        metric_name: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Observation>>;
}

/// In-memory data source keyed by metric name
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    observations: HashMap<String, Vec<Observation>>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation for a metric
    pub fn record(&mut self, metric_name: impl Into<String>, observation: Observation) {
        self.observations
            .entry(metric_name.into())
            .or_default()
            .push(observation);
    }

    /// Record a batch of observations for a metric
    pub fn record_all(&mut self, metric_name: impl Into<String>, observations: Vec<Observation>) {
        self.observations
            .entry(metric_name.into())
            .or_default()
            .extend(observations);
    }
}

impl HistoricalDataSource for MemorySource {
    fn fetch(
        &self,
        metric_name: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Observation>> {
        Ok(self
            .observations
            .get(metric_name)
            .map(|observations| {
                observations
                    .iter()
                    .filter(|o| o.timestamp >= start && o.timestamp <= end)
                    .copied()
                    .collect()
            })
            .unwrap_or_default())
    }
}

fn default_model_type() -> String {
    "linear".to_string()
}

fn default_horizon_periods() -> usize {
    30
}

/// One forecast request at the subsystem boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Metric to forecast
    pub metric_name: String,
    /// Model type key
    #[serde(default = "default_model_type")]
    pub model_type: String,
    /// Number of future periods to forecast
    #[serde(default = "default_horizon_periods")]
    pub horizon_periods: usize,
    /// Model-specific tuning parameters
    #[serde(default)]
    pub parameters: ModelParameters,
}

impl ForecastRequest {
    /// Request with the default model (linear) and horizon (30 periods)
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            model_type: default_model_type(),
            horizon_periods: default_horizon_periods(),
            parameters: ModelParameters::new(),
        }
    }

    /// Set the model type
    pub fn with_model(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = model_type.into();
        self
    }

    /// Set the forecast horizon
    pub fn with_horizon(mut self, horizon_periods: usize) -> Self {
        self.horizon_periods = horizon_periods;
        self
    }

    /// Set the model parameters
    pub fn with_parameters(mut self, parameters: ModelParameters) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Runs forecast requests end to end against a historical data source
pub struct ForecastService<S> {
    engine: ForecastEngine,
    source: S,
    lookback_days: i64,
}

impl<S: HistoricalDataSource> ForecastService<S> {
    /// Create a service with the built-in engine and default lookback
    pub fn new(source: S) -> Self {
        Self::with_engine(ForecastEngine::new(), source)
    }

    /// Create a service over a custom engine
    pub fn with_engine(engine: ForecastEngine, source: S) -> Self {
        Self {
            engine,
            source,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// Set how far back historical data is fetched
    pub fn with_lookback_days(mut self, lookback_days: i64) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    /// Get the service's engine
    pub fn engine(&self) -> &ForecastEngine {
        &self.engine
    }

    /// Run one forecast request: fetch history, sort it into a series,
    /// and generate the forecast.
    ///
    /// A metric with no observations in the lookback window fails with
    /// the engine's insufficient-data error.
    pub fn generate(&self, request: &ForecastRequest) -> Result<ForecastRun> {
        let end = Utc::now();
        let start = end - Duration::days(self.lookback_days);
        let observations = self.source.fetch(&request.metric_name, start, end)?;

        debug!(
            metric = request.metric_name.as_str(),
            observations = observations.len(),
            lookback_days = self.lookback_days,
            "fetched historical observations"
        );

        let series = TimeSeries::from_unsorted(request.metric_name.clone(), observations);
        self.engine.generate(
            &series,
            &request.model_type,
            request.horizon_periods,
            &request.parameters,
        )
    }

    /// Run a batch of requests, isolating failures per item.
    ///
    /// The output holds one entry per request in input order; a failed
    /// request yields an error entry and never aborts the rest.
    pub fn generate_batch(&self, requests: &[ForecastRequest]) -> Vec<Result<ForecastRun>> {
        requests.iter().map(|request| self.generate(request)).collect()
    }
}
