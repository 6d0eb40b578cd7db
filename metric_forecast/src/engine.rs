//! Forecast generation engine

use chrono::{Duration, Utc};
use metric_data::TimeSeries;
use tracing::debug;

use crate::error::{ForecastError, Result};
use crate::models::{ForecastRun, PredictionPoint};
use crate::params::ModelParameters;
use crate::registry::ModelRegistry;

/// Longest supported forecast horizon, in periods
pub const MAX_HORIZON_PERIODS: usize = 365;

/// Orchestrates multi-period forecast generation.
///
/// Each call to [`generate`](Self::generate) is a pure, single-pass
/// computation over its inputs: no shared state, no retries, no
/// background work. One engine can serve concurrent forecast requests
/// without coordination.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    registry: ModelRegistry,
}

impl ForecastEngine {
    /// Create an engine with the built-in model registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over a custom registry
    pub fn with_registry(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    /// Get the engine's model registry
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Generate a forecast of `horizon_periods` future points for the
    /// series.
    ///
    /// Validates the horizon and the series length against the model's
    /// minimum, then emits one [`PredictionPoint`] per period. Dates
    /// advance one day per period past the last observation, whatever
    /// the series' actual sampling interval. Unknown model types fall
    /// back to linear regression.
    pub fn generate(
        &self,
        series: &TimeSeries,
        model_type: &str,
        horizon_periods: usize,
        params: &ModelParameters,
    ) -> Result<ForecastRun> {
        if horizon_periods == 0 || horizon_periods > MAX_HORIZON_PERIODS {
            return Err(ForecastError::InvalidHorizon {
                periods: horizon_periods,
            });
        }

        let model = self.registry.resolve_or_linear(model_type)?;
        model.validate_params(params)?;

        let required = model.minimum_points(params)?;
        if series.len() < required {
            return Err(ForecastError::InsufficientData {
                metric: series.metric_name().to_string(),
                required,
                actual: series.len(),
            });
        }

        let last = series.last_observation().ok_or_else(|| {
            ForecastError::DataError("Empty time series data".to_string())
        })?;

        debug!(
            metric = series.metric_name(),
            model = model.key(),
            horizon = horizon_periods,
            observations = series.len(),
            "generating forecast"
        );

        let mut points = Vec::with_capacity(horizon_periods);
        for periods_ahead in 1..=horizon_periods {
            let value = model.predict_next(series, periods_ahead, params)?;
            let confidence = model.estimate_confidence(series, periods_ahead);
            let margin = model.margin(series, periods_ahead, value, confidence, params)?;

            points.push(PredictionPoint {
                date: last.timestamp + Duration::days(periods_ahead as i64),
                value,
                confidence,
                lower_bound: value - margin,
                upper_bound: value + margin,
            });
        }

        Ok(ForecastRun {
            metric_name: series.metric_name().to_string(),
            model_type: model.key().to_string(),
            horizon_periods,
            points,
            accuracy: model.estimate_confidence(series, 1),
            generated_at: Utc::now(),
        })
    }
}
