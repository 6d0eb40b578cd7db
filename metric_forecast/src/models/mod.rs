//! Forecasting models for metric time series

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use metric_data::TimeSeries;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::ModelParameters;

/// Lowest confidence any model reports
pub const CONFIDENCE_FLOOR: f64 = 0.1;

/// Highest confidence any model reports
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Clamp a raw confidence score into the reportable range.
///
/// The engine never reports full certainty or full uncertainty.
pub(crate) fn clamp_confidence(raw: f64) -> f64 {
    raw.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

/// One forecasted point at a fixed number of periods past the last
/// observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// Date the prediction applies to
    pub date: DateTime<Utc>,
    /// Predicted value
    pub value: f64,
    /// Model confidence in this point, within [0.1, 0.95]
    pub confidence: f64,
    /// Lower edge of the uncertainty band
    pub lower_bound: f64,
    /// Upper edge of the uncertainty band
    pub upper_bound: f64,
}

/// Complete result of one forecast generation run.
///
/// Immutable once assembled; owned by whichever caller requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRun {
    /// Metric the forecast was generated for
    pub metric_name: String,
    /// Key of the model that produced the points
    pub model_type: String,
    /// Number of future periods forecasted
    pub horizon_periods: usize,
    /// One point per forecasted period, ascending by date
    pub points: Vec<PredictionPoint>,
    /// Overall run accuracy: the model's confidence one period ahead
    pub accuracy: f64,
    /// When the run was generated
    pub generated_at: DateTime<Utc>,
}

/// A statistical forecasting model.
///
/// Implementations are stateless: every operation reads only the
/// supplied series and parameters, so one model value can serve any
/// number of concurrent forecast runs.
pub trait ForecastModel: Debug + Send + Sync {
    /// Registry key, e.g. `"linear"`
    fn key(&self) -> &str;

    /// Human-readable model name
    fn name(&self) -> &str;

    /// Short description of what the model is suited for
    fn description(&self) -> &str;

    /// Minimum number of observations the model needs
    fn minimum_points(&self, params: &ModelParameters) -> Result<usize>;

    /// Parameters the model assumes when the request supplies none
    fn default_parameters(&self) -> ModelParameters {
        ModelParameters::new()
    }

    /// Check the parameter bag before any computation
    fn validate_params(&self, _params: &ModelParameters) -> Result<()> {
        Ok(())
    }

    /// Project the series value `periods_ahead` periods past the last
    /// observation
    fn predict_next(
        &self,
        series: &TimeSeries,
        periods_ahead: usize,
        params: &ModelParameters,
    ) -> Result<f64>;

    /// Confidence in a prediction `periods_ahead` out, within
    /// [0.1, 0.95]. Never increases as the horizon grows.
    fn estimate_confidence(&self, series: &TimeSeries, periods_ahead: usize) -> f64;

    /// Half-width of the uncertainty band around a predicted value.
    ///
    /// The default margin is proportional to the predicted value
    /// itself; models with a better measure of spread override this.
    fn margin(
        &self,
        _series: &TimeSeries,
        _periods_ahead: usize,
        value: f64,
        confidence: f64,
        _params: &ModelParameters,
    ) -> Result<f64> {
        Ok(value * (1.0 - confidence))
    }
}

pub mod exponential;
pub mod linear;
pub mod moving_average;
pub mod trend;

pub use exponential::ExponentialModel;
pub use linear::LinearModel;
pub use moving_average::MovingAverageModel;
pub use trend::TrendModel;
