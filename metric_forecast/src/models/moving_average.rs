//! Moving average model

use metric_data::TimeSeries;

use crate::error::{ForecastError, Result};
use crate::models::{clamp_confidence, ForecastModel};
use crate::params::{ModelParameters, MovingAverageParams, DEFAULT_WINDOW_SIZE, WINDOW_SIZE_KEY};
use crate::stats;

/// Flat forecast at the mean of the trailing window.
///
/// The predicted value is the same at every horizon; what changes is
/// the confidence, which drops a fixed step per period. The margin is
/// sized from the window's volatility rather than the value itself,
/// unlike the other models.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovingAverageModel;

impl MovingAverageModel {
    /// Values inside the trailing window, newest last
    fn window_values(series: &TimeSeries, params: &ModelParameters) -> Result<Vec<f64>> {
        let window = MovingAverageParams::from_parameters(params)?.window_size;
        let values = series.values();

        if values.len() < window {
            return Err(ForecastError::InsufficientData {
                metric: series.metric_name().to_string(),
                required: window,
                actual: values.len(),
            });
        }

        Ok(values[values.len() - window..].to_vec())
    }
}

impl ForecastModel for MovingAverageModel {
    fn key(&self) -> &str {
        "moving_average"
    }

    fn name(&self) -> &str {
        "Moving Average"
    }

    fn description(&self) -> &str {
        "Smooth trend analysis using moving averages"
    }

    fn minimum_points(&self, params: &ModelParameters) -> Result<usize> {
        Ok(MovingAverageParams::from_parameters(params)?.window_size)
    }

    fn default_parameters(&self) -> ModelParameters {
        ModelParameters::new().with(WINDOW_SIZE_KEY, DEFAULT_WINDOW_SIZE as u64)
    }

    fn validate_params(&self, params: &ModelParameters) -> Result<()> {
        MovingAverageParams::from_parameters(params).map(|_| ())
    }

    fn predict_next(
        &self,
        series: &TimeSeries,
        _periods_ahead: usize,
        params: &ModelParameters,
    ) -> Result<f64> {
        Ok(stats::mean(&Self::window_values(series, params)?))
    }

    fn estimate_confidence(&self, _series: &TimeSeries, periods_ahead: usize) -> f64 {
        clamp_confidence(0.8 - periods_ahead as f64 * 0.05)
    }

    fn margin(
        &self,
        series: &TimeSeries,
        _periods_ahead: usize,
        _value: f64,
        confidence: f64,
        params: &ModelParameters,
    ) -> Result<f64> {
        let volatility = stats::std_dev(&Self::window_values(series, params)?);
        Ok(volatility * (1.0 - confidence))
    }
}
