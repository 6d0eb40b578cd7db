//! Exponential growth model

use metric_data::TimeSeries;

use crate::error::{ForecastError, Result};
use crate::models::{clamp_confidence, ForecastModel};
use crate::params::ModelParameters;
use crate::stats;

/// Compound growth projection from the average per-step growth rate.
///
/// The growth rate is the mean of consecutive relative changes; a pair
/// with a zero predecessor contributes nothing rather than an infinite
/// rate. Confidence falls as the observed growth rates get more
/// volatile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialModel;

fn average_growth_rate(values: &[f64]) -> f64 {
    stats::mean(&stats::growth_rates(values))
}

impl ForecastModel for ExponentialModel {
    fn key(&self) -> &str {
        "exponential"
    }

    fn name(&self) -> &str {
        "Exponential Growth"
    }

    fn description(&self) -> &str {
        "Exponential trend analysis for accelerating growth"
    }

    fn minimum_points(&self, _params: &ModelParameters) -> Result<usize> {
        Ok(2)
    }

    fn predict_next(
        &self,
        series: &TimeSeries,
        periods_ahead: usize,
        _params: &ModelParameters,
    ) -> Result<f64> {
        let values = series.values();
        let last_value = *values.last().ok_or_else(|| {
            ForecastError::DataError("Empty time series data".to_string())
        })?;

        let growth_rate = average_growth_rate(&values);
        Ok(last_value * (1.0 + growth_rate).powi(periods_ahead as i32))
    }

    fn estimate_confidence(&self, series: &TimeSeries, _periods_ahead: usize) -> f64 {
        let values = series.values();
        let rates = stats::growth_rates(&values);
        let absolute_rates: Vec<f64> = rates.iter().map(|rate| rate.abs()).collect();

        clamp_confidence(0.85 - stats::mean(&absolute_rates))
    }
}
