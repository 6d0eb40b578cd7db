//! Simple trend model

use metric_data::TimeSeries;

use crate::error::{ForecastError, Result};
use crate::models::{clamp_confidence, ForecastModel};
use crate::params::ModelParameters;

/// Linear extrapolation of the trend across the last three
/// observations.
///
/// The trend is half the change from the third-last to the last value,
/// applied once per horizon period on top of the last observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendModel;

impl ForecastModel for TrendModel {
    fn key(&self) -> &str {
        "trend"
    }

    fn name(&self) -> &str {
        "Trend Analysis"
    }

    fn description(&self) -> &str {
        "Trend detection over the most recent observations"
    }

    fn minimum_points(&self, _params: &ModelParameters) -> Result<usize> {
        Ok(3)
    }

    fn predict_next(
        &self,
        series: &TimeSeries,
        periods_ahead: usize,
        _params: &ModelParameters,
    ) -> Result<f64> {
        let values = series.values();
        if values.len() < 3 {
            return Err(ForecastError::InsufficientData {
                metric: series.metric_name().to_string(),
                required: 3,
                actual: values.len(),
            });
        }

        let recent = &values[values.len() - 3..];
        let trend = (recent[2] - recent[0]) / 2.0;

        Ok(recent[2] + trend * periods_ahead as f64)
    }

    fn estimate_confidence(&self, _series: &TimeSeries, periods_ahead: usize) -> f64 {
        clamp_confidence(0.88 - periods_ahead as f64 * 0.02)
    }
}
