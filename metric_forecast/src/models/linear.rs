//! Linear regression model

use metric_data::TimeSeries;

use crate::error::{ForecastError, Result};
use crate::models::{clamp_confidence, ForecastModel};
use crate::params::ModelParameters;
use crate::stats;

/// Ordinary least squares over the observation index.
///
/// The regression runs against index `0..n-1` rather than elapsed
/// time, so unevenly spaced observations are treated as equally
/// spaced. Confidence derives from the fit's R²; a constant series,
/// where R² is undefined, reports 0.5.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearModel;

impl ForecastModel for LinearModel {
    fn key(&self) -> &str {
        "linear"
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn description(&self) -> &str {
        "Simple linear trend analysis for steady growth patterns"
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
        if values.is_empty() {
            return Err(ForecastError::DataError(
                "Empty time series data".to_string(),
            ));
        }

        let fit = stats::linear_fit(&values);

        // The last observation sits at index n-1; horizon h lands at
        // index n-1+h.
        let index = (values.len() - 1 + periods_ahead) as f64;
        Ok(fit.value_at(index))
    }

    fn estimate_confidence(&self, series: &TimeSeries, _periods_ahead: usize) -> f64 {
        let values = series.values();
        let r_squared = stats::r_squared(&values)
            .map(|r2| r2.clamp(0.0, 1.0))
            .unwrap_or(0.5);

        clamp_confidence(r_squared)
    }
}
