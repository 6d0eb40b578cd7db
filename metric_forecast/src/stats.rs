//! Statistical helpers shared by the forecasting models

/// Least-squares line fitted over observation indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change in value per index step
    pub slope: f64,
    /// Fitted value at index 0
    pub intercept: f64,
}

impl LinearFit {
    /// Fitted value at the given index
    pub fn value_at(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0.0 for an empty slice
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Ordinary least squares of values against their integer indices.
///
/// The index is the independent variable, so unevenly spaced
/// observations are treated as equally spaced. A degenerate fit (fewer
/// than two points) falls back to a flat line at the mean.
pub fn linear_fit(values: &[f64]) -> LinearFit {
    let n = values.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return LinearFit {
            slope: 0.0,
            intercept: mean(values),
        };
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    LinearFit { slope, intercept }
}

/// Coefficient of determination for the index-based least-squares fit.
///
/// Returns `None` when the total sum of squares is zero (a constant
/// series), where R² is undefined.
pub fn r_squared(values: &[f64]) -> Option<f64> {
    let mean = mean(values);
    let total_ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    if total_ss == 0.0 {
        return None;
    }

    let fit = linear_fit(values);
    let residual_ss: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &y)| (y - fit.value_at(i as f64)).powi(2))
        .sum();

    Some(1.0 - residual_ss / total_ss)
}

/// Per-step relative growth rates for consecutive value pairs.
///
/// Pairs whose predecessor is zero are skipped rather than producing
/// an infinite rate.
pub fn growth_rates(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_fit_exact_line() {
        let fit = linear_fit(&[10.0, 20.0, 30.0]);

        assert_eq!(fit.slope, 10.0);
        assert_eq!(fit.intercept, 10.0);
        assert_eq!(fit.value_at(3.0), 40.0);
    }

    #[test]
    fn test_linear_fit_single_point_is_flat() {
        let fit = linear_fit(&[42.0]);

        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 42.0);
    }

    #[test]
    fn test_r_squared_constant_series_is_undefined() {
        assert!(r_squared(&[5.0, 5.0, 5.0]).is_none());
    }

    #[test]
    fn test_r_squared_perfect_fit() {
        let r2 = r_squared(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_growth_rates_skip_zero_predecessor() {
        let rates = growth_rates(&[100.0, 0.0, 50.0, 75.0]);

        // The 0.0 -> 50.0 pair is skipped.
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0], -1.0);
        assert_eq!(rates[1], 0.5);
    }

    #[test]
    fn test_std_dev_uniform_values() {
        assert_eq!(std_dev(&[3.0, 3.0, 3.0]), 0.0);
    }
}
