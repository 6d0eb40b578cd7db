use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use metric_forecast::models::ForecastModel;
use metric_forecast::{
    ForecastEngine, ForecastError, ModelParameters, ModelRegistry, Observation, Result, TimeSeries,
};
use pretty_assertions::assert_eq;

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(offset)
}

fn series(values: &[f64]) -> TimeSeries {
    let observations = values
        .iter()
        .enumerate()
        .map(|(i, &value)| Observation::new(day(i as i64), value))
        .collect();

    TimeSeries::from_unsorted("test_metric", observations)
}

#[test]
fn test_builtin_registry_keys() {
    let registry = ModelRegistry::with_builtin();

    assert_eq!(registry.len(), 4);
    assert_eq!(
        registry.keys(),
        vec!["exponential", "linear", "moving_average", "trend"]
    );
    assert!(registry.contains("linear"));
    assert!(!registry.contains("arima"));
}

#[test]
fn test_resolve_unknown_key_fails() {
    let registry = ModelRegistry::with_builtin();

    let result = registry.resolve("arima");
    match result {
        Err(ForecastError::UnknownModelType(key)) => assert_eq!(key, "arima"),
        other => panic!("expected UnknownModelType, got {other:?}"),
    }
}

#[test]
fn test_resolve_or_linear_falls_back() {
    let registry = ModelRegistry::with_builtin();

    let model = registry.resolve_or_linear("arima").unwrap();
    assert_eq!(model.key(), "linear");
}

#[test]
fn test_resolve_or_linear_fails_without_linear() {
    let registry = ModelRegistry::empty();

    let result = registry.resolve_or_linear("arima");
    assert!(matches!(result, Err(ForecastError::UnknownModelType(_))));
}

#[test]
fn test_catalog_describes_registered_models() {
    let registry = ModelRegistry::with_builtin();
    let catalog = registry.catalog();

    assert_eq!(catalog.len(), 4);

    let moving_average = catalog
        .iter()
        .find(|info| info.key == "moving_average")
        .unwrap();
    assert_eq!(moving_average.name, "Moving Average");
    assert_eq!(
        moving_average.default_parameters.get_usize("windowSize"),
        Some(7)
    );

    let linear = catalog.iter().find(|info| info.key == "linear").unwrap();
    assert!(linear.default_parameters.is_empty());
}

/// A model that always forecasts the same value, for dispatch tests.
#[derive(Debug)]
struct ConstantModel {
    value: f64,
}

impl ForecastModel for ConstantModel {
    fn key(&self) -> &str {
        "constant"
    }

    fn name(&self) -> &str {
        "Constant"
    }

    fn description(&self) -> &str {
        "Always forecasts a fixed value"
    }

    fn minimum_points(&self, _params: &ModelParameters) -> Result<usize> {
        Ok(1)
    }

    fn predict_next(
        &self,
        _series: &TimeSeries,
        _periods_ahead: usize,
        _params: &ModelParameters,
    ) -> Result<f64> {
        Ok(self.value)
    }

    fn estimate_confidence(&self, _series: &TimeSeries, _periods_ahead: usize) -> f64 {
        0.5
    }
}

#[test]
fn test_custom_model_dispatch() {
    let mut registry = ModelRegistry::with_builtin();
    registry.register(Arc::new(ConstantModel { value: 99.0 }));
    assert_eq!(registry.len(), 5);

    let engine = ForecastEngine::with_registry(registry);
    let run = engine
        .generate(&series(&[1.0, 2.0, 3.0]), "constant", 3, &ModelParameters::new())
        .unwrap();

    assert_eq!(run.model_type, "constant");
    for point in &run.points {
        assert_eq!(point.value, 99.0);
        assert_eq!(point.confidence, 0.5);
    }
}

#[test]
fn test_register_replaces_existing_key() {
    let mut registry = ModelRegistry::empty();
    registry.register(Arc::new(ConstantModel { value: 1.0 }));
    registry.register(Arc::new(ConstantModel { value: 2.0 }));

    assert_eq!(registry.len(), 1);
    let model = registry.resolve("constant").unwrap();
    let predicted = model
        .predict_next(&series(&[5.0]), 1, &ModelParameters::new())
        .unwrap();
    assert_eq!(predicted, 2.0);
}
