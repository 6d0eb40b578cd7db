use metric_forecast::{ForecastError, ForecastRequest, ModelParameters, MovingAverageParams};
use pretty_assertions::assert_eq;

#[test]
fn test_numeric_coercion() {
    let params = ModelParameters::new()
        .with("intWindow", 14u64)
        .with("floatWindow", 7.0)
        .with("label", "weekly");

    assert_eq!(params.get_usize("intWindow"), Some(14));
    assert_eq!(params.get_usize("floatWindow"), Some(7));
    assert_eq!(params.get_usize("label"), None);
    assert_eq!(params.get_usize("missing"), None);
    assert_eq!(params.get_f64("floatWindow"), Some(7.0));
}

#[test]
fn test_moving_average_defaults() {
    let resolved = MovingAverageParams::from_parameters(&ModelParameters::new()).unwrap();
    assert_eq!(resolved.window_size, 7);
    assert_eq!(resolved, MovingAverageParams::default());
}

#[test]
fn test_moving_average_explicit_window() {
    let params = ModelParameters::new().with("windowSize", 30u64);
    let resolved = MovingAverageParams::from_parameters(&params).unwrap();
    assert_eq!(resolved.window_size, 30);
}

#[test]
fn test_moving_average_rejects_zero_window() {
    let params = ModelParameters::new().with("windowSize", 0u64);
    let result = MovingAverageParams::from_parameters(&params);

    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
}

#[test]
fn test_non_numeric_window_falls_back_to_default() {
    let params = ModelParameters::new().with("windowSize", "wide");
    let resolved = MovingAverageParams::from_parameters(&params).unwrap();
    assert_eq!(resolved.window_size, 7);
}

#[test]
fn test_parameters_deserialize_from_json() {
    let params: ModelParameters = serde_json::from_str(r#"{"windowSize": 14}"#).unwrap();
    assert_eq!(params.get_usize("windowSize"), Some(14));

    let round_trip = serde_json::to_string(&params).unwrap();
    assert_eq!(round_trip, r#"{"windowSize":14}"#);
}

#[test]
fn test_request_deserialization_defaults() {
    let request: ForecastRequest = serde_json::from_str(r#"{"metric_name": "cpu_usage"}"#).unwrap();

    assert_eq!(request.metric_name, "cpu_usage");
    assert_eq!(request.model_type, "linear");
    assert_eq!(request.horizon_periods, 30);
    assert!(request.parameters.is_empty());
}

#[test]
fn test_request_builders() {
    let request = ForecastRequest::new("memory_usage")
        .with_model("moving_average")
        .with_horizon(14)
        .with_parameters(ModelParameters::new().with("windowSize", 3u64));

    assert_eq!(request.model_type, "moving_average");
    assert_eq!(request.horizon_periods, 14);
    assert_eq!(request.parameters.get_usize("windowSize"), Some(3));
}
