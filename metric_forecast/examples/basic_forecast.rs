use chrono::{Duration, TimeZone, Utc};
use metric_forecast::{ForecastEngine, ModelParameters, Observation, TimeSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Metric Forecast: Basic Forecasting Example");
    println!("==========================================\n");

    // Build two weeks of history for a single metric
    let series = create_sample_series();
    println!(
        "Metric '{}' with {} observations\n",
        series.metric_name(),
        series.len()
    );

    let engine = ForecastEngine::new();

    // Run every registered model over the same series
    for info in engine.registry().catalog() {
        println!("{} ({})", info.name, info.key);
        println!("  {}", info.description);

        let run = engine.generate(&series, &info.key, 5, &ModelParameters::new())?;
        println!("  accuracy: {:.2}", run.accuracy);

        for point in &run.points {
            println!(
                "  {}  value {:8.2}  confidence {:.2}  bounds [{:8.2}, {:8.2}]",
                point.date.format("%Y-%m-%d"),
                point.value,
                point.confidence,
                point.lower_bound,
                point.upper_bound,
            );
        }
        println!();
    }

    // A tighter moving-average window reacts faster to recent values
    let params = ModelParameters::new().with("windowSize", 3u64);
    let run = engine.generate(&series, "moving_average", 3, &params)?;
    println!(
        "Moving average with windowSize=3 forecasts {:.2} per period",
        run.points[0].value
    );

    Ok(())
}

fn create_sample_series() -> TimeSeries {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let values = [
        1200.0, 1235.0, 1260.0, 1248.0, 1290.0, 1310.0, 1305.0, 1340.0, 1372.0, 1365.0, 1398.0,
        1420.0, 1451.0, 1470.0,
    ];

    let observations = values
        .iter()
        .enumerate()
        .map(|(i, &value)| Observation::new(start + Duration::days(i as i64), value))
        .collect();

    TimeSeries::from_unsorted("daily_active_users", observations)
}
