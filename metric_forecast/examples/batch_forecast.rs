use chrono::{Duration, Utc};
use metric_forecast::{
    ForecastRequest, ForecastService, MemorySource, ModelParameters, Observation,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("Metric Forecast: Batch Forecasting Example");
    println!("==========================================\n");

    let service = ForecastService::new(create_sample_source());

    // One request per metric; the error_rate metric has no history, so
    // its entry fails while the others still succeed.
    let requests = vec![
        ForecastRequest::new("cpu_usage").with_horizon(7),
        ForecastRequest::new("memory_usage")
            .with_model("moving_average")
            .with_horizon(7)
            .with_parameters(ModelParameters::new().with("windowSize", 5u64)),
        ForecastRequest::new("error_rate").with_model("trend"),
    ];

    let results = service.generate_batch(&requests);

    for (request, result) in requests.iter().zip(&results) {
        match result {
            Ok(run) => {
                println!(
                    "{}: {} points via {} (accuracy {:.2})",
                    run.metric_name,
                    run.points.len(),
                    run.model_type,
                    run.accuracy,
                );
                let first = &run.points[0];
                println!(
                    "  next period: {:.2} in [{:.2}, {:.2}]",
                    first.value, first.lower_bound, first.upper_bound
                );
            }
            Err(error) => println!("{}: failed - {}", request.metric_name, error),
        }
    }

    let succeeded = results.iter().filter(|r| r.is_ok()).count();
    println!("\nProcessed {} requests, {} succeeded", results.len(), succeeded);

    Ok(())
}

fn create_sample_source() -> MemorySource {
    let now = Utc::now();
    let mut source = MemorySource::new();

    for day in 0..30 {
        let timestamp = now - Duration::days(30 - day);
        let cpu = 42.0 + day as f64 * 0.8 + if day % 7 == 0 { 6.0 } else { 0.0 };
        let memory = 2048.0 + day as f64 * 12.0 - if day % 5 == 0 { 40.0 } else { 0.0 };

        source.record("cpu_usage", Observation::new(timestamp, cpu));
        source.record("memory_usage", Observation::new(timestamp, memory));
    }

    source
}
