//! # Production forecast walkthrough
//!
//! Mirrors the dashboard flow end to end: a historical production table is
//! cleaned with a configured exclusion list, an OLS model is fitted once,
//! and interval forecasts are served for a handful of planned input
//! combinations.
//!
//! Run with: `cargo run --example forecast`

use production_forecast::prelude::*;

fn main() {
    println!("=== Production Forecast Core ===\n");

    let dataset = historical_table();
    println!(
        "Historical table: {} records, predictors {:?}",
        dataset.n_observations(),
        dataset.predictor_names()
    );

    // Records flagged as anomalous in the source system; opaque configuration.
    let excluded = [16, 19, 22];
    let cleaned = dataset.clean(&excluded).expect("cleaning should succeed");
    println!(
        "After exclusion pass: {} records ({} dropped)\n",
        cleaned.n_observations(),
        cleaned.n_excluded()
    );

    let fitted = OlsEngine::builder()
        .confidence_level(0.95)
        .build()
        .fit(&cleaned)
        .expect("fit should succeed");

    println!("{}", fitted.summary());

    forecast_scenarios(&fitted);
}

/// Thirty months of synthetic production history in the operating ranges of
/// the real process (yield %, productivity, workforce headcount, working
/// hours). Deterministic so repeated runs print identical numbers.
fn historical_table() -> Dataset {
    let mut state: u64 = 123;
    let mut next = move || -> f64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64)
    };

    let mut dataset = Dataset::new(vec!["yield", "productivity", "workforce", "hours"]);
    for _ in 0..30 {
        let yield_pct = 80.0 + 15.0 * next();
        let productivity = 1.0 + next();
        let workforce = (40.0 + 21.0 * next()).floor();
        let hours = (160.0 + 41.0 * next()).floor();
        let noise = 8.0 * (next() - 0.5);

        let production =
            -45.0 + 1.2 * yield_pct + 14.0 * productivity + 0.35 * workforce + 0.1 * hours + noise;

        dataset
            .push(Observation::new(
                vec![yield_pct, productivity, workforce, hours],
                production,
            ))
            .expect("records match the predictor layout");
    }
    dataset
}

/// Forecast a few planned operating points, the way the dashboard would on
/// each slider interaction.
fn forecast_scenarios(fitted: &FittedModel) {
    let scenarios = [
        ("baseline plan", vec![88.0, 1.5, 50.0, 180.0]),
        ("low staffing", vec![88.0, 1.5, 42.0, 180.0]),
        ("high throughput", vec![93.0, 1.9, 58.0, 198.0]),
    ];

    println!("Forecasts (95% prediction intervals, tons):\n");
    println!(
        "{:<18} {:>10} {:>10} {:>10} {:>10}",
        "scenario", "low", "expected", "high", "width"
    );
    println!("{}", "-".repeat(62));

    for (name, inputs) in scenarios {
        let request = PredictionRequest::new(inputs);
        let forecast = fitted.predict(&request).expect("well-formed request");

        println!(
            "{:<18} {:>10.1} {:>10.1} {:>10.1} {:>10.1}",
            name,
            forecast.lower,
            forecast.fit,
            forecast.upper,
            forecast.width()
        );
    }

    println!("\nThe interval covers a single future production run, so it is");
    println!("wider than the uncertainty band of the average response alone.");
}
