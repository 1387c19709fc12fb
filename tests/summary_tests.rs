//! Model summary statistics exposed to the reporting layer.

mod common;

use approx::assert_relative_eq;
use production_forecast::prelude::*;

fn fitted_summary() -> ModelSummary {
    let dataset = common::production_dataset(30, 42);
    let cleaned = dataset.clean(&[16, 19, 22]).expect("clean should succeed");
    OlsEngine::default()
        .fit(&cleaned)
        .expect("fit should succeed")
        .summary()
        .clone()
}

#[test]
fn test_r_squared_bounds() {
    let summary = fitted_summary();

    assert!(summary.r_squared >= 0.0 && summary.r_squared <= 1.0);
    assert!(
        summary.adj_r_squared <= summary.r_squared + 1e-10,
        "adjusted R² should not exceed R²"
    );
}

#[test]
fn test_sum_of_squares_decomposition() {
    let summary = fitted_summary();

    assert!(summary.rss >= 0.0);
    assert!(summary.tss >= summary.rss);
    assert_relative_eq!(summary.ess(), summary.tss - summary.rss, epsilon = 1e-10);
    assert_relative_eq!(
        summary.r_squared,
        1.0 - summary.rss / summary.tss,
        epsilon = 1e-10
    );
}

#[test]
fn test_residual_variance_is_rss_over_df() {
    let summary = fitted_summary();

    assert_relative_eq!(
        summary.residual_variance,
        summary.rss / summary.residual_df as f64,
        epsilon = 1e-10
    );
    assert_relative_eq!(
        summary.residual_std_error(),
        summary.residual_variance.sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn test_f_statistic_and_pvalue() {
    let summary = fitted_summary();

    assert!(summary.f_statistic.is_finite());
    assert!(summary.f_statistic >= 0.0);
    assert!(summary.f_pvalue >= 0.0 && summary.f_pvalue <= 1.0);

    // The generator has a strong linear signal; the overall fit should be
    // clearly significant.
    assert!(
        summary.f_pvalue < 0.01,
        "F p-value {} should be small",
        summary.f_pvalue
    );
}

#[test]
fn test_information_criteria_finite_and_ordered() {
    let summary = fitted_summary();

    assert!(summary.log_likelihood.is_finite());
    assert!(summary.aic.is_finite());
    assert!(summary.bic.is_finite());

    // BIC's parameter penalty ln(27) exceeds AIC's 2 per parameter here.
    assert!(summary.bic > summary.aic);
}

#[test]
fn test_coefficient_table_shape_and_intervals() {
    let summary = fitted_summary();

    assert_eq!(summary.predictor_names.len(), 4);
    assert_eq!(summary.coefficients.nrows(), 4);
    assert_eq!(summary.std_errors.nrows(), 4);
    assert_eq!(summary.t_statistics.nrows(), 4);
    assert_eq!(summary.p_values.nrows(), 4);

    for j in 0..4 {
        assert!(summary.std_errors[j] > 0.0, "SE[{}] should be positive", j);
        assert!(
            summary.p_values[j] >= 0.0 && summary.p_values[j] <= 1.0,
            "p-value[{}] out of bounds",
            j
        );
        assert!(
            summary.conf_interval_lower[j] <= summary.coefficients[j]
                && summary.coefficients[j] <= summary.conf_interval_upper[j],
            "CI should contain the estimate for coefficient {}",
            j
        );
    }

    let (lo, hi) = summary.intercept_conf_interval;
    assert!(lo <= summary.intercept && summary.intercept <= hi);
    assert!(summary.intercept_std_error > 0.0);
}

#[test]
fn test_display_renders_all_terms() {
    let summary = fitted_summary();
    let rendered = format!("{}", summary);

    assert!(rendered.contains("R-squared"));
    assert!(rendered.contains("const"));
    for name in common::PREDICTORS {
        assert!(rendered.contains(name), "missing term {}", name);
    }
}

#[test]
fn test_summary_is_read_only_and_stable() {
    let dataset = common::production_dataset(30, 42);
    let cleaned = dataset.clean(&[16, 19, 22]).expect("clean should succeed");
    let fitted = OlsEngine::default().fit(&cleaned).expect("fit should succeed");

    // Two reads of the summary observe identical values.
    let first = fitted.summary().r_squared;
    let _ = fitted
        .predict(&PredictionRequest::new(vec![88.0, 1.5, 50.0, 180.0]))
        .expect("predict should succeed");
    let second = fitted.summary().r_squared;

    assert_eq!(first, second);
}
