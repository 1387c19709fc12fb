//! Ordinary least squares fitting and interval prediction.

use crate::core::validate_level;
use crate::core::{
    CleanedDataset, EngineOptions, EngineOptionsBuilder, ModelSummary, PredictionRequest,
    PredictionResult,
};
use crate::engine::ForecastError;
use crate::inference::{
    leverage, observation_interval, t_critical, xtx_inverse, CoefficientInference,
};
use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Ordinary least squares estimator — the `Unfitted` state of the engine.
///
/// Holds configuration only. `fit` solves the least-squares problem by QR
/// decomposition of the design matrix (never by explicit normal-equation
/// inversion for β) and returns a new, independent [`FittedModel`] each
/// call; the engine itself never accumulates state.
///
/// # Example
///
/// ```rust,ignore
/// let fitted = OlsEngine::builder()
///     .confidence_level(0.95)
///     .build()
///     .fit(&cleaned)?;
///
/// let forecast = fitted.predict(&request)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsEngine {
    options: EngineOptions,
}

impl OlsEngine {
    /// Create a new engine with the given options.
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the engine.
    pub fn builder() -> OlsEngineBuilder {
        OlsEngineBuilder::default()
    }

    /// The engine configuration.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Fit the linear model to a cleaned dataset.
    ///
    /// Fails with `InsufficientData` unless m > k + 1 strictly, and with
    /// `SingularDesign` if the design matrix is rank deficient within the
    /// configured tolerance (constant or collinear predictor columns).
    /// Either returns a complete, internally consistent model or fails
    /// cleanly leaving nothing behind.
    pub fn fit(&self, data: &CleanedDataset) -> Result<FittedModel, ForecastError> {
        self.options.validate()?;

        let m = data.n_observations();
        let k = data.n_predictors();
        let p = k + 1;

        if m <= p {
            return Err(ForecastError::InsufficientData {
                needed: p + 1,
                got: m,
            });
        }

        let x = data.design_matrix();
        let y = data.outcomes();

        let beta = solve_least_squares(&x, &y, self.options.rank_tolerance)?;

        // Residuals and the unbiased variance estimate.
        let mut fitted_values = Col::zeros(m);
        let mut residuals = Col::zeros(m);
        for i in 0..m {
            let mut pred = 0.0;
            for j in 0..p {
                pred += x[(i, j)] * beta[j];
            }
            fitted_values[i] = pred;
            residuals[i] = y[i] - pred;
        }

        let rss: f64 = residuals.iter().map(|&e| e * e).sum();
        let df = m - p;
        let sigma2 = rss / df as f64;

        // Retained for prediction-time leverage; must stay unscaled.
        let xtx_inv = xtx_inverse(&x, self.options.rank_tolerance)?;

        let summary = build_summary(
            data,
            &y,
            &beta,
            residuals,
            fitted_values,
            rss,
            df,
            sigma2,
            &xtx_inv,
            self.options.confidence_level,
        );

        Ok(FittedModel {
            predictor_names: data.predictor_names().to_vec(),
            beta,
            xtx_inv,
            residual_variance: sigma2,
            df,
            default_level: self.options.confidence_level,
            summary,
        })
    }
}

/// Solve the least-squares problem by Householder QR with back-substitution.
fn solve_least_squares(
    x: &Mat<f64>,
    y: &Col<f64>,
    tolerance: f64,
) -> Result<Col<f64>, ForecastError> {
    let p = x.ncols();

    let qr = x.qr();
    let q = qr.compute_q();
    let r = qr.compute_r();

    // Explicit pivot check: a collapsed diagonal means a constant or
    // collinear predictor column, and must never leak NaN coefficients.
    for i in 0..p {
        if r[(i, i)].abs() < tolerance {
            return Err(ForecastError::SingularDesign);
        }
    }

    let qty = q.transpose() * y;

    let mut beta = Col::zeros(p);
    for i in (0..p).rev() {
        let mut sum = qty[i];
        for j in (i + 1)..p {
            sum -= r[(i, j)] * beta[j];
        }
        beta[i] = sum / r[(i, i)];
    }

    Ok(beta)
}

/// Assemble the full fit summary from quantities already computed.
#[allow(clippy::too_many_arguments)]
fn build_summary(
    data: &CleanedDataset,
    y: &Col<f64>,
    beta: &Col<f64>,
    residuals: Col<f64>,
    fitted_values: Col<f64>,
    rss: f64,
    df: usize,
    sigma2: f64,
    xtx_inv: &Mat<f64>,
    confidence_level: f64,
) -> ModelSummary {
    let m = data.n_observations();
    let k = data.n_predictors();
    let p = k + 1;

    let y_mean: f64 = y.iter().sum::<f64>() / m as f64;
    let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    let r_squared = if tss > 0.0 {
        (1.0 - rss / tss).clamp(0.0, 1.0)
    } else if rss < 1e-10 {
        1.0
    } else {
        0.0
    };

    let df_total = (m - 1) as f64;
    let df_resid = df as f64;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * df_total / df_resid;

    let ess = tss - rss;
    let df_model = k as f64;
    let f_statistic = if df_model > 0.0 && sigma2 > 0.0 {
        (ess / df_model) / sigma2
    } else {
        f64::NAN
    };

    let f_pvalue = if f_statistic.is_finite() {
        let f_dist = FisherSnedecor::new(df_model, df_resid).ok();
        f_dist.map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
    } else {
        f64::NAN
    };

    let log_likelihood = if sigma2 > 0.0 {
        -0.5 * m as f64 * (1.0 + (2.0 * std::f64::consts::PI).ln() + sigma2.ln())
    } else {
        f64::NAN
    };

    let n_params = p as f64;
    let aic = 2.0 * n_params - 2.0 * log_likelihood;
    let bic = n_params * (m as f64).ln() - 2.0 * log_likelihood;

    // Per-term inference on the augmented vector, intercept in slot 0.
    let se = CoefficientInference::standard_errors(xtx_inv, sigma2);
    let t_stats = CoefficientInference::t_statistics(beta, &se);
    let p_vals = CoefficientInference::p_values(&t_stats, df_resid);
    let (ci_lower, ci_upper) =
        CoefficientInference::confidence_intervals(beta, &se, df_resid, confidence_level);

    ModelSummary {
        predictor_names: data.predictor_names().to_vec(),
        intercept: beta[0],
        coefficients: Col::from_fn(k, |j| beta[j + 1]),
        residuals,
        fitted_values,
        residual_variance: sigma2,
        residual_df: df,
        n_observations: m,
        n_parameters: p,
        rss,
        tss,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_pvalue,
        log_likelihood,
        aic,
        bic,
        intercept_std_error: se[0],
        std_errors: Col::from_fn(k, |j| se[j + 1]),
        intercept_t_statistic: t_stats[0],
        t_statistics: Col::from_fn(k, |j| t_stats[j + 1]),
        intercept_p_value: p_vals[0],
        p_values: Col::from_fn(k, |j| p_vals[j + 1]),
        intercept_conf_interval: (ci_lower[0], ci_upper[0]),
        conf_interval_lower: Col::from_fn(k, |j| ci_lower[j + 1]),
        conf_interval_upper: Col::from_fn(k, |j| ci_upper[j + 1]),
        confidence_level,
    }
}

/// A fitted model — the `Fitted` state of the engine.
///
/// Owns the coefficient vector, the residual-variance estimate, the
/// degrees of freedom and the unscaled (XᵀX)⁻¹ needed for prediction-time
/// leverage. Immutable after construction, so independent callers may
/// share one instance read-only without coordination.
#[derive(Debug, Clone)]
pub struct FittedModel {
    predictor_names: Vec<String>,
    /// Augmented coefficient vector, intercept in position 0.
    beta: Col<f64>,
    /// (XᵀX)⁻¹ of the augmented design matrix, retained unscaled.
    xtx_inv: Mat<f64>,
    residual_variance: f64,
    df: usize,
    default_level: f64,
    summary: ModelSummary,
}

impl FittedModel {
    /// Forecast at the engine's configured default confidence level.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ForecastError> {
        self.predict_with_level(request, self.default_level)
    }

    /// Forecast one future observation at an explicit confidence level.
    ///
    /// The interval variance is σ̂² · (1 + h₀) — observation level, wider
    /// than the mean-response interval — so the range is appropriate for a
    /// single future production run.
    pub fn predict_with_level(
        &self,
        request: &PredictionRequest,
        level: f64,
    ) -> Result<PredictionResult, ForecastError> {
        let k = self.predictor_names.len();
        if request.len() != k {
            return Err(ForecastError::DimensionMismatch {
                expected: k,
                got: request.len(),
            });
        }
        validate_level(level)?;

        let p = k + 1;
        let mut x0 = Col::zeros(p);
        x0[0] = 1.0;
        for (j, &value) in request.values().iter().enumerate() {
            x0[j + 1] = value;
        }

        let mut fit = 0.0;
        for j in 0..p {
            fit += x0[j] * self.beta[j];
        }

        let h0 = leverage(&x0, &self.xtx_inv);
        let (lower, upper, se) =
            observation_interval(fit, self.residual_variance, h0, self.df as f64, level);

        Ok(PredictionResult {
            fit,
            lower,
            upper,
            se,
            level,
        })
    }

    /// Model statistics for external reporting. Pure and read-only.
    pub fn summary(&self) -> &ModelSummary {
        &self.summary
    }

    /// Predictor column names, in design-matrix order.
    pub fn predictor_names(&self) -> &[String] {
        &self.predictor_names
    }

    /// Number of predictor columns (k).
    pub fn n_predictors(&self) -> usize {
        self.predictor_names.len()
    }

    /// Intercept term.
    pub fn intercept(&self) -> f64 {
        self.beta[0]
    }

    /// Slope coefficients, excluding the intercept.
    pub fn coefficients(&self) -> &Col<f64> {
        &self.summary.coefficients
    }

    /// Residual degrees of freedom, m - (k + 1).
    pub fn residual_df(&self) -> usize {
        self.df
    }

    /// Unbiased residual variance estimate σ̂².
    pub fn residual_variance(&self) -> f64 {
        self.residual_variance
    }

    /// Coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.summary.r_squared
    }

    /// Two-sided Student-t critical value at the given level for this
    /// model's degrees of freedom.
    pub fn critical_value(&self, level: f64) -> Result<f64, ForecastError> {
        validate_level(level)?;
        Ok(t_critical(self.df as f64, level))
    }
}

/// Builder for `OlsEngine`.
#[derive(Debug, Clone, Default)]
pub struct OlsEngineBuilder {
    builder: EngineOptionsBuilder,
}

impl OlsEngineBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default confidence level for intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the pivot tolerance for singularity detection.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Build the engine. Options are re-validated at fit time.
    pub fn build(self) -> OlsEngine {
        OlsEngine::new(self.builder.build_unchecked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dataset, Observation};

    fn simple_dataset() -> CleanedDataset {
        // y = 2 + 3x, one predictor, no noise.
        let mut dataset = Dataset::new(vec!["x"]);
        for i in 0..5 {
            dataset
                .push(Observation::new(vec![i as f64], 2.0 + 3.0 * i as f64))
                .unwrap();
        }
        dataset.clean(&[]).unwrap()
    }

    #[test]
    fn test_simple_fit() {
        let fitted = OlsEngine::default().fit(&simple_dataset()).expect("fit");

        assert!((fitted.intercept() - 2.0).abs() < 1e-10);
        assert!((fitted.coefficients()[0] - 3.0).abs() < 1e-10);
        assert_eq!(fitted.residual_df(), 3);
    }

    #[test]
    fn test_predict_point() {
        let fitted = OlsEngine::default().fit(&simple_dataset()).expect("fit");

        let result = fitted
            .predict(&PredictionRequest::new(vec![10.0]))
            .expect("predict");

        assert!((result.fit - 32.0).abs() < 1e-9);
        assert!(result.lower <= result.fit && result.fit <= result.upper);
    }

    #[test]
    fn test_predict_rejects_bad_level() {
        let fitted = OlsEngine::default().fit(&simple_dataset()).expect("fit");

        let result = fitted.predict_with_level(&PredictionRequest::new(vec![1.0]), 1.0);
        assert!(matches!(result, Err(ForecastError::InvalidOptions(_))));
    }
}
