//! Fit statistics exposed to the reporting layer.

use faer::Col;
use std::fmt;

/// Complete summary of a fitted model.
///
/// Every field is computed once at fit time from the retained quadratic
/// form; reading the summary never re-decomposes the design matrix. The
/// intercept is reported alongside the slope coefficients, which appear
/// in design-matrix column order.
#[derive(Debug, Clone)]
pub struct ModelSummary {
    /// Predictor column names, aligned with `coefficients`.
    pub predictor_names: Vec<String>,

    /// Intercept term.
    pub intercept: f64,

    /// Slope coefficients (excluding the intercept).
    pub coefficients: Col<f64>,

    /// Residuals (y - fitted values) on the training data.
    pub residuals: Col<f64>,

    /// Fitted values on the training data.
    pub fitted_values: Col<f64>,

    /// Unbiased residual variance estimate σ̂² = RSS / df.
    pub residual_variance: f64,

    /// Residual degrees of freedom, m - (k + 1).
    pub residual_df: usize,

    /// Number of observations the model was fit on.
    pub n_observations: usize,

    /// Number of parameters including the intercept.
    pub n_parameters: usize,

    /// Residual sum of squares.
    pub rss: f64,

    /// Total sum of squares of y about its mean.
    pub tss: f64,

    /// Coefficient of determination.
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    /// F-statistic for overall model significance.
    pub f_statistic: f64,

    /// P-value of the F-statistic.
    pub f_pvalue: f64,

    /// Log-likelihood of the fit.
    pub log_likelihood: f64,

    /// Akaike information criterion.
    pub aic: f64,

    /// Bayesian information criterion.
    pub bic: f64,

    /// Standard error of the intercept.
    pub intercept_std_error: f64,

    /// Standard errors of the slope coefficients.
    pub std_errors: Col<f64>,

    /// t-statistic of the intercept.
    pub intercept_t_statistic: f64,

    /// t-statistics of the slope coefficients.
    pub t_statistics: Col<f64>,

    /// Two-sided p-value of the intercept.
    pub intercept_p_value: f64,

    /// Two-sided p-values of the slope coefficients.
    pub p_values: Col<f64>,

    /// Confidence interval of the intercept (lower, upper).
    pub intercept_conf_interval: (f64, f64),

    /// Lower confidence bounds of the slope coefficients.
    pub conf_interval_lower: Col<f64>,

    /// Upper confidence bounds of the slope coefficients.
    pub conf_interval_upper: Col<f64>,

    /// Confidence level the coefficient intervals were computed at.
    pub confidence_level: f64,
}

impl ModelSummary {
    /// Residual standard error, sqrt(σ̂²).
    pub fn residual_std_error(&self) -> f64 {
        self.residual_variance.sqrt()
    }

    /// Explained sum of squares (TSS - RSS).
    pub fn ess(&self) -> f64 {
        self.tss - self.rss
    }

    /// Mean of the training residuals; ≈ 0 for an intercept model.
    pub fn residual_mean(&self) -> f64 {
        self.residuals.iter().sum::<f64>() / self.n_observations as f64
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "OLS fit: {} observations, {} parameters, {} residual df",
            self.n_observations, self.n_parameters, self.residual_df
        )?;
        writeln!(
            f,
            "  R-squared: {:.4}   Adj. R-squared: {:.4}",
            self.r_squared, self.adj_r_squared
        )?;
        writeln!(
            f,
            "  F-statistic: {:.4} (p = {:.6})   Residual SE: {:.4}",
            self.f_statistic,
            self.f_pvalue,
            self.residual_std_error()
        )?;
        writeln!(
            f,
            "  Log-likelihood: {:.4}   AIC: {:.4}   BIC: {:.4}",
            self.log_likelihood, self.aic, self.bic
        )?;
        writeln!(f)?;

        let alpha = 1.0 - self.confidence_level;
        writeln!(
            f,
            "  {:<14} {:>12} {:>12} {:>10} {:>10} {:>12} {:>12}",
            "term",
            "estimate",
            "std err",
            "t",
            "P>|t|",
            format!("[{:.3}", alpha / 2.0),
            format!("{:.3}]", 1.0 - alpha / 2.0)
        )?;

        writeln!(
            f,
            "  {:<14} {:>12.4} {:>12.4} {:>10.3} {:>10.4} {:>12.4} {:>12.4}",
            "const",
            self.intercept,
            self.intercept_std_error,
            self.intercept_t_statistic,
            self.intercept_p_value,
            self.intercept_conf_interval.0,
            self.intercept_conf_interval.1
        )?;

        for (j, name) in self.predictor_names.iter().enumerate() {
            writeln!(
                f,
                "  {:<14} {:>12.4} {:>12.4} {:>10.3} {:>10.4} {:>12.4} {:>12.4}",
                name,
                self.coefficients[j],
                self.std_errors[j],
                self.t_statistics[j],
                self.p_values[j],
                self.conf_interval_lower[j],
                self.conf_interval_upper[j]
            )?;
        }

        Ok(())
    }
}
