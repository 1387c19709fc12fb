//! Coefficient inference calculations.
//!
//! All routines operate on the augmented parameter vector (intercept in
//! position 0) and the (XᵀX)⁻¹ retained by the fitted model, so the design
//! matrix is never re-decomposed after fitting.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, StudentsT};

use super::prediction::t_critical;

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Standard errors of the augmented coefficient vector.
    ///
    /// SE(β_j) = sqrt(σ̂² · (XᵀX)⁻¹_{jj})
    pub fn standard_errors(xtx_inv: &Mat<f64>, sigma2: f64) -> Col<f64> {
        let p = xtx_inv.nrows();
        let mut se = Col::zeros(p);

        for j in 0..p {
            let var = sigma2 * xtx_inv[(j, j)];
            se[j] = if var >= 0.0 { var.sqrt() } else { f64::NAN };
        }

        se
    }

    /// t-statistics, t_j = β_j / SE(β_j).
    pub fn t_statistics(beta: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        let p = beta.nrows();
        let mut t_stats = Col::zeros(p);

        for j in 0..p {
            if std_errors[j].is_nan() || std_errors[j] == 0.0 {
                t_stats[j] = f64::NAN;
            } else {
                t_stats[j] = beta[j] / std_errors[j];
            }
        }

        t_stats
    }

    /// Two-sided p-values, p_j = 2 · P(|T| > |t_j|) with T ~ t(df).
    pub fn p_values(t_statistics: &Col<f64>, df: f64) -> Col<f64> {
        let p = t_statistics.nrows();
        let mut p_vals = Col::zeros(p);

        if df <= 0.0 {
            for j in 0..p {
                p_vals[j] = f64::NAN;
            }
            return p_vals;
        }

        let t_dist = StudentsT::new(0.0, 1.0, df).expect("valid t-distribution parameters");

        for j in 0..p {
            if t_statistics[j].is_nan() {
                p_vals[j] = f64::NAN;
            } else {
                let abs_t = t_statistics[j].abs();
                p_vals[j] = 2.0 * (1.0 - t_dist.cdf(abs_t));
            }
        }

        p_vals
    }

    /// Confidence intervals, β_j ± t_{α/2, df} · SE(β_j).
    pub fn confidence_intervals(
        beta: &Col<f64>,
        std_errors: &Col<f64>,
        df: f64,
        level: f64,
    ) -> (Col<f64>, Col<f64>) {
        let p = beta.nrows();
        let mut lower = Col::zeros(p);
        let mut upper = Col::zeros(p);

        let t_crit = t_critical(df, level);

        for j in 0..p {
            if std_errors[j].is_nan() {
                lower[j] = f64::NAN;
                upper[j] = f64::NAN;
            } else {
                let margin = t_crit * std_errors[j];
                lower[j] = beta[j] - margin;
                upper[j] = beta[j] + margin;
            }
        }

        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_errors_from_diagonal() {
        let mut xtx_inv = Mat::zeros(2, 2);
        xtx_inv[(0, 0)] = 0.25;
        xtx_inv[(1, 1)] = 4.0;

        let se = CoefficientInference::standard_errors(&xtx_inv, 2.0);

        assert!((se[0] - (2.0 * 0.25_f64).sqrt()).abs() < 1e-12);
        assert!((se[1] - (2.0 * 4.0_f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_t_statistics() {
        let beta = Col::from_fn(3, |i| (i + 1) as f64);
        let std_errors = Col::from_fn(3, |_| 0.5);

        let t_stats = CoefficientInference::t_statistics(&beta, &std_errors);

        assert!((t_stats[0] - 2.0).abs() < 1e-10);
        assert!((t_stats[1] - 4.0).abs() < 1e-10);
        assert!((t_stats[2] - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_t_statistics_zero_se_is_nan() {
        let beta = Col::from_fn(1, |_| 1.0);
        let std_errors = Col::from_fn(1, |_| 0.0);

        let t_stats = CoefficientInference::t_statistics(&beta, &std_errors);
        assert!(t_stats[0].is_nan());
    }

    #[test]
    fn test_p_values_bounds() {
        let t_stats = Col::from_fn(3, |i| (i + 1) as f64);
        let p_vals = CoefficientInference::p_values(&t_stats, 10.0);

        for p in p_vals.iter() {
            assert!(*p >= 0.0 && *p <= 1.0);
        }
    }

    #[test]
    fn test_confidence_intervals_contain_estimate() {
        let beta = Col::from_fn(2, |i| i as f64 * 3.0 - 1.0);
        let std_errors = Col::from_fn(2, |_| 0.7);

        let (lower, upper) = CoefficientInference::confidence_intervals(&beta, &std_errors, 20.0, 0.95);

        for j in 0..2 {
            assert!(lower[j] < beta[j] && beta[j] < upper[j]);
        }
    }
}
