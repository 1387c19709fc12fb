//! Observation-level interval calculations.
//!
//! The interval reported by this crate is for one future observation
//! Y | X = x₀, with variance σ̂² · (1 + h₀). The narrower σ̂² · h₀ form
//! answers a different question (uncertainty of the mean response) and is
//! deliberately not offered.

use crate::engine::ForecastError;
use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided Student-t critical value t_{α/2, df} for the given level.
pub fn t_critical(df: f64, level: f64) -> f64 {
    let t_dist = StudentsT::new(0.0, 1.0, df).expect("valid t-distribution parameters");
    let alpha = 1.0 - level;
    t_dist.inverse_cdf(1.0 - alpha / 2.0)
}

/// Leverage of a new augmented input row: h₀ = x̃₀ᵀ (XᵀX)⁻¹ x̃₀.
///
/// A non-negative scalar quantifying how far the request lies from the
/// historical design centroid, in the metric induced by the fit. Unlike
/// a training-row hat diagonal, h₀ may exceed 1 under extrapolation.
pub fn leverage(x0: &Col<f64>, xtx_inv: &Mat<f64>) -> f64 {
    let p = x0.nrows();

    // (XᵀX)⁻¹ x̃₀
    let mut xtx_inv_x0 = Col::zeros(p);
    for i in 0..p {
        let mut sum = 0.0;
        for j in 0..p {
            sum += xtx_inv[(i, j)] * x0[j];
        }
        xtx_inv_x0[i] = sum;
    }

    // x̃₀ᵀ ((XᵀX)⁻¹ x̃₀)
    let mut h = 0.0;
    for i in 0..p {
        h += x0[i] * xtx_inv_x0[i];
    }

    h
}

/// Interval for one future observation at the given inputs.
///
/// Returns `(lower, upper, se)` with
/// se = sqrt(σ̂² · (1 + h₀)) and half-width t_{α/2, df} · se.
pub fn observation_interval(fit: f64, sigma2: f64, h0: f64, df: f64, level: f64) -> (f64, f64, f64) {
    let var = sigma2 * (1.0 + h0);
    let se = if var >= 0.0 { var.sqrt() } else { f64::NAN };

    let margin = t_critical(df, level) * se;
    (fit - margin, fit + margin, se)
}

/// Compute (XᵀX)⁻¹ of an already-augmented design matrix.
///
/// The inverse is retained by the fitted model because prediction-time
/// leverage needs it unscaled. Fails with `SingularDesign` if a pivot of
/// the factorization falls below `tolerance`.
pub fn xtx_inverse(x: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, ForecastError> {
    let xtx = x.transpose() * x;
    matrix_inverse(&xtx, tolerance)
}

/// General matrix inverse using QR decomposition with back-substitution.
fn matrix_inverse(matrix: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, ForecastError> {
    let n = matrix.nrows();

    let qr = matrix.qr();
    let q = qr.compute_q();
    let r = qr.compute_r();

    for i in 0..n {
        if r[(i, i)].abs() < tolerance {
            return Err(ForecastError::SingularDesign);
        }
    }

    // Solve R * X = Qᵀ for each column of the identity to get the inverse.
    let mut inv = Mat::zeros(n, n);
    let qt = q.transpose();

    for col in 0..n {
        for i in (0..n).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..n {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }

    Ok(inv)
}
