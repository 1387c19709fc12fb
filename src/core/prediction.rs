//! Forecast request and result value types.

/// A single new input vector, one value per predictor, in the model's
/// column order. The intercept term is never supplied by the caller; the
/// engine prepends it.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    values: Vec<f64>,
}

impl PredictionRequest {
    /// Create a request from predictor values in column order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The predictor values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of predictor values supplied.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no values were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for PredictionRequest {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for PredictionRequest {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

/// Point forecast with its observation-level interval.
///
/// The interval is for a single future observation, not for the mean
/// response, so it reflects residual noise on top of coefficient
/// uncertainty. Invariant: `lower <= fit <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    /// Point estimate of the outcome.
    pub fit: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
    /// Standard error of the forecast (includes residual noise).
    pub se: f64,
    /// Confidence level the interval was computed at.
    pub level: f64,
}

impl PredictionResult {
    /// Total width of the interval.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
