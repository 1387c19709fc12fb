//! The regression engine: error taxonomy, fitting, and the session facade.

mod ols;

pub use ols::{FittedModel, OlsEngine, OlsEngineBuilder};

use crate::core::{
    CleanedDataset, EngineOptions, ModelSummary, PredictionRequest, PredictionResult,
};
use thiserror::Error;

/// Errors surfaced by the forecasting core.
///
/// All variants are recoverable by the caller; `fit` and `predict` either
/// return a complete value or fail cleanly with no partial state.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Too few records survive cleaning to support a variance estimate.
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// XᵀX is not invertible within tolerance (collinear or constant
    /// predictor columns).
    #[error("design matrix is singular or nearly singular")]
    SingularDesign,

    /// Caller supplied the wrong number of predictor values.
    #[error("dimension mismatch: expected {expected} predictor values, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Prediction or summary requested before a model was fitted.
    #[error("model has not been fitted")]
    NotFitted,

    /// Invalid engine configuration or confidence level.
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// Dashboard-facing forecasting session.
///
/// Realizes the two-state machine of the core: the session starts
/// `Unfitted` and `predict`/`summary` fail with `NotFitted` until the
/// first successful `fit`. Each `fit` installs a fresh, immutable
/// `FittedModel`; a failed refit reverts the session to `Unfitted` rather
/// than leaving a half-built model behind.
#[derive(Debug, Default)]
pub struct Forecaster {
    engine: OlsEngine,
    model: Option<FittedModel>,
}

impl Forecaster {
    /// Create a session with the given engine options.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            engine: OlsEngine::new(options),
            model: None,
        }
    }

    /// Fit a model on the cleaned dataset, replacing any previous fit.
    pub fn fit(&mut self, data: &CleanedDataset) -> Result<&FittedModel, ForecastError> {
        self.model = None;
        let fitted = self.engine.fit(data)?;
        Ok(&*self.model.insert(fitted))
    }

    /// Forecast at the session's default confidence level.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ForecastError> {
        self.model
            .as_ref()
            .ok_or(ForecastError::NotFitted)?
            .predict(request)
    }

    /// Forecast at an explicit confidence level in (0, 1).
    pub fn predict_with_level(
        &self,
        request: &PredictionRequest,
        level: f64,
    ) -> Result<PredictionResult, ForecastError> {
        self.model
            .as_ref()
            .ok_or(ForecastError::NotFitted)?
            .predict_with_level(request, level)
    }

    /// Model statistics for the reporting layer.
    pub fn summary(&self) -> Result<&ModelSummary, ForecastError> {
        Ok(self.model.as_ref().ok_or(ForecastError::NotFitted)?.summary())
    }

    /// Whether a model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// The current fitted model, if any.
    pub fn model(&self) -> Option<&FittedModel> {
        self.model.as_ref()
    }
}
