//! Regression core for production-outcome forecasting.
//!
//! This library fits an ordinary-least-squares model to a historical table
//! of process inputs (after a configured outlier-exclusion pass) and serves,
//! for any new combination of inputs, a point forecast together with an
//! observation-level prediction interval. The interval accounts for both
//! coefficient uncertainty and residual noise, so it is the right range for
//! a single future production run, not merely for the average response.
//!
//! # Example
//!
//! ```rust,ignore
//! use production_forecast::prelude::*;
//!
//! // Historical table supplied by the caller, outliers dropped by index.
//! let cleaned = dataset.clean(&[16, 19, 22])?;
//!
//! // Fit once per session; the fitted model is immutable.
//! let fitted = OlsEngine::builder()
//!     .confidence_level(0.95)
//!     .build()
//!     .fit(&cleaned)?;
//!
//! // Forecast a new production run.
//! let forecast = fitted.predict(&PredictionRequest::new(vec![88.0, 1.5, 50.0, 180.0]))?;
//! println!("{:.1} tons ({:.1} – {:.1})", forecast.fit, forecast.lower, forecast.upper);
//!
//! // Model statistics for the reporting layer.
//! println!("{}", fitted.summary());
//! ```

pub mod core;
pub mod engine;
pub mod inference;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CleanedDataset, Dataset, EngineOptions, EngineOptionsBuilder, ModelSummary, Observation,
        OptionsError, PredictionRequest, PredictionResult,
    };
    pub use crate::engine::{FittedModel, ForecastError, Forecaster, OlsEngine, OlsEngineBuilder};
}

pub use crate::core::{
    CleanedDataset, Dataset, EngineOptions, ModelSummary, Observation, PredictionRequest,
    PredictionResult,
};
pub use crate::engine::{FittedModel, ForecastError, Forecaster, OlsEngine};
