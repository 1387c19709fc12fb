//! Core types for the forecasting pipeline.

mod dataset;
mod options;
mod prediction;
mod summary;

pub use dataset::{CleanedDataset, Dataset, Observation};
pub use options::{EngineOptions, EngineOptionsBuilder, OptionsError};
pub(crate) use options::validate_level;
pub use prediction::{PredictionRequest, PredictionResult};
pub use summary::ModelSummary;
