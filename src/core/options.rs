//! Engine configuration.

use thiserror::Error;

/// Configuration for the regression engine.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Confidence level used for intervals when no explicit level is given
    /// (default: 0.95).
    pub confidence_level: f64,
    /// Tolerance below which a QR pivot is treated as zero, flagging the
    /// design matrix as singular (default: 1e-10).
    pub rank_tolerance: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            rank_tolerance: 1e-10,
        }
    }
}

/// Errors that can occur when validating engine options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("rank_tolerance must be positive, got {0}")]
    InvalidRankTolerance(f64),
}

impl EngineOptions {
    /// Create a new builder with default options.
    pub fn builder() -> EngineOptionsBuilder {
        EngineOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        validate_level(self.confidence_level)?;
        if self.rank_tolerance <= 0.0 {
            return Err(OptionsError::InvalidRankTolerance(self.rank_tolerance));
        }
        Ok(())
    }
}

/// Check that a confidence level lies strictly inside (0, 1).
pub(crate) fn validate_level(level: f64) -> Result<(), OptionsError> {
    if level <= 0.0 || level >= 1.0 || level.is_nan() {
        return Err(OptionsError::InvalidConfidenceLevel(level));
    }
    Ok(())
}

/// Builder for `EngineOptions`.
#[derive(Debug, Clone, Default)]
pub struct EngineOptionsBuilder {
    options: EngineOptions,
}

impl EngineOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default confidence level for intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Set the pivot tolerance for singularity detection.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<EngineOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> EngineOptions {
        self.options
    }
}
