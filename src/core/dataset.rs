//! Historical observation table and the outlier-exclusion pass.
//!
//! The exclusion rule is a static configuration: a list of record indices
//! known a priori to be anomalous. Indices outside the table are ignored
//! rather than rejected, because historical exclusion lists may refer to a
//! larger original table that has since been truncated.
//!
//! # Example
//!
//! ```
//! use production_forecast::core::{Dataset, Observation};
//!
//! let mut dataset = Dataset::new(vec!["yield", "hours"]);
//! for i in 0..8 {
//!     let row = Observation::new(vec![80.0 + i as f64, 160.0 + i as f64], 100.0 + i as f64);
//!     dataset.push(row).unwrap();
//! }
//!
//! let cleaned = dataset.clean(&[3, 99]).unwrap();
//! assert_eq!(cleaned.n_observations(), 7); // index 99 does not exist, only 3 is dropped
//! ```

use crate::engine::ForecastError;
use faer::{Col, Mat};

/// One historical record: predictor values plus the observed outcome.
///
/// Immutable once ingested; values are stored in the dataset's fixed
/// predictor-column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    predictors: Vec<f64>,
    outcome: f64,
}

impl Observation {
    /// Create an observation from predictor values and the outcome.
    pub fn new(predictors: Vec<f64>, outcome: f64) -> Self {
        Self {
            predictors,
            outcome,
        }
    }

    /// Predictor values in the dataset's column order.
    pub fn predictors(&self) -> &[f64] {
        &self.predictors
    }

    /// The observed outcome.
    pub fn outcome(&self) -> f64 {
        self.outcome
    }
}

/// An ordered sequence of observations sharing one predictor layout.
///
/// Records are indexed 0..n-1 by arrival order. Every record must carry
/// exactly one value per predictor name; `push` rejects anything else.
#[derive(Debug, Clone)]
pub struct Dataset {
    predictor_names: Vec<String>,
    records: Vec<Observation>,
}

impl Dataset {
    /// Create an empty dataset with the given predictor columns.
    pub fn new<S: Into<String>>(predictor_names: Vec<S>) -> Self {
        Self {
            predictor_names: predictor_names.into_iter().map(Into::into).collect(),
            records: Vec::new(),
        }
    }

    /// Create a dataset from a batch of records, validating each arity.
    pub fn from_records<S: Into<String>>(
        predictor_names: Vec<S>,
        records: Vec<Observation>,
    ) -> Result<Self, ForecastError> {
        let mut dataset = Self::new(predictor_names);
        for record in records {
            dataset.push(record)?;
        }
        Ok(dataset)
    }

    /// Append a record.
    ///
    /// Fails with `DimensionMismatch` if the record does not carry exactly
    /// one value per predictor column.
    pub fn push(&mut self, record: Observation) -> Result<(), ForecastError> {
        if record.predictors.len() != self.predictor_names.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.predictor_names.len(),
                got: record.predictors.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Number of records.
    pub fn n_observations(&self) -> usize {
        self.records.len()
    }

    /// Number of predictor columns (k).
    pub fn n_predictors(&self) -> usize {
        self.predictor_names.len()
    }

    /// Predictor column names, in design-matrix order.
    pub fn predictor_names(&self) -> &[String] {
        &self.predictor_names
    }

    /// The records, in arrival order.
    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    /// Remove the configured outlier records and reindex the survivors.
    ///
    /// Every index in `exclude_indices` that lies in `[0, n)` drops the
    /// corresponding record exactly once (duplicates in the list are
    /// harmless); out-of-range indices are a silent no-op. Survivors keep
    /// their original relative order and are reindexed from 0.
    ///
    /// Fails with `InsufficientData` if fewer than k + 2 records survive,
    /// the minimum for a non-degenerate residual-variance estimate.
    pub fn clean(&self, exclude_indices: &[usize]) -> Result<CleanedDataset, ForecastError> {
        let n = self.records.len();

        let mut dropped = vec![false; n];
        for &idx in exclude_indices {
            if idx < n {
                dropped[idx] = true;
            }
        }

        let kept_indices: Vec<usize> = (0..n).filter(|&i| !dropped[i]).collect();
        let m = kept_indices.len();

        let needed = self.n_predictors() + 2;
        if m < needed {
            return Err(ForecastError::InsufficientData { needed, got: m });
        }

        let records = kept_indices
            .iter()
            .map(|&i| self.records[i].clone())
            .collect();

        Ok(CleanedDataset {
            predictor_names: self.predictor_names.clone(),
            records,
            kept_indices,
            n_original: n,
        })
    }
}

/// A dataset after the outlier-exclusion pass, ready for fitting.
///
/// Survivors are reindexed contiguously from 0; `kept_indices` maps each
/// surviving row back to its index in the original table.
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    predictor_names: Vec<String>,
    records: Vec<Observation>,
    kept_indices: Vec<usize>,
    n_original: usize,
}

impl CleanedDataset {
    /// Number of surviving records (m).
    pub fn n_observations(&self) -> usize {
        self.records.len()
    }

    /// Number of predictor columns (k).
    pub fn n_predictors(&self) -> usize {
        self.predictor_names.len()
    }

    /// Predictor column names, in design-matrix order.
    pub fn predictor_names(&self) -> &[String] {
        &self.predictor_names
    }

    /// The surviving records, in preserved order.
    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    /// Original index of each surviving row.
    pub fn kept_indices(&self) -> &[usize] {
        &self.kept_indices
    }

    /// Number of records in the table before exclusion.
    pub fn n_original(&self) -> usize {
        self.n_original
    }

    /// Number of records removed by the exclusion pass.
    pub fn n_excluded(&self) -> usize {
        self.n_original - self.records.len()
    }

    /// The m × (k + 1) design matrix: a constant column prepended to the
    /// predictor columns. Column order is fixed and matches prediction time.
    pub fn design_matrix(&self) -> Mat<f64> {
        let m = self.records.len();
        let p = self.predictor_names.len() + 1;
        Mat::from_fn(m, p, |i, j| {
            if j == 0 {
                1.0
            } else {
                self.records[i].predictors[j - 1]
            }
        })
    }

    /// The outcome vector y, aligned with the design-matrix rows.
    pub fn outcomes(&self) -> Col<f64> {
        Col::from_fn(self.records.len(), |i| self.records[i].outcome)
    }
}
