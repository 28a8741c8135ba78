//! Analysis parameters
//!
//! The engine reads no files, environment variables, or network
//! resources; configuration loading is an external collaborator's job.
//! This struct is the whole input surface besides the graph itself.

use serde::{Deserialize, Serialize};

use crate::analysis::{DEFAULT_CUTOFF, DEFAULT_THRESHOLD};
use crate::errors::ModelError;

pub const DEFAULT_ORG_FACTOR: f64 = 1.0;
pub const DEFAULT_BUDGET: u64 = 100_000;

/// Scalar parameters for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Non-technical risk multiplier applied uniformly to node scores
    pub org_factor: f64,
    /// Minimum compromise probability for a reported critical path.
    /// Values above 1 are legal and simply yield an empty path list.
    pub path_threshold: f64,
    /// Maximum critical-path length in edges
    pub path_cutoff: usize,
    /// Mitigation budget in whole currency units; zero is legal and
    /// plans nothing
    pub budget: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            org_factor: DEFAULT_ORG_FACTOR,
            path_threshold: DEFAULT_THRESHOLD,
            path_cutoff: DEFAULT_CUTOFF,
            budget: DEFAULT_BUDGET,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_org_factor(mut self, org_factor: f64) -> Self {
        self.org_factor = org_factor;
        self
    }

    pub fn with_path_threshold(mut self, threshold: f64) -> Self {
        self.path_threshold = threshold;
        self
    }

    pub fn with_path_cutoff(mut self, cutoff: usize) -> Self {
        self.path_cutoff = cutoff;
        self
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Reject parameters that would silently corrupt scores.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.org_factor.is_finite() || self.org_factor <= 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "org_factor must be a positive finite number, got {}",
                self.org_factor
            )));
        }
        if !self.path_threshold.is_finite() || self.path_threshold <= 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "path_threshold must be a positive finite number, got {}",
                self.path_threshold
            )));
        }
        Ok(())
    }
}
