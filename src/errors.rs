//! Typed errors for graph construction and analysis configuration.
//!
//! All validation happens eagerly when assets, edges, or analysis
//! parameters are built. Topological dead ends (no path between a
//! source/sink pair) and budget exhaustion are ordinary outcomes, not
//! errors, and never surface here.

use thiserror::Error;

/// Errors raised while building an infrastructure graph or configuring
/// an analysis run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("asset `{0}`: CVSS score {1} outside [0, 10]")]
    ScoreOutOfRange(String, f64),

    #[error("asset `{0}`: exposure {1} outside [0, 1]")]
    ExposureOutOfRange(String, f64),

    #[error("asset `{0}`: privilege domain `{1}` level {2} outside [0, 1]")]
    PrivilegeOutOfRange(String, String, f64),

    #[error("duplicate asset id `{0}`")]
    DuplicateAsset(String),

    #[error("edge references unknown asset `{0}`")]
    UnknownAsset(String),

    #[error("edge {0} -- {1}: propagation probability {2} outside (0, 1]")]
    InvalidPropagation(String, String, f64),

    #[error("invalid analysis parameter: {0}")]
    InvalidParameter(String),
}
