//! Critical-path analysis
//!
//! Enumerates bounded-length simple paths from highly exposed assets to
//! high-value targets and scores each path's compromise probability and
//! aggregate risk.

mod critical_paths;

pub use critical_paths::{CriticalPathAnalyzer, DEFAULT_CUTOFF, DEFAULT_THRESHOLD, EXPOSED_SOURCE_MIN};
