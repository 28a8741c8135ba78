//! Budget-constrained mitigation planning
//!
//! Greedy rank-then-admit selection: the highest-scoring assets are
//! considered in order and admitted while they fit the remaining budget.
//! This is provably suboptimal versus a bounded knapsack (a cheaper
//! low-rank candidate is never preferred over an expensive high-rank one
//! even when it would fit better); the behavior is preserved exactly as
//! a known limitation of the selection heuristic.

mod catalog;
mod planner;

pub use catalog::{CategoryProfile, MitigationCatalog};
pub use planner::{MitigationPlanner, MAX_CANDIDATES, ROI_PER_RISK_POINT};
