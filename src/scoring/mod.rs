//! Attack-surface scoring
//!
//! Per-node scores combine normalized severity, exposure, multiplicative
//! neighbor amplification, and the organizational factor:
//!
//! ```text
//! score = min(cvss / 10, 1) x exposure x PROD(1 + alpha * P_edge) x org_factor
//! ```
//!
//! The amplification product is intentionally unbounded; a highly
//! connected node can reach very high scores. The aggregator sums node
//! scores into the total and classifies the overall risk level.

mod aggregator;
mod node_scorer;

pub use aggregator::{aggregate, SurfaceAggregate};
pub use node_scorer::{NodeScorer, ALPHA};
