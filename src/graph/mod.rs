//! Infrastructure graph model
//!
//! Pure Rust implementation using petgraph. The graph owns all asset and
//! edge data for the duration of an analysis; scoring and path analysis
//! only read it through the [`Topology`] trait.

pub mod store;
pub mod traits;

pub use store::{InfraGraph, PropagationEdge, DEFAULT_PROPAGATION};
pub use traits::Topology;
