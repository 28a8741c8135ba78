//! Capability contract for graph-representation-agnostic analysis

use crate::models::Asset;

/// Read-only view of an infrastructure graph.
///
/// The node scorer and path analyzer only need neighbor iteration and
/// edge-probability lookup, so they take `&dyn Topology` and stay
/// agnostic of the underlying representation (adjacency list vs map).
pub trait Topology: Send + Sync {
    /// All asset identifiers. Iteration order is an implementation
    /// detail; callers must sort explicitly if they need ordering.
    fn asset_ids(&self) -> Vec<&str>;

    /// Look up an asset's full record by identifier.
    fn asset(&self, id: &str) -> Option<&Asset>;

    /// Identifiers of an asset's direct neighbors.
    fn neighbors(&self, id: &str) -> Vec<&str>;

    /// Propagation probability attached to the edge between two assets,
    /// defaulting to [`DEFAULT_PROPAGATION`](crate::graph::DEFAULT_PROPAGATION)
    /// when the edge carries none.
    fn propagation(&self, a: &str, b: &str) -> f64;

    /// Number of assets in the graph.
    fn asset_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.asset_count() == 0
    }
}
