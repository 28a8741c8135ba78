//! Per-node attack-surface scoring

use crate::graph::Topology;
use crate::models::Asset;

/// Calibrated amplification constant: each adjacent compromisable asset
/// raises the host's effective exposure by a factor of `1 + ALPHA * P`.
pub const ALPHA: f64 = 0.73;

/// Computes per-node attack-surface contributions.
///
/// Pure: scoring reads the graph snapshot and never mutates it. Severity
/// clamps during normalization; exposure is assumed pre-validated and is
/// not clamped.
#[derive(Debug, Clone, Copy)]
pub struct NodeScorer {
    org_factor: f64,
}

impl NodeScorer {
    /// `org_factor` is a single scalar modeling non-technical risk
    /// multipliers (organizational maturity), applied uniformly.
    pub fn new(org_factor: f64) -> Self {
        Self { org_factor }
    }

    pub fn org_factor(&self) -> f64 {
        self.org_factor
    }

    /// Score one asset against the graph it lives in.
    ///
    /// An asset with no neighbors has amplification 1, so its score
    /// reduces to `severity x exposure x org_factor`.
    pub fn score(&self, graph: &dyn Topology, asset: &Asset) -> f64 {
        let vulnerability = asset.normalized_severity();

        let mut amplification = 1.0;
        for neighbor in graph.neighbors(&asset.id) {
            amplification *= 1.0 + ALPHA * graph.propagation(&asset.id, neighbor);
        }

        vulnerability * asset.exposure * amplification * self.org_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{InfraGraph, PropagationEdge};
    use crate::models::{Asset, AssetCategory};

    #[test]
    fn test_isolated_node_has_no_amplification() {
        let graph = InfraGraph::build(
            vec![Asset::new("db", AssetCategory::Database, 8.2, 0.1)],
            vec![],
        )
        .unwrap();
        let scorer = NodeScorer::new(1.0);
        let score = scorer.score(&graph, graph.asset("db").unwrap());
        assert!((score - 0.82 * 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_isolated_node_org_factor_scales_linearly() {
        let graph = InfraGraph::build(
            vec![Asset::new("db", AssetCategory::Database, 8.2, 0.1)],
            vec![],
        )
        .unwrap();
        let score = NodeScorer::new(1.5).score(&graph, graph.asset("db").unwrap());
        assert!((score - 0.82 * 0.1 * 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_edge_amplification_factor() {
        // One 0.5-probability edge: amplification = 1 + 0.73 * 0.5 = 1.365
        let graph = InfraGraph::build(
            vec![
                Asset::new("a", AssetCategory::PointOfSale, 5.0, 0.4),
                Asset::new("b", AssetCategory::Server, 7.0, 0.2),
            ],
            vec![PropagationEdge::new("a", "b", 0.5)],
        )
        .unwrap();
        let scorer = NodeScorer::new(1.0);
        let score = scorer.score(&graph, graph.asset("a").unwrap());
        assert!((score - 0.5 * 0.4 * 1.365).abs() < 1e-12);
        let score = scorer.score(&graph, graph.asset("b").unwrap());
        assert!((score - 0.7 * 0.2 * 1.365).abs() < 1e-12);
    }

    #[test]
    fn test_amplification_is_multiplicative_across_neighbors() {
        let graph = InfraGraph::build(
            vec![
                Asset::new("hub", AssetCategory::Network, 6.0, 0.5),
                Asset::new("x", AssetCategory::Iot, 4.0, 0.9),
                Asset::new("y", AssetCategory::Iot, 4.0, 0.9),
            ],
            vec![
                PropagationEdge::new("hub", "x", 0.3),
                PropagationEdge::new("hub", "y", 0.6),
            ],
        )
        .unwrap();
        let score = NodeScorer::new(1.0).score(&graph, graph.asset("hub").unwrap());
        let expected = 0.6 * 0.5 * (1.0 + 0.73 * 0.3) * (1.0 + 0.73 * 0.6);
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_severity_clamps_at_ten() {
        let graph = InfraGraph::build(
            vec![Asset::new("a", AssetCategory::Server, 10.0, 0.5)],
            vec![],
        )
        .unwrap();
        let score = NodeScorer::new(1.0).score(&graph, graph.asset("a").unwrap());
        assert!((score - 0.5).abs() < 1e-12);
    }
}
