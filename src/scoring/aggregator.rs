//! Summation of node scores into the total attack surface

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graph::Topology;
use crate::scoring::NodeScorer;

/// Total attack-surface score plus the per-asset breakdown.
///
/// The total is the exact sum of the map's values; both are produced in
/// one pass over the graph's asset iteration order. Callers must not
/// depend on map ordering.
#[derive(Debug, Clone, Default)]
pub struct SurfaceAggregate {
    pub total: f64,
    pub per_asset: FxHashMap<String, f64>,
}

impl SurfaceAggregate {
    /// (asset id, score) pairs sorted descending by score.
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .per_asset
            .iter()
            .map(|(id, &score)| (id.clone(), score))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

/// Sum node scores over every asset in the graph.
///
/// An empty graph yields a zero total and an empty map rather than an
/// error; percentage-of-total consumers downstream guard the zero case.
pub fn aggregate(graph: &dyn Topology, scorer: &NodeScorer) -> SurfaceAggregate {
    let mut per_asset = FxHashMap::default();

    for id in graph.asset_ids() {
        if let Some(asset) = graph.asset(id) {
            per_asset.insert(asset.id.clone(), scorer.score(graph, asset));
        }
    }

    // Summing the finished map keeps the total bit-identical to any later
    // re-summation of the same map, whatever its iteration order
    let total: f64 = per_asset.values().sum();

    debug!(assets = per_asset.len(), total, "aggregated attack surface");
    SurfaceAggregate { total, per_asset }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{InfraGraph, PropagationEdge};
    use crate::models::{Asset, AssetCategory};

    fn sample() -> InfraGraph {
        InfraGraph::build(
            vec![
                Asset::new("pos_001", AssetCategory::PointOfSale, 6.5, 0.8),
                Asset::new("server_main", AssetCategory::Server, 7.8, 0.3),
                Asset::new("db_primary", AssetCategory::Database, 8.2, 0.1),
            ],
            vec![
                PropagationEdge::new("pos_001", "server_main", 0.4),
                PropagationEdge::new("server_main", "db_primary", 0.8),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_total_is_exact_sum_of_components() {
        let aggregate = aggregate(&sample(), &NodeScorer::new(1.2));
        let sum: f64 = aggregate.per_asset.values().sum();
        assert_eq!(aggregate.total, sum);
        assert_eq!(aggregate.per_asset.len(), 3);
    }

    #[test]
    fn test_empty_graph_yields_zero_total() {
        let graph = InfraGraph::build(vec![], vec![]).unwrap();
        let aggregate = aggregate(&graph, &NodeScorer::new(1.0));
        assert_eq!(aggregate.total, 0.0);
        assert!(aggregate.per_asset.is_empty());
    }

    #[test]
    fn test_ranked_is_descending() {
        let aggregate = aggregate(&sample(), &NodeScorer::new(1.0));
        let ranked = aggregate.ranked();
        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].1 >= ranked[1].1);
        assert!(ranked[1].1 >= ranked[2].1);
    }

    #[test]
    fn test_every_asset_appears_in_breakdown() {
        let graph = sample();
        let aggregate = aggregate(&graph, &NodeScorer::new(1.0));
        for id in graph.asset_ids() {
            assert!(aggregate.per_asset.contains_key(id));
        }
    }
}
