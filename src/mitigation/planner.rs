//! Greedy ROI-ranked mitigation selection

use tracing::debug;

use crate::graph::Topology;
use crate::mitigation::MitigationCatalog;
use crate::models::{Mitigation, MitigationPlan, Priority};
use crate::scoring::SurfaceAggregate;

/// Only the highest-scoring assets are ever evaluated in one planning
/// pass; assets beyond this rank are not considered.
pub const MAX_CANDIDATES: usize = 10;

/// Fixed currency-per-risk-point conversion used for ROI.
pub const ROI_PER_RISK_POINT: f64 = 100_000.0;

/// Plans mitigations for the top-scoring assets under a hard budget.
#[derive(Debug, Clone, Default)]
pub struct MitigationPlanner {
    catalog: MitigationCatalog,
}

impl MitigationPlanner {
    pub fn new(catalog: MitigationCatalog) -> Self {
        Self { catalog }
    }

    /// Greedy admission over the top [`MAX_CANDIDATES`] assets by score.
    ///
    /// A candidate is admitted only when its cost fits the budget
    /// remaining at the time it is considered; an unaffordable candidate
    /// is skipped, not a stopping condition. Budget exhaustion is an
    /// ordinary outcome reported through `budget_utilization`.
    pub fn plan(
        &self,
        graph: &dyn Topology,
        scores: &SurfaceAggregate,
        budget: u64,
    ) -> MitigationPlan {
        let mut mitigations = Vec::new();
        let mut remaining = budget;
        let mut total_risk_reduction = 0.0;

        for (asset_id, score) in scores.ranked().into_iter().take(MAX_CANDIDATES) {
            let Some(asset) = graph.asset(&asset_id) else {
                continue;
            };
            let profile = self.catalog.profile(asset.category);

            // Severity scales the base cost; truncate to whole currency units
            let cost = (profile.base_cost as f64 * (1.0 + asset.cvss_score / 10.0)) as u64;
            if cost > remaining {
                continue;
            }

            let risk_reduction = score * profile.effectiveness;
            let roi = risk_reduction * ROI_PER_RISK_POINT / cost as f64;

            mitigations.push(Mitigation {
                asset_id,
                category: asset.category,
                current_score: score,
                cost,
                risk_reduction,
                roi,
                recommendation: profile.recommendation.clone(),
                priority: Priority::from_score(score),
            });
            remaining -= cost;
            total_risk_reduction += risk_reduction;
        }

        let total_cost = budget - remaining;
        let overall_roi = if total_cost > 0 {
            total_risk_reduction * ROI_PER_RISK_POINT / total_cost as f64
        } else {
            0.0
        };
        let budget_utilization = if budget > 0 {
            total_cost as f64 / budget as f64 * 100.0
        } else {
            0.0
        };

        debug!(
            selected = mitigations.len(),
            total_cost, budget_utilization, "mitigation planning"
        );
        MitigationPlan {
            mitigations,
            total_cost,
            total_risk_reduction,
            overall_roi,
            budget_utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::InfraGraph;
    use crate::models::{Asset, AssetCategory};
    use crate::scoring::{aggregate, NodeScorer};

    fn plan_for(graph: &InfraGraph, budget: u64) -> MitigationPlan {
        let scores = aggregate(graph, &NodeScorer::new(1.0));
        MitigationPlanner::default().plan(graph, &scores, budget)
    }

    fn mixed_graph() -> InfraGraph {
        InfraGraph::build(
            vec![
                // Highest score: server 0.78 * 0.9 = 0.702
                Asset::new("srv", AssetCategory::Server, 7.8, 0.9),
                // Second: pos 0.65 * 0.8 = 0.52
                Asset::new("pos", AssetCategory::PointOfSale, 6.5, 0.8),
                // Third: iot 0.5 * 0.6 = 0.3
                Asset::new("iot", AssetCategory::Iot, 5.0, 0.6),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_costs_scale_with_severity_and_truncate() {
        let plan = plan_for(&mixed_graph(), 100_000);
        assert_eq!(plan.mitigations.len(), 3);
        // server: 5000 * 1.78 = 8900, pos: 500 * 1.65 = 825, iot: 200 * 1.5 = 300
        assert_eq!(plan.mitigations[0].cost, 8900);
        assert_eq!(plan.mitigations[1].cost, 825);
        assert_eq!(plan.mitigations[2].cost, 300);
        assert_eq!(plan.total_cost, 10_025);
    }

    #[test]
    fn test_total_cost_never_exceeds_budget() {
        for budget in [0u64, 100, 900, 9_000, 10_000, 100_000] {
            let plan = plan_for(&mixed_graph(), budget);
            assert!(plan.total_cost <= budget, "budget {budget}");
        }
    }

    #[test]
    fn test_unaffordable_high_rank_candidate_is_skipped_not_terminal() {
        // Budget covers pos (825) and iot (300) but not the server (8900)
        let plan = plan_for(&mixed_graph(), 2_000);
        let ids: Vec<&str> = plan.mitigations.iter().map(|m| m.asset_id.as_str()).collect();
        assert_eq!(ids, vec!["pos", "iot"]);
        assert_eq!(plan.total_cost, 1_125);
    }

    #[test]
    fn test_cost_truncation_follows_float_product() {
        // 8000 * (1 + 8.2/10) is fractionally under 14560 in f64 and
        // truncates to 14559
        let graph = InfraGraph::build(
            vec![Asset::new("db", AssetCategory::Database, 8.2, 0.1)],
            vec![],
        )
        .unwrap();
        let plan = plan_for(&graph, 100_000);
        assert_eq!(plan.mitigations[0].cost, 14_559);
    }

    #[test]
    fn test_zero_budget_selects_nothing() {
        let plan = plan_for(&mixed_graph(), 0);
        assert!(plan.mitigations.is_empty());
        assert_eq!(plan.total_cost, 0);
        assert_eq!(plan.overall_roi, 0.0);
        assert_eq!(plan.budget_utilization, 0.0);
    }

    #[test]
    fn test_at_most_ten_candidates_evaluated() {
        // 12 isolated POS assets, all trivially affordable
        let assets: Vec<Asset> = (0..12)
            .map(|i| {
                Asset::new(
                    &format!("pos_{i:02}"),
                    AssetCategory::PointOfSale,
                    5.0 + 0.1 * i as f64,
                    0.8,
                )
            })
            .collect();
        let graph = InfraGraph::build(assets, vec![]).unwrap();
        let plan = plan_for(&graph, 1_000_000);
        assert_eq!(plan.mitigations.len(), MAX_CANDIDATES);
    }

    #[test]
    fn test_risk_reduction_and_roi() {
        let plan = plan_for(&mixed_graph(), 100_000);
        let srv = &plan.mitigations[0];
        let expected_reduction = 0.78 * 0.9 * 0.80;
        assert!((srv.risk_reduction - expected_reduction).abs() < 1e-12);
        assert!((srv.roi - expected_reduction * 100_000.0 / 8900.0).abs() < 1e-9);

        let expected_total: f64 = plan.mitigations.iter().map(|m| m.risk_reduction).sum();
        assert_eq!(plan.total_risk_reduction, expected_total);
        assert!(
            (plan.overall_roi - expected_total * 100_000.0 / plan.total_cost as f64).abs() < 1e-9
        );
    }

    #[test]
    fn test_priority_tiers_follow_scores() {
        let plan = plan_for(&mixed_graph(), 100_000);
        assert_eq!(plan.mitigations[0].priority, Priority::High); // 0.702
        assert_eq!(plan.mitigations[1].priority, Priority::High); // 0.52
        assert_eq!(plan.mitigations[2].priority, Priority::Medium); // 0.3
    }

    #[test]
    fn test_budget_utilization_percent() {
        let plan = plan_for(&mixed_graph(), 20_050);
        assert_eq!(plan.total_cost, 10_025);
        assert!((plan.budget_utilization - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_category_uses_default_profile() {
        let graph = InfraGraph::build(
            vec![Asset::new("legacy", AssetCategory::Other, 6.0, 0.9)],
            vec![],
        )
        .unwrap();
        let plan = plan_for(&graph, 100_000);
        assert_eq!(plan.mitigations[0].cost, 1600); // 1000 * 1.6
        assert_eq!(plan.mitigations[0].recommendation, "Review security configuration");
    }

    #[test]
    fn test_empty_graph_plans_nothing() {
        let graph = InfraGraph::build(vec![], vec![]).unwrap();
        let plan = plan_for(&graph, 100_000);
        assert!(plan.mitigations.is_empty());
        assert_eq!(plan.overall_roi, 0.0);
    }
}
