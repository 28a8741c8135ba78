//! Report composition
//!
//! Invokes scoring, path analysis, and mitigation planning once each
//! over the same immutable graph snapshot and merges their outputs into
//! a [`SurfaceReport`]. Pure composition: no new computation happens
//! here beyond grouping scores by category.

pub mod json;

use std::collections::HashMap;

use chrono::Utc;
use rustc_hash::FxHashMap;
use tracing::info;

use crate::analysis::CriticalPathAnalyzer;
use crate::config::AnalysisConfig;
use crate::errors::ModelError;
use crate::graph::Topology;
use crate::mitigation::{MitigationCatalog, MitigationPlanner};
use crate::models::{AssetCategory, CategoryStats, SurfaceReport};
use crate::scoring::{aggregate, NodeScorer, SurfaceAggregate};

/// Paths included in the report, descending by risk.
const TOP_PATHS: usize = 5;

/// Assets included in the top-vulnerable list, descending by score.
const TOP_ASSETS: usize = 10;

/// Composes the full attack-surface report.
pub struct ReportBuilder {
    config: AnalysisConfig,
    catalog: MitigationCatalog,
}

impl ReportBuilder {
    /// Validates the configuration eagerly; a bad parameter never gets
    /// as far as the scorer.
    pub fn new(config: AnalysisConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: MitigationCatalog::default(),
        })
    }

    /// Swap in a custom mitigation catalog.
    pub fn with_catalog(mut self, catalog: MitigationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Run every component over the graph snapshot and merge the results.
    ///
    /// Pure and synchronous; an empty graph produces a zero/empty report,
    /// never a fault.
    pub fn generate(&self, graph: &dyn Topology) -> SurfaceReport {
        let scorer = NodeScorer::new(self.config.org_factor);
        let scores = aggregate(graph, &scorer);

        let analyzer =
            CriticalPathAnalyzer::new(self.config.path_threshold, self.config.path_cutoff);
        let critical_paths = analyzer.critical_paths(graph);

        let planner = MitigationPlanner::new(self.catalog.clone());
        let mitigation_plan = planner.plan(graph, &scores, self.config.budget);

        let category_distribution = category_stats(graph, &scores);
        let mut top_vulnerable_assets = scores.ranked();
        top_vulnerable_assets.truncate(TOP_ASSETS);

        info!(
            total = scores.total,
            paths = critical_paths.len(),
            mitigations = mitigation_plan.mitigations.len(),
            "report generated"
        );

        SurfaceReport {
            generated_at: Utc::now(),
            total_score: scores.total,
            risk_level: crate::models::RiskLevel::from_score(scores.total),
            components_analyzed: scores.per_asset.len(),
            component_scores: scores.per_asset.clone(),
            critical_paths_found: critical_paths.len(),
            top_critical_paths: critical_paths.into_iter().take(TOP_PATHS).collect(),
            category_distribution,
            top_vulnerable_assets,
            mitigation_plan,
            org_factor_applied: self.config.org_factor,
        }
    }
}

/// Group per-asset scores by category into count/mean/max/contribution.
///
/// Contribution percentages are 0 when the total is 0 so a degenerate
/// all-zero graph can never divide by zero.
fn category_stats(
    graph: &dyn Topology,
    scores: &SurfaceAggregate,
) -> HashMap<AssetCategory, CategoryStats> {
    let mut by_category: FxHashMap<AssetCategory, Vec<f64>> = FxHashMap::default();
    for (id, &score) in &scores.per_asset {
        if let Some(asset) = graph.asset(id) {
            by_category.entry(asset.category).or_default().push(score);
        }
    }

    by_category
        .into_iter()
        .map(|(category, values)| {
            let count = values.len();
            let sum: f64 = values.iter().sum();
            let max_score = values.iter().cloned().fold(0.0_f64, f64::max);
            let mean_score = if count > 0 { sum / count as f64 } else { 0.0 };
            let contribution_percent = if scores.total > 0.0 {
                sum / scores.total * 100.0
            } else {
                0.0
            };
            (
                category,
                CategoryStats {
                    count,
                    mean_score,
                    max_score,
                    contribution_percent,
                },
            )
        })
        .collect()
}
