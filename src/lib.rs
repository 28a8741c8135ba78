//! assa — attack-surface score aggregation for retail infrastructure
//!
//! Quantifies the cyber-attack surface of a retail infrastructure modeled
//! as a graph and recommends budget-constrained mitigations. The engine
//! is a deterministic, explainable heuristic scorer, not a solver: it
//! combines per-node vulnerability/exposure scoring, multiplicative
//! propagation amplification, bounded simple-path enumeration, and greedy
//! ROI-ranked mitigation selection.
//!
//! The engine is purely functional over an immutable graph snapshot: it
//! reads no files, environment variables, or network resources, and no
//! component mutates the graph. A host can therefore batch independent
//! analyses (different organizational factors or budgets) across threads
//! with no coordination.
//!
//! # Example
//!
//! ```
//! use assa::config::AnalysisConfig;
//! use assa::graph::{InfraGraph, PropagationEdge};
//! use assa::models::{Asset, AssetCategory};
//! use assa::report::ReportBuilder;
//!
//! let graph = InfraGraph::build(
//!     vec![
//!         Asset::new("pos_001", AssetCategory::PointOfSale, 6.5, 0.8),
//!         Asset::new("db_primary", AssetCategory::Database, 8.2, 0.1),
//!     ],
//!     vec![PropagationEdge::new("pos_001", "db_primary", 0.6)],
//! )?;
//!
//! let config = AnalysisConfig::default().with_org_factor(1.2);
//! let report = ReportBuilder::new(config)?.generate(&graph);
//! assert_eq!(report.components_analyzed, 2);
//! # Ok::<(), assa::errors::ModelError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod errors;
pub mod graph;
pub mod mitigation;
pub mod models;
pub mod report;
pub mod scoring;

pub use analysis::CriticalPathAnalyzer;
pub use config::AnalysisConfig;
pub use errors::ModelError;
pub use graph::{InfraGraph, PropagationEdge, Topology};
pub use mitigation::{MitigationCatalog, MitigationPlanner};
pub use models::{Asset, AssetCategory, RiskLevel, SurfaceReport};
pub use report::ReportBuilder;
pub use scoring::{aggregate, NodeScorer};
