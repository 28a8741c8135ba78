//! Core data models for the attack-surface engine
//!
//! These models are shared across the scoring, path-analysis, mitigation,
//! and reporting components. Every output type derives serde so an
//! external reporting component can emit the full report as JSON.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::ModelError;

/// Category of an infrastructure asset.
///
/// The set is open: category labels the engine does not know about map to
/// `Other`, which takes the default mitigation cost and effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    /// Point-of-sale terminal
    #[serde(rename = "pos")]
    PointOfSale,
    /// Application server
    Server,
    /// Network device (router, switch, firewall)
    Network,
    /// IoT device (sensors, cameras)
    Iot,
    Database,
    /// Anything the engine has no dedicated profile for
    #[serde(other)]
    Other,
}

impl AssetCategory {
    /// Map an arbitrary category label to a known category.
    pub fn from_label(label: &str) -> Self {
        match label {
            "pos" => AssetCategory::PointOfSale,
            "server" => AssetCategory::Server,
            "network" => AssetCategory::Network,
            "iot" => AssetCategory::Iot,
            "database" => AssetCategory::Database,
            _ => AssetCategory::Other,
        }
    }

    /// High-value targets: categories that terminate critical paths.
    pub fn is_high_value(self) -> bool {
        matches!(self, AssetCategory::Server | AssetCategory::Database)
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetCategory::PointOfSale => write!(f, "pos"),
            AssetCategory::Server => write!(f, "server"),
            AssetCategory::Network => write!(f, "network"),
            AssetCategory::Iot => write!(f, "iot"),
            AssetCategory::Database => write!(f, "database"),
            AssetCategory::Other => write!(f, "other"),
        }
    }
}

/// A modeled infrastructure node.
///
/// Severity and exposure are immutable once the graph is built for an
/// analysis run; components downstream of the graph only ever hold read
/// references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub category: AssetCategory,
    /// CVSS-style base severity in [0, 10]
    pub cvss_score: f64,
    /// Likelihood the asset is reachable from outside, in [0, 1]
    pub exposure: f64,
    /// Privilege-domain name to privilege level in [0, 1]
    #[serde(default)]
    pub privileges: HashMap<String, f64>,
    /// Exposed service names (informational, not scored)
    #[serde(default)]
    pub services: Vec<String>,
}

impl Asset {
    pub fn new(id: &str, category: AssetCategory, cvss_score: f64, exposure: f64) -> Self {
        Self {
            id: id.to_string(),
            category,
            cvss_score,
            exposure,
            privileges: HashMap::new(),
            services: Vec::new(),
        }
    }

    pub fn with_privilege(mut self, domain: &str, level: f64) -> Self {
        self.privileges.insert(domain.to_string(), level);
        self
    }

    pub fn with_service(mut self, service: &str) -> Self {
        self.services.push(service.to_string());
        self
    }

    /// Severity normalized to [0, 1]. Out-of-range severity clamps here;
    /// exposure is deliberately never clamped.
    pub fn normalized_severity(&self) -> f64 {
        (self.cvss_score / 10.0).min(1.0)
    }

    /// Reject out-of-range scores before they can reach the scorer.
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if !(0.0..=10.0).contains(&self.cvss_score) {
            return Err(ModelError::ScoreOutOfRange(self.id.clone(), self.cvss_score));
        }
        if !(0.0..=1.0).contains(&self.exposure) {
            return Err(ModelError::ExposureOutOfRange(self.id.clone(), self.exposure));
        }
        for (domain, level) in &self.privileges {
            if !(0.0..=1.0).contains(level) {
                return Err(ModelError::PrivilegeOutOfRange(
                    self.id.clone(),
                    domain.clone(),
                    *level,
                ));
            }
        }
        Ok(())
    }
}

/// Overall risk classification of a total attack-surface score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Step function on the total score. Intervals are closed-open:
    /// a total of exactly 100 is MEDIUM, exactly 600 is CRITICAL.
    pub fn from_score(total: f64) -> Self {
        if total < 100.0 {
            RiskLevel::Low
        } else if total < 300.0 {
            RiskLevel::Medium
        } else if total < 600.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Qualitative priority tier of a mitigation, derived from the mitigated
/// asset's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            Priority::Critical
        } else if score > 0.5 {
            Priority::High
        } else {
            Priority::Medium
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::High => write!(f, "HIGH"),
            Priority::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A bounded-length simple path from an exposed asset to a high-value
/// asset, with its compromise probability and aggregate risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalPath {
    /// Ordered asset ids; never contains a repeated id
    pub path: Vec<String>,
    /// Product of edge propagation probabilities along the path
    pub probability: f64,
    /// Mean of (normalized severity x exposure) over the path's assets
    pub risk_score: f64,
}

/// One recommended mitigation, created fresh per planning invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mitigation {
    pub asset_id: String,
    pub category: AssetCategory,
    pub current_score: f64,
    /// One-time cost in whole currency units
    pub cost: u64,
    pub risk_reduction: f64,
    pub roi: f64,
    pub recommendation: String,
    pub priority: Priority,
}

/// Output of one budget-constrained planning pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MitigationPlan {
    pub mitigations: Vec<Mitigation>,
    pub total_cost: u64,
    pub total_risk_reduction: f64,
    /// 0 when no budget was spent (never a division by zero)
    pub overall_roi: f64,
    /// Percent of the budget spent, 0 for a zero budget
    pub budget_utilization: f64,
}

/// Per-category score statistics for the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub count: usize,
    pub mean_score: f64,
    pub max_score: f64,
    /// Percent of the total score, 0 when the total is 0
    pub contribution_percent: f64,
}

/// Full analysis report composed from the scoring, path-analysis, and
/// mitigation components over one immutable graph snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceReport {
    pub generated_at: DateTime<Utc>,
    pub total_score: f64,
    pub risk_level: RiskLevel,
    pub components_analyzed: usize,
    /// Asset id to attack-surface score
    pub component_scores: FxHashMap<String, f64>,
    pub critical_paths_found: usize,
    /// Highest-risk paths, descending by risk score
    pub top_critical_paths: Vec<CriticalPath>,
    pub category_distribution: HashMap<AssetCategory, CategoryStats>,
    /// (asset id, score) pairs, descending by score
    pub top_vulnerable_assets: Vec<(String, f64)>,
    pub mitigation_plan: MitigationPlan,
    pub org_factor_applied: f64,
}
