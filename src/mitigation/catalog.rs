//! Per-category mitigation cost/effectiveness/recommendation table

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::AssetCategory;

/// Mitigation parameters for one asset category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryProfile {
    /// One-time base cost in whole currency units, before severity scaling
    pub base_cost: u64,
    /// Estimated fraction of the asset's score removed by the mitigation
    pub effectiveness: f64,
    pub recommendation: String,
}

impl CategoryProfile {
    fn new(base_cost: u64, effectiveness: f64, recommendation: &str) -> Self {
        Self {
            base_cost,
            effectiveness,
            recommendation: recommendation.to_string(),
        }
    }
}

/// Extensible category-to-profile lookup with a defined default branch.
///
/// Categories without a dedicated entry (including `Other`) resolve to
/// the default profile, preserving the unknown-category fallback of
/// 1000 / 0.70.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitigationCatalog {
    profiles: FxHashMap<AssetCategory, CategoryProfile>,
    default_profile: CategoryProfile,
}

impl Default for MitigationCatalog {
    fn default() -> Self {
        let mut profiles = FxHashMap::default();
        profiles.insert(
            AssetCategory::PointOfSale,
            CategoryProfile::new(
                500,
                0.70,
                "Update POS firmware and enforce payment network segmentation",
            ),
        );
        profiles.insert(
            AssetCategory::Server,
            CategoryProfile::new(
                5000,
                0.80,
                "Harden the OS, automate patch management, expand monitoring",
            ),
        );
        profiles.insert(
            AssetCategory::Network,
            CategoryProfile::new(
                3000,
                0.85,
                "Microsegmentation, Zero Trust access, traffic monitoring",
            ),
        );
        profiles.insert(
            AssetCategory::Iot,
            CategoryProfile::new(
                200,
                0.60,
                "Update firmware, isolate on a dedicated VLAN, monitor anomalies",
            ),
        );
        profiles.insert(
            AssetCategory::Database,
            CategoryProfile::new(
                8000,
                0.90,
                "Encrypt at rest and in transit, tighten access control, audit logging",
            ),
        );
        Self {
            profiles,
            default_profile: CategoryProfile::new(1000, 0.70, "Review security configuration"),
        }
    }
}

impl MitigationCatalog {
    /// Look up a category's profile, falling back to the default branch.
    pub fn profile(&self, category: AssetCategory) -> &CategoryProfile {
        self.profiles.get(&category).unwrap_or(&self.default_profile)
    }

    /// Override or extend the table for one category.
    pub fn with_profile(mut self, category: AssetCategory, profile: CategoryProfile) -> Self {
        self.profiles.insert(category, profile);
        self
    }
}
