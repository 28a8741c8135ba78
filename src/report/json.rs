//! JSON rendering of the surface report
//!
//! Useful for machine consumption, piping to jq, or further processing.
//! Persistence is the caller's job; this module only produces strings.

use anyhow::Result;

use crate::models::SurfaceReport;

/// Render the report as pretty-printed JSON.
pub fn render(report: &SurfaceReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report as compact JSON (single line).
pub fn render_compact(report: &SurfaceReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
