//! Bounded simple-path enumeration and risk scoring
//!
//! Worst case is exponential in the graph's branching factor bounded by
//! the cutoff. That is acceptable for modest graphs (tens to low hundreds
//! of assets) and a small cutoff; it is a documented scaling limit, and a
//! host wrapping the engine is responsible for any wall-clock ceiling.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::graph::Topology;
use crate::models::CriticalPath;

/// Maximum path length in edges.
pub const DEFAULT_CUTOFF: usize = 5;

/// Minimum compromise probability for a path to be reported.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Exposure above which an asset counts as an attack source.
pub const EXPOSED_SOURCE_MIN: f64 = 0.5;

/// Enumerates and ranks critical attack paths.
///
/// Probability is the product of edge propagation probabilities, so it
/// strictly decreases with length for probabilities below 1: longer
/// attack chains are rarer, and with the default threshold only short,
/// high-probability chains survive. Risk is the mean of
/// `severity x exposure` over the path's assets, an average rather than
/// a product, so it reflects average criticality regardless of length.
#[derive(Debug, Clone, Copy)]
pub struct CriticalPathAnalyzer {
    threshold: f64,
    cutoff: usize,
}

impl Default for CriticalPathAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_CUTOFF)
    }
}

impl CriticalPathAnalyzer {
    pub fn new(threshold: f64, cutoff: usize) -> Self {
        Self { threshold, cutoff }
    }

    /// All simple paths of at most `cutoff` edges from assets with
    /// exposure above [`EXPOSED_SOURCE_MIN`] to server/database assets,
    /// kept when probability exceeds the threshold and sorted descending
    /// by risk score. Source/sink pairs with no connecting path are
    /// skipped silently.
    pub fn critical_paths(&self, graph: &dyn Topology) -> Vec<CriticalPath> {
        let sources: Vec<&str> = graph
            .asset_ids()
            .into_iter()
            .filter(|id| {
                graph
                    .asset(id)
                    .is_some_and(|a| a.exposure > EXPOSED_SOURCE_MIN)
            })
            .collect();

        let sinks: Vec<&str> = graph
            .asset_ids()
            .into_iter()
            .filter(|id| graph.asset(id).is_some_and(|a| a.category.is_high_value()))
            .collect();

        let mut kept = Vec::new();
        let mut enumerated = 0usize;

        for &source in &sources {
            for &sink in &sinks {
                if source == sink {
                    continue;
                }
                let mut paths = Vec::new();
                self.enumerate_simple_paths(graph, source, sink, &mut paths);
                enumerated += paths.len();
                for path in paths {
                    let probability = path_probability(graph, &path);
                    if probability > self.threshold {
                        let risk_score = path_risk(graph, &path);
                        kept.push(CriticalPath {
                            path,
                            probability,
                            risk_score,
                        });
                    }
                }
            }
        }

        kept.sort_by(|a, b| {
            b.risk_score
                .partial_cmp(&a.risk_score)
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            sources = sources.len(),
            sinks = sinks.len(),
            enumerated,
            kept = kept.len(),
            "critical path analysis"
        );
        kept
    }

    /// Enumerate every simple path from `source` to `sink` of at most
    /// `cutoff` edges.
    ///
    /// Explicit stack-based DFS with a visited set and a remaining-depth
    /// budget, so deep enumerations never risk call-stack overflow. Each
    /// stack frame holds one node's neighbor list plus a cursor into it.
    fn enumerate_simple_paths(
        &self,
        graph: &dyn Topology,
        source: &str,
        sink: &str,
        out: &mut Vec<Vec<String>>,
    ) {
        if self.cutoff == 0 {
            return;
        }

        let mut path: Vec<String> = vec![source.to_string()];
        let mut visited: FxHashSet<String> = FxHashSet::default();
        visited.insert(source.to_string());

        let neighbors: Vec<String> = graph.neighbors(source).into_iter().map(String::from).collect();
        let mut stack: Vec<(Vec<String>, usize)> = vec![(neighbors, 0)];

        while let Some((frontier, cursor)) = stack.last_mut() {
            if *cursor >= frontier.len() {
                stack.pop();
                if let Some(done) = path.pop() {
                    visited.remove(&done);
                }
                continue;
            }

            let next = frontier[*cursor].clone();
            *cursor += 1;

            if visited.contains(&next) {
                continue;
            }
            if next == sink {
                // Path of stack.len() edges; stack depth never exceeds cutoff
                let mut complete = path.clone();
                complete.push(next);
                out.push(complete);
                continue;
            }
            if stack.len() < self.cutoff {
                let frontier: Vec<String> =
                    graph.neighbors(&next).into_iter().map(String::from).collect();
                visited.insert(next.clone());
                path.push(next);
                stack.push((frontier, 0));
            }
        }
    }
}

/// Product of propagation probabilities over consecutive edges.
fn path_probability(graph: &dyn Topology, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| graph.propagation(&pair[0], &pair[1]))
        .product()
}

/// Mean over the path's assets of `normalized_severity x exposure`.
fn path_risk(graph: &dyn Topology, path: &[String]) -> f64 {
    if path.is_empty() {
        return 0.0;
    }
    let total: f64 = path
        .iter()
        .filter_map(|id| graph.asset(id))
        .map(|a| a.normalized_severity() * a.exposure)
        .sum();
    total / path.len() as f64
}
