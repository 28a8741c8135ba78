//! Petgraph-backed infrastructure graph storage
//!
//! Assets are node weights on an undirected petgraph graph; propagation
//! probabilities are edge weights. A hash index maps asset ids to node
//! indices for O(1) lookup. All validation happens in [`InfraGraph::build`];
//! after construction the graph is an immutable snapshot.

use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::graph::traits::Topology;
use crate::models::Asset;

/// Propagation probability assumed for edges that carry none.
pub const DEFAULT_PROPAGATION: f64 = 0.1;

/// An undirected propagation relation between two assets.
///
/// The probability models how likely compromise of one endpoint is to
/// enable progress toward the other. `None` means "unspecified" and
/// resolves to [`DEFAULT_PROPAGATION`] at lookup time, so unspecified
/// edges stay distinguishable from explicit 0.1 edges in stored data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropagationEdge {
    pub source: String,
    pub target: String,
    pub probability: Option<f64>,
}

impl PropagationEdge {
    pub fn new(source: &str, target: &str, probability: f64) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            probability: Some(probability),
        }
    }

    /// An edge whose propagation probability was not measured.
    pub fn assumed(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            probability: None,
        }
    }
}

/// Immutable infrastructure graph snapshot.
///
/// The graph is simple by assumption: parallel edges and self-loops are
/// undefined behavior and are not guarded, matching the input contract.
#[derive(Debug, Clone)]
pub struct InfraGraph {
    graph: UnGraph<Asset, Option<f64>>,
    index: FxHashMap<String, NodeIndex>,
}

impl InfraGraph {
    /// Build a graph from arbitrary asset and edge lists.
    ///
    /// Rejects eagerly: out-of-range severity/exposure/privilege values,
    /// duplicate asset ids, edges naming unknown assets, and propagation
    /// probabilities outside (0, 1].
    pub fn build(assets: Vec<Asset>, edges: Vec<PropagationEdge>) -> Result<Self, ModelError> {
        let mut graph = UnGraph::with_capacity(assets.len(), edges.len());
        let mut index = FxHashMap::default();

        for asset in assets {
            asset.validate()?;
            if index.contains_key(&asset.id) {
                return Err(ModelError::DuplicateAsset(asset.id));
            }
            let id = asset.id.clone();
            let node = graph.add_node(asset);
            index.insert(id, node);
        }

        for edge in edges {
            let source = *index
                .get(&edge.source)
                .ok_or_else(|| ModelError::UnknownAsset(edge.source.clone()))?;
            let target = *index
                .get(&edge.target)
                .ok_or_else(|| ModelError::UnknownAsset(edge.target.clone()))?;
            if let Some(p) = edge.probability {
                if p <= 0.0 || p > 1.0 {
                    return Err(ModelError::InvalidPropagation(edge.source, edge.target, p));
                }
            }
            graph.add_edge(source, target, edge.probability);
        }

        Ok(Self { graph, index })
    }

    /// Iterate all assets in graph order.
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.graph.node_weights()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Topology for InfraGraph {
    fn asset_ids(&self) -> Vec<&str> {
        self.graph.node_weights().map(|a| a.id.as_str()).collect()
    }

    fn asset(&self, id: &str) -> Option<&Asset> {
        self.index.get(id).map(|&node| &self.graph[node])
    }

    fn neighbors(&self, id: &str) -> Vec<&str> {
        match self.index.get(id) {
            Some(&node) => self
                .graph
                .neighbors(node)
                .map(|n| self.graph[n].id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    fn propagation(&self, a: &str, b: &str) -> f64 {
        let (Some(&na), Some(&nb)) = (self.index.get(a), self.index.get(b)) else {
            return DEFAULT_PROPAGATION;
        };
        self.graph
            .find_edge(na, nb)
            .and_then(|e| self.graph.edge_weight(e).copied().flatten())
            .unwrap_or(DEFAULT_PROPAGATION)
    }

    fn asset_count(&self) -> usize {
        self.graph.node_count()
    }
}
