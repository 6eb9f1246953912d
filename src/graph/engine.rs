//! In-memory GraphEngine implementation

use std::collections::{HashMap, HashSet};

use crate::error::{Endpoint, GraphError, Result};
use crate::model::{PlaceEdge, PlaceNode};

use super::traversal;

/// In-memory travel graph: owns all nodes and their outgoing edges.
///
/// Single-threaded by design. Mutations either fully succeed or leave the
/// store untouched; queries never fail on missing ids, they degrade to empty
/// results or `None` since stale or user-supplied ids are a normal condition
/// for a travel graph.
#[derive(Debug, Default)]
pub struct GraphEngine {
    /// All nodes, keyed by id
    nodes: HashMap<String, PlaceNode>,

    /// Outgoing edges, keyed by source id, in insertion order
    edges: HashMap<String, Vec<PlaceEdge>>,
}

impl GraphEngine {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Fails with [`GraphError::DuplicateNode`] if a node with
    /// the same id already exists; the store is unchanged on failure.
    pub fn add_node(&mut self, node: PlaceNode) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        tracing::debug!("add_node {}", node.id);
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Remove a node together with its outgoing edges and every edge that
    /// targets it from other nodes' lists. Silent no-op when the id is
    /// unknown.
    pub fn remove_node(&mut self, node_id: &str) {
        if self.nodes.remove(node_id).is_none() {
            return;
        }
        self.edges.remove(node_id);
        for edges in self.edges.values_mut() {
            edges.retain(|e| e.target_id != node_id);
        }
        tracing::debug!("remove_node {}", node_id);
    }

    /// Add an edge between two stored nodes. Fails with
    /// [`GraphError::UnknownNode`] naming the endpoint that did not resolve
    /// (source checked first); the store is unchanged on failure. Duplicate
    /// `(source, target)` pairs are allowed and kept in insertion order.
    pub fn add_edge(&mut self, edge: PlaceEdge) -> Result<()> {
        if !self.nodes.contains_key(&edge.source_id) {
            return Err(GraphError::UnknownNode {
                endpoint: Endpoint::Source,
                id: edge.source_id,
            });
        }
        if !self.nodes.contains_key(&edge.target_id) {
            return Err(GraphError::UnknownNode {
                endpoint: Endpoint::Target,
                id: edge.target_id,
            });
        }
        tracing::debug!("add_edge {} -> {}", edge.source_id, edge.target_id);
        self.edges.entry(edge.source_id.clone()).or_default().push(edge);
        Ok(())
    }

    /// Remove every outgoing edge from `source_id` whose target is
    /// `target_id`. No-op when the source has no outgoing edges.
    pub fn remove_edge(&mut self, source_id: &str, target_id: &str) {
        if let Some(edges) = self.edges.get_mut(source_id) {
            edges.retain(|e| e.target_id != target_id);
        }
    }

    /// Look up a node by id.
    pub fn get_node(&self, node_id: &str) -> Option<&PlaceNode> {
        self.nodes.get(node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterate over all stored nodes (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &PlaceNode> {
        self.nodes.values()
    }

    /// Iterate over all stored edges, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = &PlaceEdge> {
        self.edges.values().flatten()
    }

    /// Distinct nodes reachable via one outgoing edge from `node_id`, in
    /// edge-insertion order. Edges whose target no longer resolves to a
    /// stored node are skipped rather than reported. Empty for ids with no
    /// outgoing edges, unknown ids included.
    pub fn neighbors<'a>(&'a self, node_id: &str) -> Neighbors<'a> {
        Neighbors {
            nodes: &self.nodes,
            edges: self.edges.get(node_id).map(|v| v.iter()).unwrap_or_default(),
            seen: HashSet::new(),
        }
    }

    /// Weighted shortest path from `source_id` to `target_id` using edge
    /// `distance` as cost. `None` when either endpoint is not stored or the
    /// target is unreachable; otherwise the total distance and the node ids
    /// along the path, endpoints inclusive.
    pub fn shortest_path(&self, source_id: &str, target_id: &str) -> Option<(f64, Vec<String>)> {
        if !self.nodes.contains_key(source_id) || !self.nodes.contains_key(target_id) {
            return None;
        }

        traversal::dijkstra(source_id, target_id, |id| {
            self.edges
                .get(id)
                .into_iter()
                .flatten()
                .map(|e| (e.target_id.clone(), e.distance))
                .collect::<Vec<_>>()
        })
    }
}

/// Lazy iterator over a node's distinct one-hop neighbors.
///
/// Borrows the engine; call [`GraphEngine::neighbors`] again to restart.
pub struct Neighbors<'a> {
    nodes: &'a HashMap<String, PlaceNode>,
    edges: std::slice::Iter<'a, PlaceEdge>,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a PlaceNode;

    fn next(&mut self) -> Option<Self::Item> {
        for edge in self.edges.by_ref() {
            if !self.seen.insert(edge.target_id.as_str()) {
                continue;
            }
            if let Some(target) = self.nodes.get(&edge.target_id) {
                return Some(target);
            }
        }
        None
    }
}
