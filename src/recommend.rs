//! Rating- and proximity-based place recommendations

use std::collections::HashMap;

use crate::graph::GraphEngine;
use crate::model::{PlaceEdge, PlaceNode};

/// A scored recommendation result.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub node: PlaceNode,
    pub score: f64,
}

/// Scores direct neighbors of a node by rating and edge proximity.
///
/// Built from an owned snapshot of nodes and edges, not a live view of a
/// [`GraphEngine`]: mutations to the store after construction are not
/// reflected, and no lock has to be held while scoring.
pub struct SimpleRecommender {
    nodes: HashMap<String, PlaceNode>,
    adjacency: HashMap<String, Vec<PlaceEdge>>,
}

impl SimpleRecommender {
    /// Build a recommender from any collection of nodes and edges.
    pub fn new<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = PlaceNode>,
        E: IntoIterator<Item = PlaceEdge>,
    {
        let nodes: HashMap<String, PlaceNode> =
            nodes.into_iter().map(|n| (n.id.clone(), n)).collect();

        let mut adjacency: HashMap<String, Vec<PlaceEdge>> = HashMap::new();
        for edge in edges {
            adjacency.entry(edge.source_id.clone()).or_default().push(edge);
        }

        Self { nodes, adjacency }
    }

    /// Snapshot the current contents of a live store.
    pub fn from_store(store: &GraphEngine) -> Self {
        Self::new(store.nodes().cloned(), store.edges().cloned())
    }

    /// Return up to `top_k` recommended places reachable one hop out from
    /// `current_node_id`, best first.
    ///
    /// Each candidate scores `rating * 2 + weight / (1 + distance)`: rating
    /// dominates, proximity breaks ties and rewards strong short edges. A
    /// non-empty `categories` filter keeps only candidates whose category
    /// list intersects it. Candidates whose target id does not resolve to a
    /// snapshot node are skipped, and an unknown `current_node_id` yields an
    /// empty list.
    pub fn recommend(
        &self,
        current_node_id: &str,
        top_k: usize,
        categories: &[&str],
    ) -> Vec<Recommendation> {
        let Some(edges) = self.adjacency.get(current_node_id) else {
            tracing::debug!("recommend: no outgoing edges for {}", current_node_id);
            return Vec::new();
        };

        let mut candidates: Vec<Recommendation> = Vec::new();
        for edge in edges {
            let Some(node) = self.nodes.get(&edge.target_id) else {
                continue;
            };
            if !categories.is_empty()
                && !node.categories.iter().any(|c| categories.contains(&c.as_str()))
            {
                continue;
            }

            let rating_score = node.rating.unwrap_or(0.0);
            let proximity_score = edge.weight / (1.0 + edge.distance);
            let score = rating_score * 2.0 + proximity_score;

            candidates.push(Recommendation {
                node: node.clone(),
                score,
            });
        }

        // Stable sort keeps equal scores in edge-insertion order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates.truncate(top_k);
        candidates
    }
}
