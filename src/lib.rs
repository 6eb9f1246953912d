//! WanderTopo - in-memory travel graph engine
//!
//! # Architecture
//!
//! - **Graph store**: nodes (points of interest) and directed weighted
//!   edges, keyed by node id, with Dijkstra shortest-path queries
//! - **Recommender**: snapshot-based scorer ranking a node's direct
//!   neighbors by `rating * 2 + weight / (1 + distance)`
//!
//! The engine is synchronous and single-threaded by design; a hosting layer
//! (HTTP API, CLI, ...) owns serialization of mutations.
//!
//! # Usage example
//!
//! ```
//! use wandertopo::{GraphEngine, PlaceEdge, PlaceNode, SimpleRecommender};
//!
//! # fn main() -> wandertopo::Result<()> {
//! let mut graph = GraphEngine::new();
//!
//! graph.add_node(PlaceNode::new("louvre", "Louvre", 48.8606, 2.3376)?.with_rating(4.7)?)?;
//! graph.add_node(PlaceNode::new("orsay", "Musée d'Orsay", 48.8600, 2.3266)?.with_rating(4.6)?)?;
//! graph.add_edge(PlaceEdge::new("louvre", "orsay", 850.0)?)?;
//!
//! let (distance, path) = graph.shortest_path("louvre", "orsay").unwrap();
//! assert_eq!(distance, 850.0);
//! assert_eq!(path, vec!["louvre", "orsay"]);
//!
//! let recommender = SimpleRecommender::from_store(&graph);
//! let top = recommender.recommend("louvre", 5, &[]);
//! assert_eq!(top[0].node.id, "orsay");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod graph;
pub mod model;
pub mod recommend;

pub use error::{Endpoint, GraphError, Result};
pub use graph::{GraphEngine, Neighbors};
pub use model::{PlaceEdge, PlaceNode};
pub use recommend::{Recommendation, SimpleRecommender};
