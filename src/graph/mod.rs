//! Graph storage and traversal

pub mod engine;
pub mod traversal;

pub use engine::{GraphEngine, Neighbors};
