use serde::{Deserialize, Serialize};

use super::traits::Weight;

/// Direction of an edge in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// A -> B (edge of a `Digraph`)
    Directed,
    /// A <-> B (edge of an undirected `Graph`)
    Bidirectional,
}

/// A weighted edge between two vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    /// Source vertex
    pub source: V,
    /// Target vertex
    pub target: V,
    pub weight: Weight,
    pub direction: EdgeDirection,
}

impl<V> Edge<V> {
    pub fn new(source: V, target: V, weight: Weight, direction: EdgeDirection) -> Self {
        Self {
            source,
            target,
            weight,
            direction,
        }
    }
}
