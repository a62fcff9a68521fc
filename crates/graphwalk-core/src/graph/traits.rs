use std::fmt::Debug;
use std::hash::Hash;

use crate::GraphResult;

/// Edge weights and path lengths.
pub type Weight = f64;

/// Anything usable as a vertex identifier.
///
/// The graph never looks inside a vertex; it only hashes, orders and
/// compares them. Ordering keeps neighbor enumeration deterministic.
pub trait Vertex: Clone + Eq + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Ord + Hash + Debug {}

/// Read-only adjacency queries that every search algorithm consumes.
pub trait Adjacency {
    type Vertex: Vertex;

    /// All vertices of the graph.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Outgoing neighbors of `v`.
    ///
    /// Fails with `UnknownVertex` if `v` is not in the graph.
    fn nbrs(&self, v: &Self::Vertex) -> GraphResult<impl Iterator<Item = &Self::Vertex> + '_>;

    /// Weight of edge `(u, v)`, or `NoSuchEdge`.
    fn wt(&self, u: &Self::Vertex, v: &Self::Vertex) -> GraphResult<Weight>;

    fn has_vertex(&self, v: &Self::Vertex) -> bool;
}
