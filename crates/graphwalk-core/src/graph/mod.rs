pub mod digraph;
pub mod edge;
pub mod traits;
pub mod undirected;

pub use digraph::Digraph;
pub use edge::{Edge, EdgeDirection};
pub use traits::{Adjacency, Vertex, Weight};
pub use undirected::Graph;
