pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod priority_queue;
pub mod result;

pub use config::GraphConfig;
pub use error::GraphError;
pub use graph::{Adjacency, Digraph, Edge, EdgeDirection, Graph, Vertex, Weight};
pub use priority_queue::PriorityQueue;
pub use result::GraphResult;
