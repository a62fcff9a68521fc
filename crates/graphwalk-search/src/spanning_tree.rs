use graphwalk_core::{Adjacency, GraphResult, PriorityQueue, Weight};

use crate::search::{priority_first_search, Ranking};
use crate::tree::SearchTree;

/// Prim's minimum spanning tree of the component containing the smallest
/// vertex. An empty graph gives an empty tree.
pub fn prim<G: Adjacency>(graph: &G) -> GraphResult<SearchTree<G::Vertex>> {
    match graph.vertices().next() {
        Some(start) => prim_from(graph, start),
        None => Ok(SearchTree::new()),
    }
}

/// Prim's minimum spanning tree of the component containing `start`.
///
/// Same loop as edge-based Dijkstra, except a candidate edge is ranked by
/// its own weight instead of the path length it would complete.
pub fn prim_from<G: Adjacency>(graph: &G, start: &G::Vertex) -> GraphResult<SearchTree<G::Vertex>> {
    let frontier = PriorityQueue::<_, Weight>::new();
    let (tree, _) = priority_first_search(graph, start, frontier, Ranking::EdgeWeight)?;
    tracing::debug!(start = ?start, spanned = tree.len(), "prim finished");
    Ok(tree)
}
