//! Dijkstra's single-source shortest paths, in two forms.
//!
//! `dijkstra_edges` queues candidate edges and throws away the ones that
//! turn out stale. `dijkstra` queues every vertex once and lowers its
//! priority in place as shorter paths turn up. Both return the same
//! distances for the same input.

use std::collections::HashMap;

use graphwalk_core::{Adjacency, GraphError, GraphResult, PriorityQueue, Weight};

use crate::search::{priority_first_search, Ranking};
use crate::tree::{Distances, SearchTree};

/// Edge-based Dijkstra: priority-first search where a candidate edge
/// `(u, n)` is ranked by the settled distance of `u` plus `wt(u, n)`.
pub fn dijkstra_edges<G: Adjacency>(
    graph: &G,
    source: &G::Vertex,
) -> GraphResult<(SearchTree<G::Vertex>, Distances<G::Vertex>)> {
    ensure_non_negative(graph)?;
    let frontier = PriorityQueue::<_, Weight>::new();
    let (tree, distances) = priority_first_search(graph, source, frontier, Ranking::PathLength)?;
    tracing::debug!(source = ?source, reached = tree.len(), "edge-based dijkstra finished");
    Ok((tree, distances))
}

/// Vertex-based Dijkstra with decrease-key.
pub fn dijkstra<G: Adjacency>(
    graph: &G,
    source: &G::Vertex,
) -> GraphResult<(SearchTree<G::Vertex>, Distances<G::Vertex>)> {
    if !graph.has_vertex(source) {
        return Err(GraphError::unknown_vertex(source));
    }
    ensure_non_negative(graph)?;

    let mut tree = SearchTree::new();
    tree.set_predecessor(source.clone(), None);

    let mut best: HashMap<G::Vertex, Weight> = HashMap::new();
    let mut queue: PriorityQueue<G::Vertex, Weight> = graph
        .vertices()
        .map(|v| {
            let d = if v == source { 0.0 } else { Weight::INFINITY };
            best.insert(v.clone(), d);
            (v.clone(), d)
        })
        .collect();

    while let Some((u, du)) = queue.pop_with_priority() {
        // Everything left is unreachable.
        if du.is_infinite() {
            break;
        }
        for n in graph.nbrs(&u)? {
            let candidate = du + graph.wt(&u, n)?;
            if candidate < best.get(n).copied().unwrap_or(Weight::INFINITY) {
                tracing::trace!(vertex = ?n, via = ?u, distance = candidate, "relaxed");
                best.insert(n.clone(), candidate);
                tree.set_predecessor(n.clone(), Some(u.clone()));
                queue.change_priority(n, candidate)?;
            }
        }
    }

    tracing::debug!(source = ?source, reached = tree.len(), "dijkstra finished");
    Ok((tree, best.into_iter().collect()))
}

/// Fail with `NegativeWeight` on the first edge carrying a negative weight.
pub fn ensure_non_negative<G: Adjacency>(graph: &G) -> GraphResult<()> {
    for u in graph.vertices() {
        for v in graph.nbrs(u)? {
            let weight = graph.wt(u, v)?;
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from: format!("{u:?}"),
                    to: format!("{v:?}"),
                    weight,
                });
            }
        }
    }
    Ok(())
}
