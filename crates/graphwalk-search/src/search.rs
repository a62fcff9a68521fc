//! Generalized priority-first search.
//!
//! DFS, BFS, edge-based Dijkstra and Prim are all this one loop run with a
//! different frontier container and ranking.

use graphwalk_core::{Adjacency, GraphError, GraphResult, Weight};

use crate::frontier::Frontier;
use crate::tree::{Distances, SearchTree};

/// A pending `(predecessor, vertex)` pair; the root has no predecessor.
pub type Candidate<V> = (Option<V>, V);

/// How a candidate edge `(v, n)` is ranked when pushed onto the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Container order alone decides (DFS, BFS). Edge weights are never read.
    Unweighted,
    /// The weight of the edge itself (Prim).
    EdgeWeight,
    /// The settled distance of `v` plus the edge weight (Dijkstra).
    PathLength,
}

/// Search outward from `source`, settling each vertex the first time it is
/// pulled from `frontier`.
///
/// When a vertex `v` settles, every outgoing edge `(v, n)` is pushed ranked
/// by `ranking`, whether or not `n` is already settled. Stale entries are
/// discarded when popped. Distances are only tracked under
/// `Ranking::PathLength`; a vertex whose path length overflows to infinity
/// is left unreached.
pub fn priority_first_search<G, F>(
    graph: &G,
    source: &G::Vertex,
    mut frontier: F,
    ranking: Ranking,
) -> GraphResult<(SearchTree<G::Vertex>, Distances<G::Vertex>)>
where
    G: Adjacency,
    F: Frontier<Candidate<G::Vertex>>,
{
    if !graph.has_vertex(source) {
        return Err(GraphError::unknown_vertex(source));
    }

    let mut tree = SearchTree::new();
    let mut distances = Distances::new();
    frontier.push((None, source.clone()), 0.0);

    while let Some((predecessor, v)) = frontier.pop() {
        if tree.contains(&v) {
            continue;
        }
        let distance: Weight = match (&predecessor, ranking) {
            (Some(p), Ranking::PathLength) => distances.get(p) + graph.wt(p, &v)?,
            _ => 0.0,
        };
        if distance.is_infinite() {
            tracing::trace!(vertex = ?v, predecessor = ?predecessor, "path length overflowed");
            continue;
        }
        tracing::trace!(vertex = ?v, predecessor = ?predecessor, distance, "settled");
        tree.settle(v.clone(), predecessor);
        if ranking == Ranking::PathLength {
            distances.set(v.clone(), distance);
        }

        for n in graph.nbrs(&v)? {
            let rank = match ranking {
                Ranking::Unweighted => 0.0,
                Ranking::EdgeWeight => graph.wt(&v, n)?,
                Ranking::PathLength => distance + graph.wt(&v, n)?,
            };
            frontier.push((Some(v.clone()), n.clone()), rank);
        }
    }

    Ok((tree, distances))
}
