use std::collections::{HashSet, VecDeque};

use graphwalk_core::{Adjacency, GraphError, GraphResult};

use crate::search::{priority_first_search, Ranking};
use crate::tree::SearchTree;

/// Depth-first search tree of everything reachable from `source`.
///
/// Vertices are marked when popped off the stack, so the tree records the
/// predecessor through which each vertex was first *visited*.
pub fn dfs<G: Adjacency>(graph: &G, source: &G::Vertex) -> GraphResult<SearchTree<G::Vertex>> {
    let (tree, _) = priority_first_search(graph, source, Vec::new(), Ranking::Unweighted)?;
    tracing::debug!(source = ?source, reached = tree.len(), "dfs finished");
    Ok(tree)
}

/// Breadth-first search tree of everything reachable from `source`.
///
/// Tree paths are shortest paths when every edge counts as one hop.
pub fn bfs<G: Adjacency>(graph: &G, source: &G::Vertex) -> GraphResult<SearchTree<G::Vertex>> {
    let (tree, _) = priority_first_search(graph, source, VecDeque::new(), Ranking::Unweighted)?;
    tracing::debug!(source = ?source, reached = tree.len(), "bfs finished");
    Ok(tree)
}

/// Set of vertices reachable from `source`, found by a depth-first search
/// that marks vertices as they are pushed rather than when they are popped.
pub fn dfs_reachable<G: Adjacency>(
    graph: &G,
    source: &G::Vertex,
) -> GraphResult<HashSet<G::Vertex>> {
    explore(graph, source, None).map(|(visited, _)| visited)
}

/// Check if a path exists from `u` to `v`.
pub fn connected<G: Adjacency>(graph: &G, u: &G::Vertex, v: &G::Vertex) -> GraphResult<bool> {
    if !graph.has_vertex(v) {
        return Err(GraphError::unknown_vertex(v));
    }
    explore(graph, u, Some(v)).map(|(_, found)| found)
}

/// Number of edges on a shortest path from `u` to `v`, or `None` if `v`
/// cannot be reached from `u`.
pub fn distance<G: Adjacency>(
    graph: &G,
    u: &G::Vertex,
    v: &G::Vertex,
) -> GraphResult<Option<usize>> {
    if !graph.has_vertex(v) {
        return Err(GraphError::unknown_vertex(v));
    }
    Ok(bfs(graph, u)?.depth(v))
}

/// Mark-on-push DFS; stops early once `target` is marked.
fn explore<G: Adjacency>(
    graph: &G,
    source: &G::Vertex,
    target: Option<&G::Vertex>,
) -> GraphResult<(HashSet<G::Vertex>, bool)> {
    if !graph.has_vertex(source) {
        return Err(GraphError::unknown_vertex(source));
    }

    let mut visited = HashSet::new();
    let mut stack = vec![source.clone()];
    visited.insert(source.clone());

    if target == Some(source) {
        return Ok((visited, true));
    }

    while let Some(vertex) = stack.pop() {
        for n in graph.nbrs(&vertex)? {
            if visited.insert(n.clone()) {
                if target == Some(n) {
                    return Ok((visited, true));
                }
                stack.push(n.clone());
            }
        }
    }

    Ok((visited, false))
}
