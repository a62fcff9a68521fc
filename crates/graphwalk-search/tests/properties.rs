use std::collections::HashSet;

use graphwalk_core::{Adjacency, Digraph, Graph};
use graphwalk_search::*;
use proptest::prelude::*;

type RawEdges = (u32, Vec<(u32, u32, u32)>);

fn raw_edges() -> impl Strategy<Value = RawEdges> {
    (1u32..7).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n, 0u32..10), 0..10),
        )
    })
}

fn digraph((n, edges): &RawEdges) -> Digraph<u32> {
    Digraph::from_weighted_edges(0..*n, edges.iter().map(|&(u, v, w)| (u, v, f64::from(w))))
        .unwrap()
}

fn undirected((n, edges): &RawEdges) -> Graph<u32> {
    Graph::from_weighted_edges(0..*n, edges.iter().map(|&(u, v, w)| (u, v, f64::from(w))))
        .unwrap()
}

/// Bellman-Ford style relaxation to a fixed point; `unit` counts hops instead of weights.
fn reference_distances(graph: &Digraph<u32>, source: u32, unit: bool) -> Vec<f64> {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    dist[source as usize] = 0.0;
    for _ in 0..n {
        for edge in graph.edges() {
            let w = if unit { 1.0 } else { edge.weight };
            let candidate = dist[edge.source as usize] + w;
            if candidate < dist[edge.target as usize] {
                dist[edge.target as usize] = candidate;
            }
        }
    }
    dist
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        x = parent[x];
    }
    x
}

/// Lightest spanning tree of the component of vertex 0, by trying every edge subset.
fn brute_force_mst_weight(graph: &Graph<u32>) -> f64 {
    let component = dfs_reachable(graph, &0).unwrap();
    let edges: Vec<_> = graph
        .edges()
        .filter(|e| e.source != e.target && component.contains(&e.source))
        .collect();
    let needed = component.len() - 1;

    let mut best = if needed == 0 { 0.0 } else { f64::INFINITY };
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
        let mut weight = 0.0;
        let mut acyclic = true;
        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let a = find(&mut parent, edge.source as usize);
            let b = find(&mut parent, edge.target as usize);
            if a == b {
                acyclic = false;
                break;
            }
            parent[a] = b;
            weight += edge.weight;
        }
        if acyclic && weight < best {
            best = weight;
        }
    }
    best
}

proptest! {
    #[test]
    fn prop_trees_cover_exactly_the_reachable_set(raw in raw_edges(), source in 0u32..7) {
        let graph = digraph(&raw);
        let source = source % raw.0;
        prop_assert!(graph.has_vertex(&source));

        let reachable = dfs_reachable(&graph, &source).unwrap();
        let reference: HashSet<u32> = reference_distances(&graph, source, true)
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(|(v, _)| v as u32)
            .collect();
        prop_assert_eq!(&reachable, &reference);

        for tree in [dfs(&graph, &source).unwrap(), bfs(&graph, &source).unwrap()] {
            let vertices: HashSet<u32> = tree.vertices().copied().collect();
            prop_assert_eq!(&vertices, &reference);
            for (pred, v) in tree.edges() {
                prop_assert!(graph.has_edge(pred, v));
            }
        }
    }

    #[test]
    fn prop_bfs_depth_is_hop_distance(raw in raw_edges()) {
        let graph = digraph(&raw);
        let tree = bfs(&graph, &0).unwrap();
        let reference = reference_distances(&graph, 0, true);

        for v in 0..graph.vertex_count() as u32 {
            let expected = reference[v as usize];
            match tree.depth(&v) {
                Some(depth) => prop_assert_eq!(depth as f64, expected),
                None => prop_assert!(expected.is_infinite()),
            }
            prop_assert_eq!(distance(&graph, &0, &v).unwrap(), tree.depth(&v));
        }
    }

    #[test]
    fn prop_dijkstra_forms_agree_with_reference(raw in raw_edges()) {
        let graph = digraph(&raw);
        let (edge_tree, by_edges) = dijkstra_edges(&graph, &0).unwrap();
        let (vertex_tree, by_vertices) = dijkstra(&graph, &0).unwrap();
        let reference = reference_distances(&graph, 0, false);

        prop_assert_eq!(&by_edges, &by_vertices);
        for v in 0..graph.vertex_count() as u32 {
            prop_assert_eq!(by_vertices.get(&v), reference[v as usize]);
        }

        for (tree, distances) in [(&edge_tree, &by_edges), (&vertex_tree, &by_vertices)] {
            for (v, d) in distances.iter() {
                let path = tree.path_from_root(v).unwrap();
                prop_assert_eq!(path[0], 0);
                prop_assert_eq!(path_weight(&graph, &path).unwrap(), d);
            }
        }
    }

    #[test]
    fn prop_prim_matches_brute_force(raw in raw_edges()) {
        let graph = undirected(&raw);
        let tree = prim(&graph).unwrap();
        let component = dfs_reachable(&graph, &0).unwrap();

        prop_assert_eq!(tree.root(), Some(&0));
        prop_assert_eq!(tree.len(), component.len());
        prop_assert_eq!(tree.total_weight(&graph).unwrap(), brute_force_mst_weight(&graph));
    }

    #[test]
    fn prop_change_priority_below_minimum_pops_next(
        priorities in proptest::collection::vec(0u32..100, 1..20),
        pick in any::<proptest::sample::Index>(),
    ) {
        let mut queue: graphwalk_core::PriorityQueue<usize, u32> =
            priorities.iter().copied().enumerate().collect();
        let target = pick.index(priorities.len());
        let minimum = *queue.peek().unwrap().1;

        if minimum > 0 {
            queue.change_priority(&target, minimum - 1).unwrap();
            prop_assert_eq!(queue.pop(), Some(target));
        }

        let mut last = 0;
        while let Some((_, priority)) = queue.pop_with_priority() {
            prop_assert!(priority >= last);
            last = priority;
        }
    }
}
