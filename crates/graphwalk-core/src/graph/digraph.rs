use std::collections::BTreeMap;

use super::edge::{Edge, EdgeDirection};
use super::traits::{Adjacency, Vertex, Weight};
use crate::{GraphConfig, GraphError, GraphResult};

/// Directed, weighted graph
///
/// Stores an adjacency map from each vertex to its outgoing neighbors and
/// their edge weights. Every vertex is a key of the map, so the key set is
/// the vertex set.
#[derive(Debug, Clone)]
pub struct Digraph<V: Vertex> {
    adj: BTreeMap<V, BTreeMap<V, Weight>>,
    config: GraphConfig,
}

impl<V: Vertex> Default for Digraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Digraph<V> {
    /// Create a new empty graph with the default configuration
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adj: BTreeMap::new(),
            config,
        }
    }

    /// Build from a vertex set and unweighted `(u, v)` pairs.
    pub fn from_edges<I, E>(vertices: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        Self::from_edges_with_config(GraphConfig::default(), vertices, edges)
    }

    /// Like `from_edges`, but every edge gets `config`'s default weight and
    /// endpoints are checked when `config` is strict.
    pub fn from_edges_with_config<I, E>(
        config: GraphConfig,
        vertices: I,
        edges: E,
    ) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::with_config(config);
        for v in vertices {
            graph.add_vertex(v);
        }
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Build from a vertex set and `(u, v, weight)` triples.
    pub fn from_weighted_edges<I, E>(vertices: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V, Weight)>,
    {
        Self::from_weighted_edges_with_config(GraphConfig::default(), vertices, edges)
    }

    pub fn from_weighted_edges_with_config<I, E>(
        config: GraphConfig,
        vertices: I,
        edges: E,
    ) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V, Weight)>,
    {
        let mut graph = Self::with_config(config);
        for v in vertices {
            graph.add_vertex(v);
        }
        for (u, v, w) in edges {
            graph.add_weighted_edge(u, v, w)?;
        }
        Ok(graph)
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Add a vertex with no edges. Adding an existing vertex does nothing.
    pub fn add_vertex(&mut self, v: V) {
        self.adj.entry(v).or_default();
    }

    /// Remove a vertex together with every edge into or out of it.
    pub fn remove_vertex(&mut self, v: &V) -> GraphResult<()> {
        if self.adj.remove(v).is_none() {
            return Err(GraphError::unknown_vertex(v));
        }
        for nbrs in self.adj.values_mut() {
            nbrs.remove(v);
        }
        Ok(())
    }

    /// Insert edge `(u, v)` with the configured default weight.
    pub fn add_edge(&mut self, u: V, v: V) -> GraphResult<()> {
        let weight = self.config.effective_default_weight();
        self.add_weighted_edge(u, v, weight)
    }

    /// Insert edge `(u, v)`, overwriting the weight if it already exists.
    ///
    /// Missing endpoints are added unless the graph is configured with
    /// `strict_vertices`, in which case they are reported as `UnknownVertex`.
    pub fn add_weighted_edge(&mut self, u: V, v: V, weight: Weight) -> GraphResult<()> {
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight(weight));
        }
        if self.config.strict_vertices {
            for endpoint in [&u, &v] {
                if !self.adj.contains_key(endpoint) {
                    return Err(GraphError::unknown_vertex(endpoint));
                }
            }
        }
        self.add_vertex(v.clone());
        self.adj.entry(u).or_default().insert(v, weight);
        Ok(())
    }

    /// Remove edge `(u, v)`, failing with `NoSuchEdge` if it is absent.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<()> {
        self.adj
            .get_mut(u)
            .and_then(|nbrs| nbrs.remove(v))
            .map(|_| ())
            .ok_or_else(|| GraphError::no_such_edge(u, v))
    }

    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adj.get(u).is_some_and(|nbrs| nbrs.contains_key(v))
    }

    /// Outgoing neighbors of `v` together with the edge weights.
    pub fn nbrs_weighted(&self, v: &V) -> GraphResult<impl Iterator<Item = (&V, Weight)> + '_> {
        self.adj
            .get(v)
            .map(|nbrs| nbrs.iter().map(|(n, w)| (n, *w)))
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// All edges, in ascending `(source, target)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.adj.iter().flat_map(|(u, nbrs)| {
            nbrs.iter()
                .map(move |(v, w)| Edge::new(u.clone(), v.clone(), *w, EdgeDirection::Directed))
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(BTreeMap::len).sum()
    }
}

impl<V: Vertex> Adjacency for Digraph<V> {
    type Vertex = V;

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adj.keys()
    }

    fn nbrs(&self, v: &V) -> GraphResult<impl Iterator<Item = &V> + '_> {
        self.adj
            .get(v)
            .map(BTreeMap::keys)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    fn wt(&self, u: &V, v: &V) -> GraphResult<Weight> {
        self.adj
            .get(u)
            .and_then(|nbrs| nbrs.get(v))
            .copied()
            .ok_or_else(|| GraphError::no_such_edge(u, v))
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.adj.contains_key(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Digraph<u32> {
        Digraph::from_edges(1..=5, [(1, 2), (2, 3), (3, 4), (4, 5)]).unwrap()
    }

    #[test]
    fn test_graph_creation() {
        let graph: Digraph<u32> = Digraph::new();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = Digraph::new();
        graph.add_vertex("a");
        graph.add_vertex("a");
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.nbrs(&"a").unwrap().count(), 0);
    }

    #[test]
    fn test_add_edge_uses_default_weight() {
        let mut graph = Digraph::new();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.wt(&1, &2).unwrap(), 1.0);
        assert!(graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
    }

    #[test]
    fn test_add_edge_uses_configured_default_weight() {
        let mut graph = Digraph::with_config(GraphConfig::default().with_default_weight(7.0));
        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.wt(&1, &2).unwrap(), 7.0);
    }

    #[test]
    fn test_from_edges_with_config() {
        let config = GraphConfig::default().with_default_weight(2.5);
        let graph =
            Digraph::from_edges_with_config(config.clone(), 1..=3, [(1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.wt(&2, &3).unwrap(), 2.5);
        assert_eq!(graph.config(), &config);

        let err = Digraph::from_weighted_edges_with_config(config.strict(), [1], [(1, 2, 1.0)])
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex(_)));
    }

    #[test]
    fn test_add_edge_auto_adds_endpoints() {
        let mut graph = Digraph::new();
        graph.add_edge(1, 2).unwrap();

        let vertices: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(vertices, vec![1, 2]);
    }

    #[test]
    fn test_strict_graph_rejects_unknown_endpoints() {
        let mut graph = Digraph::with_config(GraphConfig::default().strict());
        graph.add_vertex(1);

        let err = graph.add_edge(1, 2).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVertex(_)));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_vertex(&2));
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = Digraph::new();
        graph.add_weighted_edge(1, 2, 5.0).unwrap();
        graph.add_weighted_edge(1, 2, 2.0).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.wt(&1, &2).unwrap(), 2.0);
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let mut graph = Digraph::new();
        assert!(matches!(
            graph.add_weighted_edge(1, 2, f64::NAN),
            Err(GraphError::InvalidWeight(_))
        ));
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = path_graph();
        graph.remove_edge(&2, &3).unwrap();

        assert!(!graph.has_edge(&2, &3));
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_vertex(&3));
    }

    #[test]
    fn test_remove_missing_edge_fails() {
        let mut graph = path_graph();
        let err = graph.remove_edge(&3, &2).unwrap_err();
        assert!(matches!(err, GraphError::NoSuchEdge { .. }));
    }

    #[test]
    fn test_remove_vertex() {
        let mut graph = Digraph::from_edges(1..=3, [(1, 2), (2, 3), (3, 1)]).unwrap();

        graph.remove_vertex(&2).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&3, &1));
        assert!(graph.remove_vertex(&2).is_err());
    }

    #[test]
    fn test_nbrs() {
        let graph = Digraph::from_edges(1..=4, [(1, 3), (1, 2), (2, 4)]).unwrap();

        let nbrs: Vec<_> = graph.nbrs(&1).unwrap().copied().collect();
        assert_eq!(nbrs, vec![2, 3]);
        assert_eq!(graph.nbrs(&4).unwrap().count(), 0);
    }

    #[test]
    fn test_nbrs_is_restartable() {
        let graph = path_graph();
        let first: Vec<_> = graph.nbrs(&2).unwrap().collect();
        let second: Vec<_> = graph.nbrs(&2).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nbrs_unknown_vertex() {
        let graph = path_graph();
        assert!(matches!(
            graph.nbrs(&9).map(|n| n.count()),
            Err(GraphError::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_nbrs_weighted() {
        let graph = Digraph::from_weighted_edges([1, 2, 3], [(1, 2, 0.5), (1, 3, 2.0)]).unwrap();
        let nbrs: Vec<_> = graph.nbrs_weighted(&1).unwrap().collect();
        assert_eq!(nbrs, vec![(&2, 0.5), (&3, 2.0)]);
    }

    #[test]
    fn test_wt_missing_edge() {
        let graph = path_graph();
        assert!(matches!(
            graph.wt(&5, &4),
            Err(GraphError::NoSuchEdge { .. })
        ));
    }

    #[test]
    fn test_edges_are_directed() {
        let graph = Digraph::from_weighted_edges([1, 2], [(1, 2, 3.0), (2, 1, 4.0)]).unwrap();
        let edges: Vec<_> = graph.edges().collect();

        assert_eq!(
            edges,
            vec![
                Edge::new(1, 2, 3.0, EdgeDirection::Directed),
                Edge::new(2, 1, 4.0, EdgeDirection::Directed),
            ]
        );
    }
}
