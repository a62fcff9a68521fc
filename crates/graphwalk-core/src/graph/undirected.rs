use super::digraph::Digraph;
use super::edge::{Edge, EdgeDirection};
use super::traits::{Adjacency, Vertex, Weight};
use crate::{GraphConfig, GraphResult};

/// Undirected, weighted graph
///
/// Every edge mutation is mirrored on the underlying digraph, so `(u, v)`
/// exists exactly when `(v, u)` does and both carry the same weight.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    inner: Digraph<V>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            inner: Digraph::with_config(config),
        }
    }

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
        self.inner.config()
    }

    pub fn add_vertex(&mut self, v: V) {
        self.inner.add_vertex(v);
    }

    pub fn remove_vertex(&mut self, v: &V) -> GraphResult<()> {
        self.inner.remove_vertex(v)
    }

    pub fn add_edge(&mut self, u: V, v: V) -> GraphResult<()> {
        let weight = self.config().effective_default_weight();
        self.add_weighted_edge(u, v, weight)
    }

    /// Insert or overwrite `{u, v}` in both directions.
    pub fn add_weighted_edge(&mut self, u: V, v: V, weight: Weight) -> GraphResult<()> {
        // The first insertion validates weight and endpoints, so the mirror cannot fail.
        self.inner.add_weighted_edge(u.clone(), v.clone(), weight)?;
        self.inner.add_weighted_edge(v, u, weight)
    }

    /// Remove `{u, v}`, failing with `NoSuchEdge` if it is absent.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> GraphResult<()> {
        self.inner.remove_edge(u, v)?;
        if u != v {
            self.inner.remove_edge(v, u)?;
        }
        Ok(())
    }

    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.inner.has_edge(u, v)
    }

    pub fn nbrs_weighted(&self, v: &V) -> GraphResult<impl Iterator<Item = (&V, Weight)> + '_> {
        self.inner.nbrs_weighted(v)
    }

    /// Each undirected edge once, with `source <= target`.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V>> + '_ {
        self.inner
            .edges()
            .filter(|e| e.source <= e.target)
            .map(|e| Edge {
                direction: EdgeDirection::Bidirectional,
                ..e
            })
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

impl<V: Vertex> Adjacency for Graph<V> {
    type Vertex = V;

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.vertices()
    }

    fn nbrs(&self, v: &V) -> GraphResult<impl Iterator<Item = &V> + '_> {
        self.inner.nbrs(v)
    }

    fn wt(&self, u: &V, v: &V) -> GraphResult<Weight> {
        self.inner.wt(u, v)
    }

    fn has_vertex(&self, v: &V) -> bool {
        self.inner.has_vertex(v)
    }
}
