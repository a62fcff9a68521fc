use serde::Serialize;
use std::collections::HashMap;

use graphwalk_core::{Adjacency, GraphResult, Vertex, Weight};

/// Predecessor map rooted at the vertex a search started from.
///
/// The root maps to `None`. Vertices the search never reached are absent.
#[derive(Debug, Clone, Serialize)]
pub struct SearchTree<V> {
    root: Option<V>,
    parents: HashMap<V, Option<V>>,
}

impl<V: Vertex> PartialEq for SearchTree<V> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.parents == other.parents
    }
}

impl<V: Vertex> Eq for SearchTree<V> {}

impl<V: Vertex> Default for SearchTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> SearchTree<V> {
    pub fn new() -> Self {
        Self {
            root: None,
            parents: HashMap::new(),
        }
    }

    /// Record `v` under `predecessor` unless `v` is already in the tree.
    ///
    /// Returns whether `v` was newly added.
    pub(crate) fn settle(&mut self, v: V, predecessor: Option<V>) -> bool {
        if self.parents.contains_key(&v) {
            return false;
        }
        self.set_predecessor(v, predecessor);
        true
    }

    /// Insert or revise the predecessor of `v`.
    pub(crate) fn set_predecessor(&mut self, v: V, predecessor: Option<V>) {
        if predecessor.is_none() {
            self.root = Some(v.clone());
        }
        self.parents.insert(v, predecessor);
    }

    pub fn root(&self) -> Option<&V> {
        self.root.as_ref()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.parents.contains_key(v)
    }

    /// `None` if `v` is not in the tree, `Some(None)` for the root.
    pub fn predecessor(&self, v: &V) -> Option<Option<&V>> {
        self.parents.get(v).map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.parents.keys()
    }

    /// Tree edges as `(predecessor, vertex)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.parents
            .iter()
            .filter_map(|(v, pred)| pred.as_ref().map(|p| (p, v)))
    }

    /// Vertices from `target` back to the root, both included.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut current = self.parents.get_key_value(target)?;
        let mut path = vec![current.0.clone()];
        while let (_, Some(pred)) = current {
            path.push(pred.clone());
            current = self.parents.get_key_value(pred)?;
        }
        Some(path)
    }

    /// Vertices from the root to `target`.
    pub fn path_from_root(&self, target: &V) -> Option<Vec<V>> {
        self.path_to(target).map(|mut path| {
            path.reverse();
            path
        })
    }

    /// Number of tree edges between `target` and the root.
    pub fn depth(&self, target: &V) -> Option<usize> {
        self.path_to(target).map(|path| path.len() - 1)
    }

    /// Sum of the weights of every tree edge, looked up in `graph`.
    pub fn total_weight<G>(&self, graph: &G) -> GraphResult<Weight>
    where
        G: Adjacency<Vertex = V>,
    {
        self.edges()
            .map(|(pred, v)| graph.wt(pred, v))
            .sum::<GraphResult<Weight>>()
    }

    pub fn into_map(self) -> HashMap<V, Option<V>> {
        self.parents
    }
}

/// Best known distance from the source to each reached vertex.
///
/// Only finite distances are stored; `get` reports unreached vertices as
/// infinitely far away.
#[derive(Debug, Clone, Serialize)]
pub struct Distances<V> {
    inner: HashMap<V, Weight>,
}

impl<V: Vertex> PartialEq for Distances<V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<V: Vertex> Default for Distances<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Distances<V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub(crate) fn set(&mut self, v: V, distance: Weight) {
        self.inner.insert(v, distance);
    }

    pub fn get(&self, v: &V) -> Weight {
        self.inner.get(v).copied().unwrap_or(Weight::INFINITY)
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.inner.contains_key(v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> + '_ {
        self.inner.iter().map(|(v, d)| (v, *d))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_map(self) -> HashMap<V, Weight> {
        self.inner
    }
}

impl<V: Vertex> FromIterator<(V, Weight)> for Distances<V> {
    fn from_iter<I: IntoIterator<Item = (V, Weight)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().filter(|(_, d)| d.is_finite()).collect(),
        }
    }
}

/// Total weight of the edges along `path`, in order.
pub fn path_weight<G: Adjacency>(graph: &G, path: &[G::Vertex]) -> GraphResult<Weight> {
    path.windows(2).map(|pair| graph.wt(&pair[0], &pair[1])).sum()
}
