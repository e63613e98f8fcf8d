//! Directed, edge-labeled graph storage
//!
//! A graph is assembled with [`GraphBuilder`] and then frozen into a
//! read-only [`Graph`] with [`GraphBuilder::finish`]. Searches only accept
//! the frozen form, so a graph is never read while it is still changing.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{PathwaysError, Result};
use crate::graph::{Edge, GraphProvider};

/// Vertex list in insertion order plus one outgoing edge list per vertex.
///
/// Every edge endpoint is a key of `index`.
#[derive(Debug, Clone)]
struct Adjacency<T, E> {
    vertices: Vec<T>,
    index: HashMap<T, usize>,
    outgoing: Vec<Vec<Edge<T, E>>>,
}

impl<T, E> Adjacency<T, E>
where
    T: Clone + Eq + Hash + Debug,
    E: Clone,
{
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
        }
    }

    fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            outgoing: Vec::with_capacity(vertex_count),
        }
    }

    fn contains(&self, vertex: &T) -> bool {
        self.index.contains_key(vertex)
    }

    fn children_of(&self, vertex: &T) -> Result<&[Edge<T, E>]> {
        self.index
            .get(vertex)
            .map(|&slot| self.outgoing[slot].as_slice())
            .ok_or_else(|| PathwaysError::unknown_vertex(vertex))
    }

    fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }
}

/// Mutable stage of a graph: vertices and edges are added one at a time.
#[derive(Debug, Clone)]
pub struct GraphBuilder<T, E> {
    inner: Adjacency<T, E>,
}

impl<T, E> GraphBuilder<T, E>
where
    T: Clone + Eq + Hash + Debug,
    E: Clone,
{
    pub fn new() -> Self {
        Self {
            inner: Adjacency::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            inner: Adjacency::with_capacity(vertex_count),
        }
    }

    /// Insert `vertex` with no outgoing edges.
    ///
    /// Returns false, leaving the graph untouched, if it is already present.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.inner.contains(&vertex) {
            return false;
        }
        let slot = self.inner.vertices.len();
        self.inner.index.insert(vertex.clone(), slot);
        self.inner.vertices.push(vertex);
        self.inner.outgoing.push(Vec::new());
        true
    }

    /// Append an edge `from -> to` carrying `label`.
    ///
    /// Returns false without changing anything when either endpoint is
    /// missing. Parallel edges, including exact duplicates, are kept.
    pub fn add_edge(&mut self, from: T, to: T, label: E) -> bool {
        let Some(&slot) = self.inner.index.get(&from) else {
            return false;
        };
        if !self.inner.contains(&to) {
            return false;
        }
        self.inner.outgoing[slot].push(Edge::new(from, to, label));
        true
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.inner.contains(vertex)
    }

    /// Snapshot of all vertices in insertion order.
    pub fn vertices(&self) -> Vec<T> {
        self.inner.vertices.clone()
    }

    pub fn children_of(&self, vertex: &T) -> Result<&[Edge<T, E>]> {
        self.inner.children_of(vertex)
    }

    pub fn size(&self) -> usize {
        self.inner.vertices.len()
    }

    /// Freeze the graph. No further mutation is possible.
    pub fn finish(self) -> Graph<T, E> {
        tracing::debug!(
            vertices = self.inner.vertices.len(),
            edges = self.inner.edge_count(),
            "graph_finished"
        );
        Graph { inner: self.inner }
    }
}

impl<T, E> Default for GraphBuilder<T, E>
where
    T: Clone + Eq + Hash + Debug,
    E: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only graph produced by [`GraphBuilder::finish`].
///
/// Holds no interior mutability, so a shared reference can serve any
/// number of concurrent searches.
#[derive(Debug, Clone)]
pub struct Graph<T, E> {
    inner: Adjacency<T, E>,
}

impl<T, E> Graph<T, E>
where
    T: Clone + Eq + Hash + Debug,
    E: Clone,
{
    /// An empty, already finalized graph.
    pub fn new() -> Self {
        Self {
            inner: Adjacency::new(),
        }
    }

    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.inner.contains(vertex)
    }

    /// Snapshot of all vertices in insertion order.
    pub fn vertices(&self) -> Vec<T> {
        self.inner.vertices.clone()
    }

    pub fn children_of(&self, vertex: &T) -> Result<&[Edge<T, E>]> {
        self.inner.children_of(vertex)
    }

    pub fn size(&self) -> usize {
        self.inner.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
}

impl<T, E> Default for Graph<T, E>
where
    T: Clone + Eq + Hash + Debug,
    E: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> GraphProvider<T, E> for Graph<T, E>
where
    T: Clone + Eq + Hash + Debug,
    E: Clone,
{
    fn contains_vertex(&self, vertex: &T) -> bool {
        self.inner.contains(vertex)
    }

    fn children_of(&self, vertex: &T) -> Result<&[Edge<T, E>]> {
        self.inner.children_of(vertex)
    }
}
