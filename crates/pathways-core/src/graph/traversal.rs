use crate::error::Result;
use crate::graph::Edge;

/// Read access to a finalized graph, as used by the path searches
pub trait GraphProvider<T, E> {
    fn contains_vertex(&self, vertex: &T) -> bool;

    /// Outgoing edges of `vertex` in insertion order.
    ///
    /// Fails with `UnknownVertex` when `vertex` is not in the graph.
    fn children_of(&self, vertex: &T) -> Result<&[Edge<T, E>]>;
}

/// Fail with `UnknownVertex` unless both search endpoints are in the graph.
pub(crate) fn require_endpoints<T, E, G>(graph: &G, start: &T, dest: &T) -> Result<()>
where
    G: GraphProvider<T, E> + ?Sized,
    T: std::fmt::Debug,
{
    for vertex in [start, dest] {
        if !graph.contains_vertex(vertex) {
            return Err(crate::error::PathwaysError::unknown_vertex(vertex));
        }
    }
    Ok(())
}
