use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::traversal::require_endpoints;
use crate::graph::{Edge, GraphProvider};

/// Outgoing edges of `vertex` sorted by (target, label).
fn sorted_children<'g, T, E, G>(graph: &'g G, vertex: &T) -> Result<Vec<&'g Edge<T, E>>>
where
    G: GraphProvider<T, E> + ?Sized,
    T: Ord,
    E: Ord,
{
    let mut neighbors: Vec<&Edge<T, E>> = graph.children_of(vertex)?.iter().collect();
    neighbors.sort_by(|a, b| a.to.cmp(&b.to).then_with(|| a.label.cmp(&b.label)));
    Ok(neighbors)
}

/// Find a minimum-hop path from `start` to `dest`, ignoring edge labels as weights.
///
/// Neighbors are expanded in (target, label) order, so when several
/// shortest paths exist the same one is returned every time.
///
/// Returns `Ok(None)` when `dest` is unreachable, `Ok(Some(vec![]))` when
/// `start == dest`, and `Err(UnknownVertex)` if either endpoint is not in
/// the graph.
#[tracing::instrument(skip_all, fields(start = ?start, dest = ?dest))]
pub fn bfs_find_path<T, E, G>(graph: &G, start: &T, dest: &T) -> Result<Option<Vec<Edge<T, E>>>>
where
    G: GraphProvider<T, E> + ?Sized,
    T: Clone + Eq + Hash + Ord + Debug,
    E: Clone + Ord,
{
    require_endpoints::<T, E, G>(graph, start, dest)?;

    // Each discovered vertex maps to the full edge path that reached it
    let mut paths: HashMap<T, Vec<Edge<T, E>>> = HashMap::new();
    let mut queue: VecDeque<T> = VecDeque::new();

    paths.insert(start.clone(), Vec::new());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        if current == *dest {
            let discovered = paths.len();
            let found = paths.remove(&current).unwrap_or_default();
            tracing::debug!(discovered, hops = found.len(), "bfs_path_found");
            return Ok(Some(found));
        }

        for edge in sorted_children(graph, &current)? {
            if paths.contains_key(&edge.to) {
                continue;
            }
            let mut extended = paths.get(&current).cloned().unwrap_or_default();
            extended.push(edge.clone());
            paths.insert(edge.to.clone(), extended);
            queue.push_back(edge.to.clone());
        }
    }

    tracing::debug!(discovered = paths.len(), "bfs_no_path");
    Ok(None)
}
