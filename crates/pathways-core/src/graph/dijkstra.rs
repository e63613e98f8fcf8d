use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::traversal::require_endpoints;
use crate::graph::{GraphProvider, Path, Weight};

/// One step of a candidate path, linked to the step before it.
///
/// Candidates that share a prefix share the same trail entries, so pushing
/// a new candidate costs one entry instead of a copy of the whole path.
#[derive(Debug, Clone)]
struct Trail<T, W> {
    vertex: T,
    parent: Option<usize>,
    weight: W,
}

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
///
/// `seq` records push order so equal-cost candidates pop first-in first-out.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry<W> {
    pub accumulated_cost: W,
    pub seq: u64,
    pub trail: usize,
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Incomparable costs (NaN) tie and fall through to push order
        self.accumulated_cost
            .partial_cmp(&other.accumulated_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Rebuild the candidate ending at `tip` as a [`Path`].
fn materialize<T: Clone, W: Weight>(trails: &[Trail<T, W>], tip: usize) -> Path<T, W> {
    let mut chain = vec![tip];
    let mut cursor = tip;
    while let Some(parent) = trails[cursor].parent {
        chain.push(parent);
        cursor = parent;
    }

    let root = &trails[cursor];
    chain
        .iter()
        .rev()
        .skip(1)
        .fold(Path::new(root.vertex.clone()), |path, &idx| {
            path.extend(trails[idx].vertex.clone(), trails[idx].weight)
        })
}

/// Find a minimum-cost path from `start` to `dest` over non-negative edge weights.
///
/// The frontier holds candidate paths ordered by total cost. A candidate
/// whose end vertex is already finalized is stale and is dropped when
/// popped, which stands in for a decrease-key operation.
///
/// Negative weights are not supported and are not detected; the result is
/// then unspecified. Returns `Ok(None)` when `dest` is unreachable and
/// `Err(UnknownVertex)` if either endpoint is not in the graph.
#[tracing::instrument(skip_all, fields(start = ?start, dest = ?dest))]
pub fn dijkstra_find_path<T, W, G>(graph: &G, start: &T, dest: &T) -> Result<Option<Path<T, W>>>
where
    G: GraphProvider<T, W> + ?Sized,
    T: Clone + Eq + Hash + Debug,
    W: Weight,
{
    require_endpoints::<T, W, G>(graph, start, dest)?;

    let mut trails: Vec<Trail<T, W>> = vec![Trail {
        vertex: start.clone(),
        parent: None,
        weight: W::zero(),
    }];
    let mut finalized: HashSet<T> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<W>>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut stale: usize = 0;

    heap.push(Reverse(HeapEntry {
        accumulated_cost: W::zero(),
        seq,
        trail: 0,
    }));

    while let Some(Reverse(entry)) = heap.pop() {
        let current = trails[entry.trail].vertex.clone();

        if current == *dest {
            tracing::debug!(
                finalized = finalized.len(),
                candidates = trails.len(),
                stale,
                "dijkstra_path_found"
            );
            return Ok(Some(materialize(&trails, entry.trail)));
        }

        if finalized.contains(&current) {
            stale += 1;
            continue;
        }

        for edge in graph.children_of(&current)? {
            if finalized.contains(&edge.to) {
                continue;
            }
            trails.push(Trail {
                vertex: edge.to.clone(),
                parent: Some(entry.trail),
                weight: edge.label,
            });
            seq += 1;
            heap.push(Reverse(HeapEntry {
                accumulated_cost: entry.accumulated_cost + edge.label,
                seq,
                trail: trails.len() - 1,
            }));
        }

        finalized.insert(current);
    }

    tracing::debug!(
        finalized = finalized.len(),
        candidates = trails.len(),
        stale,
        "dijkstra_no_path"
    );
    Ok(None)
}
