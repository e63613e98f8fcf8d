//! Immutable weighted path value

use serde::Serialize;

use crate::graph::{Segment, Weight};

/// A route from a fixed start vertex through zero or more weighted segments.
///
/// Paths are values: [`Path::extend`] returns a new path and leaves the
/// receiver untouched. The cost of a path is the sum of its segment costs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<T, W> {
    start: T,
    segments: Vec<Segment<T, W>>,
    cost: W,
}

impl<T, W> Path<T, W>
where
    T: Clone,
    W: Weight,
{
    /// The zero-length path at `start`, with cost zero.
    pub fn new(start: T) -> Self {
        Self {
            start,
            segments: Vec::new(),
            cost: W::zero(),
        }
    }

    /// A copy of this path with one more segment, `end() -> next`.
    pub fn extend(&self, next: T, weight: W) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(Segment {
            start: self.end().clone(),
            end: next,
            cost: weight,
        });
        Self {
            start: self.start.clone(),
            segments,
            cost: self.cost + weight,
        }
    }

    pub fn cost(&self) -> W {
        self.cost
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    /// Vertex reached by the last segment, or the start if there is none.
    pub fn end(&self) -> &T {
        self.segments.last().map_or(&self.start, |s| &s.end)
    }

    /// Segments in start-to-end order. Each call starts a fresh iteration.
    pub fn segments(&self) -> impl Iterator<Item = &Segment<T, W>> + '_ {
        self.segments.iter()
    }

    /// Every vertex on the path, start first.
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::once(&self.start).chain(self.segments.iter().map(|s| &s.end))
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<'a, T, W> IntoIterator for &'a Path<T, W> {
    type Item = &'a Segment<T, W>;
    type IntoIter = std::slice::Iter<'a, Segment<T, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
