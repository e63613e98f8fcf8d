//! Co-occurrence network
//!
//! Entities that share a group (characters appearing in the same comic
//! book) are connected in both directions by an edge labeled with the
//! group. Connections between entities are found with BFS.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{PathwaysError, Result};
use crate::graph::{bfs_find_path, Edge, Graph, GraphBuilder};
use crate::records::{read_co_occurrences, CoOccurrence};

/// Graph of entities linked by the groups they share
#[derive(Debug, Clone)]
pub struct CoOccurrenceNetwork {
    graph: Graph<String, String>,
}

impl CoOccurrenceNetwork {
    /// Build the network from (entity, group) pairs.
    ///
    /// Vertices are added in first-appearance order. Groups, and members
    /// within a group, are also visited in first-appearance order, so the
    /// edge lists are identical for identical input. A repeated pair adds
    /// nothing.
    #[tracing::instrument(skip_all)]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CoOccurrence>,
    {
        let mut builder: GraphBuilder<String, String> = GraphBuilder::new();
        let mut group_order: Vec<&str> = Vec::new();
        let mut members: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut seen_pairs: HashSet<(&str, &str)> = HashSet::new();

        for record in records {
            builder.add_vertex(record.entity.clone());
            if !seen_pairs.insert((record.entity.as_str(), record.group.as_str())) {
                continue;
            }
            members
                .entry(record.group.as_str())
                .or_insert_with(|| {
                    group_order.push(record.group.as_str());
                    Vec::new()
                })
                .push(record.entity.as_str());
        }

        for group in &group_order {
            let entities = &members[group];
            for (i, first) in entities.iter().enumerate() {
                for second in &entities[i + 1..] {
                    builder.add_edge(first.to_string(), second.to_string(), group.to_string());
                    builder.add_edge(second.to_string(), first.to_string(), group.to_string());
                }
            }
        }

        tracing::debug!(groups = group_order.len(), "co_occurrence_groups");
        Self {
            graph: builder.finish(),
        }
    }

    /// Read a TSV of (hero, book) pairs and build the network
    pub fn load(path: &Path) -> Result<Self> {
        let records = read_co_occurrences(path)?;
        Ok(Self::from_records(&records))
    }

    pub fn graph(&self) -> &Graph<String, String> {
        &self.graph
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.graph.contains_vertex(&entity.to_string())
    }

    /// All entities in first-appearance order
    pub fn entities(&self) -> Vec<String> {
        self.graph.vertices()
    }

    /// Shortest chain of shared groups linking `from` to `to`.
    ///
    /// Every unknown name is reported in a single `UnknownEntity` error
    /// before any search runs. `Ok(None)` means the two are not connected.
    pub fn connect(&self, from: &str, to: &str) -> Result<Option<Vec<Edge<String, String>>>> {
        let mut unknown: Vec<String> = Vec::new();
        for name in [from, to] {
            if !self.contains(name) && !unknown.iter().any(|u| u == name) {
                unknown.push(name.to_string());
            }
        }
        if !unknown.is_empty() {
            return Err(PathwaysError::UnknownEntity { names: unknown });
        }

        bfs_find_path(&self.graph, &from.to_string(), &to.to_string())
    }
}
