//! Campus map: buildings and walkways on a 2D coordinate plane
//!
//! Every distinct coordinate is a vertex and every walkway segment is a
//! directed edge weighted by its length. Routes between buildings are
//! minimum-distance paths found with Dijkstra.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path as FsPath;

use serde::Serialize;

use crate::error::{PathwaysError, Result};
use crate::graph::{dijkstra_find_path, Graph, GraphBuilder, Path};
use crate::records::{read_buildings, read_path_segments, BuildingRecord, PathSegmentRecord};

/// A map coordinate.
///
/// Equality and hashing are bit-exact on the coordinates, with `-0.0`
/// folded into `0.0`, so points read from different files compare equal
/// exactly when their text parsed to the same value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn key(&self) -> (u64, u64) {
        // Adding 0.0 turns -0.0 into 0.0
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}

/// Route between two buildings, as returned by [`CampusMap::find_shortest_path`]
pub type Route = Path<Point, f64>;

/// Buildings, their names and the walkway graph connecting them
#[derive(Debug, Clone)]
pub struct CampusMap {
    graph: Graph<Point, f64>,
    long_names: BTreeMap<String, String>,
    locations: HashMap<String, Point>,
}

impl CampusMap {
    /// Build the map from parsed building and walkway records.
    ///
    /// Walkway endpoints that are not buildings become unnamed vertices.
    #[tracing::instrument(skip_all, fields(buildings = buildings.len(), segments = segments.len()))]
    pub fn from_records(buildings: &[BuildingRecord], segments: &[PathSegmentRecord]) -> Self {
        let mut builder: GraphBuilder<Point, f64> = GraphBuilder::with_capacity(buildings.len());
        let mut long_names = BTreeMap::new();
        let mut locations = HashMap::with_capacity(buildings.len());

        for building in buildings {
            let point = Point::new(building.x, building.y);
            builder.add_vertex(point);
            long_names.insert(building.short_name.clone(), building.long_name.clone());
            locations.insert(building.short_name.clone(), point);
        }

        let mut waypoints = 0usize;
        for segment in segments {
            let from = Point::new(segment.x1, segment.y1);
            let to = Point::new(segment.x2, segment.y2);
            waypoints += usize::from(builder.add_vertex(from));
            waypoints += usize::from(builder.add_vertex(to));
            builder.add_edge(from, to, segment.distance);
        }

        tracing::debug!(waypoints, "campus_graph_built");
        Self {
            graph: builder.finish(),
            long_names,
            locations,
        }
    }

    /// Read both TSV files and build the map
    pub fn load(buildings_path: &FsPath, segments_path: &FsPath) -> Result<Self> {
        let buildings = read_buildings(buildings_path)?;
        let segments = read_path_segments(segments_path)?;
        Ok(Self::from_records(&buildings, &segments))
    }

    pub fn graph(&self) -> &Graph<Point, f64> {
        &self.graph
    }

    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.long_names.contains_key(short_name)
    }

    pub fn long_name_for_short(&self, short_name: &str) -> Result<&str> {
        self.long_names
            .get(short_name)
            .map(String::as_str)
            .ok_or_else(|| PathwaysError::UnknownBuilding {
                names: vec![short_name.to_string()],
            })
    }

    /// Short name to long name for every building, sorted by short name
    pub fn building_names(&self) -> &BTreeMap<String, String> {
        &self.long_names
    }

    pub fn location(&self, short_name: &str) -> Option<Point> {
        self.locations.get(short_name).copied()
    }

    /// Minimum-distance route between two buildings.
    ///
    /// Every unknown short name is reported in one `UnknownBuilding` error
    /// before any search runs. `Ok(None)` means no walkway connects them.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Option<Route>> {
        let mut unknown: Vec<String> = Vec::new();
        for name in [start, end] {
            if !self.locations.contains_key(name) && !unknown.iter().any(|u| u == name) {
                unknown.push(name.to_string());
            }
        }
        if !unknown.is_empty() {
            return Err(PathwaysError::UnknownBuilding { names: unknown });
        }

        let from = self.locations[start];
        let to = self.locations[end];
        dijkstra_find_path(&self.graph, &from, &to)
    }
}
