//! Tab-separated dataset records
//!
//! Every dataset is a TSV file with a header row:
//! - co-occurrence pairs: `hero`, `book`
//! - buildings: `shortName`, `longName`, `x`, `y`
//! - path segments: `x1`, `y1`, `x2`, `y2`, `distance`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{PathwaysError, Result};

/// An entity appearing in a group, e.g. a character in a comic book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoOccurrence {
    #[serde(rename = "hero")]
    pub entity: String,
    #[serde(rename = "book")]
    pub group: String,
}

impl CoOccurrence {
    pub fn new(entity: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            group: group.into(),
        }
    }
}

/// A named building at a map coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRecord {
    pub short_name: String,
    pub long_name: String,
    pub x: f64,
    pub y: f64,
}

/// A walkable segment between two map coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegmentRecord {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub distance: f64,
}

fn deserialize_tsv<R: Read, T: DeserializeOwned>(reader: R, source_name: &str) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(reader);

    rdr.deserialize()
        .map(|row| {
            row.map_err(|e| {
                let line = e.position().map_or(0, |pos| pos.line());
                PathwaysError::invalid_record(source_name, line, e)
            })
        })
        .collect()
}

fn open_dataset(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(PathwaysError::DataNotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|e| crate::map_io_err!("open", path, e))
}

#[tracing::instrument(skip_all, fields(path = %path.display()))]
fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = open_dataset(path)?;
    let rows: Vec<T> = deserialize_tsv(file, &path.display().to_string())?;
    tracing::debug!(rows = rows.len(), "dataset_loaded");
    Ok(rows)
}

pub fn co_occurrences_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<CoOccurrence>> {
    deserialize_tsv(reader, source_name)
}

pub fn buildings_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<BuildingRecord>> {
    deserialize_tsv(reader, source_name)
}

pub fn path_segments_from_reader<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<PathSegmentRecord>> {
    deserialize_tsv(reader, source_name)
}

/// Read (entity, group) pairs from a TSV file
pub fn read_co_occurrences(path: &Path) -> Result<Vec<CoOccurrence>> {
    read_dataset(path)
}

/// Read building records from a TSV file
pub fn read_buildings(path: &Path) -> Result<Vec<BuildingRecord>> {
    read_dataset(path)
}

/// Read path segment records from a TSV file
pub fn read_path_segments(path: &Path) -> Result<Vec<PathSegmentRecord>> {
    read_dataset(path)
}
