//! Pathways Core Library
//!
//! A generic directed, edge-labeled graph with breadth-first and Dijkstra
//! path search, plus the two datasets built on it: a co-occurrence network
//! of characters and a campus map of buildings and walkways.

pub mod campus;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod network;
pub mod records;
