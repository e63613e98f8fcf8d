//! Integration tests for the pathways CLI
//!
//! These tests run the pathways binary against small TSV datasets written
//! to a temporary directory.

mod basics;
mod buildings;
mod config;
mod connect;
mod route;
mod support;
