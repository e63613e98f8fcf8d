//! CLI commands for pathways

pub mod buildings;
pub mod config;
pub mod connect;
pub mod dispatch;
pub mod route;
