//! Command implementations for the redis-bootstrap CLI

pub mod completions;
pub mod config;
pub mod run;
pub mod stage;
pub mod version;
