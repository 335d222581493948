//! CLI command handlers.

pub mod config;
pub mod generate;
pub mod inquire;
pub mod render;
