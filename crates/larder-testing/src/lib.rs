//! Testing infrastructure for larder integration tests.
//!
//! - `TestWorld`: isolated data directory, pinned "today", CLI execution
//! - `assertions`: checks against the JSON listing
//! - `fixtures`: sync documents written the way another device would
//! - `process`: background `larder watch` processes

pub mod assertions;
pub mod fixtures;
pub mod process;
pub mod world;

pub use world::{CliResult, TestWorld};

/// Reference date every `TestWorld` pins through `LARDER_TODAY`.
pub const TEST_TODAY: &str = "2026-10-18";
