//! # School Seed
//!
//! Seeds a graph database with a school, its students and teachers, and their
//! groups, then links them with membership and affiliation edges.
//!
//! ## Architecture
//!
//! 1. **Generator**: builds a logical graph from a fixture or at random
//! 2. **Materializer**: writes entities, maps logical ids to store ids, then
//!    writes edges through that mapping
//! 3. **Runner**: sequences generation, the optional wipe, materialization and
//!    index creation
//!
//! ## Modules
//!
//! - [`config`]: Constants and environment helpers
//! - [`generator`]: Fixed and randomized graph generation
//! - [`materializer`]: Two-phase writes into a `GraphStore`
//! - [`wipe`]: Store wipe pre-step
//! - [`indexer`]: Logical id index creation
//! - [`runner`]: Run orchestration
//! - [`errors`]: Error types for the seeder

pub mod config;
pub mod errors;
pub mod generator;
pub mod indexer;
pub mod materializer;
pub mod runner;
pub mod wipe;

pub use errors::SeedError;
pub use generator::{generate, FixtureSource, GenerationMode, RandomParams};
pub use materializer::{
    resolve_edges, IdentifierMapping, MaterializationResult, Materializer, MaterializerConfig,
};
pub use runner::{RunOptions, RunSummary, SeedRunner};
