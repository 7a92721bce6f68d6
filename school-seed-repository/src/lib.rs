//! # School Seed Repository
//!
//! This crate provides the `GraphStore` interface the seeder writes through,
//! its error type, and two implementations: Neo4j over Bolt and an in-memory
//! store for dry runs and tests.

pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod neo4j;
pub mod types;

pub use errors::StoreError;
pub use interfaces::{GraphStore, WIPE_ALL_QUERY};
pub use memory::{InMemoryGraphStore, StoredNode, StoredRelationship};
pub use neo4j::Neo4jGraphStore;
pub use types::{QueryOutcome, StoreId};
