//! Error types for the school seeder.

use school_seed_repository::StoreError;
use school_seed_shared::{Edge, EdgeKind, Entity, EntityKind, GraphError};
use thiserror::Error;

/// Errors that can abort a seeding run.
///
/// None of them is retried. Variants raised while writing carry the kind and
/// logical id of the record involved, so a failure can be traced without
/// inspecting the store.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The fixture file could not be read.
    #[error("Failed to read fixture {path}: {message}")]
    FixtureUnreadable { path: String, message: String },

    /// The dataset is unparsable or references entities it does not contain.
    #[error("Malformed fixture: {0}")]
    MalformedFixture(#[from] GraphError),

    /// An entity or edge insert failed.
    #[error("Failed to write {target}: {source}")]
    StoreWriteFailure {
        target: String,
        #[source]
        source: StoreError,
    },

    /// An edge endpoint has no store id after the entity phase.
    #[error("Unresolved {edge_kind} edge endpoint: no {expected} with logical id {logical_id}")]
    UnresolvedReference {
        edge_kind: EdgeKind,
        expected: EntityKind,
        logical_id: String,
    },

    /// Deleting existing data failed.
    #[error("Failed to wipe store: {0}")]
    WipeFailure(#[source] StoreError),

    /// An insert task panicked or was cancelled.
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

impl SeedError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a task error.
    pub fn task(msg: impl Into<String>) -> Self {
        Self::TaskFailed(msg.into())
    }

    /// Create a write failure for an entity insert.
    pub fn entity_write(entity: &Entity, source: StoreError) -> Self {
        Self::StoreWriteFailure {
            target: format!("{} entity {}", entity.kind, entity.logical_id),
            source,
        }
    }

    /// Create a write failure for an edge insert.
    pub fn edge_write(edge: &Edge, source: StoreError) -> Self {
        Self::StoreWriteFailure {
            target: format!(
                "{} edge {} -> {}",
                edge.kind, edge.from_logical_id, edge.to_logical_id
            ),
            source,
        }
    }

    /// Create an unresolved reference error.
    pub fn unresolved(edge_kind: EdgeKind, expected: EntityKind, logical_id: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            edge_kind,
            expected,
            logical_id: logical_id.into(),
        }
    }
}
