//! Error types for logical graph construction.

use thiserror::Error;

use crate::types::{EdgeKind, EntityKind};

/// Errors raised while building or loading a logical graph.
///
/// Every variant describes a malformed dataset: they are reported before any
/// store interaction takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The dataset could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Two entities share the same logical id.
    #[error("Duplicate logical id {logical_id} ({kind})")]
    DuplicateLogicalId { kind: EntityKind, logical_id: String },

    /// An edge references a logical id that no entity carries.
    #[error("{edge_kind} edge references unknown entity {logical_id}")]
    UnknownEntity {
        edge_kind: EdgeKind,
        logical_id: String,
    },

    /// An edge endpoint exists but has the wrong kind for the edge.
    #[error("{edge_kind} edge expects a {expected} at {logical_id}, found a {actual}")]
    EndpointKindMismatch {
        edge_kind: EdgeKind,
        logical_id: String,
        expected: EntityKind,
        actual: EntityKind,
    },
}

impl GraphError {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a duplicate logical id error.
    pub fn duplicate(kind: EntityKind, logical_id: impl Into<String>) -> Self {
        Self::DuplicateLogicalId {
            kind,
            logical_id: logical_id.into(),
        }
    }

    /// Create an unknown entity error.
    pub fn unknown_entity(edge_kind: EdgeKind, logical_id: impl Into<String>) -> Self {
        Self::UnknownEntity {
            edge_kind,
            logical_id: logical_id.into(),
        }
    }
}
