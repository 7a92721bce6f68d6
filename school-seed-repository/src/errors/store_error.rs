//! Graph store error types.

use thiserror::Error;

/// Errors from graph store operations.
///
/// Returned by every `GraphStore` method regardless of the backend, so callers
/// can attach their own context (which entity or edge failed) on top.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Failed to establish a connection to the store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A query was rejected or failed while running.
    #[error("Query error: {0}")]
    QueryError(String),

    /// A write completed without creating the expected record.
    #[error("Write error: {0}")]
    WriteError(String),

    /// A response row could not be decoded.
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The operation is not supported by this store.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::WriteError(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeError(msg.into())
    }

    /// Create an unsupported operation error.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}

impl From<neo4rs::Error> for StoreError {
    fn from(err: neo4rs::Error) -> Self {
        Self::QueryError(err.to_string())
    }
}
