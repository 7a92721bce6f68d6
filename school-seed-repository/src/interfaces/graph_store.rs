//! Graph store trait definition.

use async_trait::async_trait;
use school_seed_shared::{Attributes, EdgeKind, EntityKind};

use crate::errors::StoreError;
use crate::types::{QueryOutcome, StoreId};

/// Query issued by the default [`GraphStore::wipe_all`] implementation.
pub const WIPE_ALL_QUERY: &str = "MATCH (n) DETACH DELETE n";

/// Abstracts the graph database the seeder writes into (Neo4j, in-memory, etc.).
///
/// Implementations are shared between concurrently running insert tasks, so
/// they must tolerate concurrent calls without extra coordination from the
/// caller. No method retries on failure.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Insert a node of `kind` carrying `attributes`.
    ///
    /// # Returns
    ///
    /// * `Ok(StoreId)` - The identifier the store assigned to the new node
    /// * `Err(StoreError)` - If the insert fails
    async fn insert_entity(
        &self,
        attributes: &Attributes,
        kind: EntityKind,
    ) -> Result<StoreId, StoreError>;

    /// Insert a directed relationship of `kind` between two existing nodes.
    ///
    /// # Arguments
    ///
    /// * `from` - Store id of the source node
    /// * `to` - Store id of the target node
    /// * `kind` - Relationship type
    /// * `attributes` - Relationship properties (may be empty)
    ///
    /// # Returns
    ///
    /// * `Ok(StoreId)` - The identifier the store assigned to the relationship
    /// * `Err(StoreError)` - If either node is missing or the insert fails
    async fn insert_edge(
        &self,
        from: StoreId,
        to: StoreId,
        kind: EdgeKind,
        attributes: &Attributes,
    ) -> Result<StoreId, StoreError>;

    /// Run a raw query against the store.
    async fn query(&self, raw: &str) -> Result<QueryOutcome, StoreError>;

    /// Delete every node and relationship in the store.
    async fn wipe_all(&self) -> Result<(), StoreError> {
        self.query(WIPE_ALL_QUERY).await.map(|_| ())
    }
}
