//! In-memory graph store.
//!
//! Keeps nodes and relationships in process memory. Used for dry runs and as a
//! well-behaved store in tests. Like a real graph database it assigns its own
//! ids, refuses relationships whose endpoints do not exist, and never
//! deduplicates.

use async_trait::async_trait;
use school_seed_shared::{Attributes, EdgeKind, EntityKind};
use std::sync::{Mutex, MutexGuard};

use crate::errors::StoreError;
use crate::interfaces::GraphStore;
use crate::types::{QueryOutcome, StoreId};

/// A node held by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredNode {
    pub id: StoreId,
    pub kind: EntityKind,
    pub attributes: Attributes,
}

/// A relationship held by the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRelationship {
    pub id: StoreId,
    pub kind: EdgeKind,
    pub from: StoreId,
    pub to: StoreId,
    pub attributes: Attributes,
}

#[derive(Debug, Default)]
struct MemoryGraph {
    next_node_id: i64,
    next_relationship_id: i64,
    nodes: Vec<StoredNode>,
    relationships: Vec<StoredRelationship>,
}

impl MemoryGraph {
    fn node(&self, id: StoreId) -> Option<&StoredNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGraphStore {
    graph: Mutex<MemoryGraph>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryGraph> {
        // A panic while holding the lock cannot leave the vectors half-written.
        self.graph.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn node_count(&self) -> usize {
        self.lock().nodes.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.lock().relationships.len()
    }

    /// Snapshot of every node of `kind`.
    pub fn nodes(&self, kind: EntityKind) -> Vec<StoredNode> {
        self.lock()
            .nodes
            .iter()
            .filter(|n| n.kind == kind)
            .cloned()
            .collect()
    }

    /// Snapshot of every relationship of `kind`.
    pub fn relationships(&self, kind: EdgeKind) -> Vec<StoredRelationship> {
        self.lock()
            .relationships
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect()
    }

    /// Look up a node by store id.
    pub fn node(&self, id: StoreId) -> Option<StoredNode> {
        self.lock().node(id).cloned()
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn insert_entity(
        &self,
        attributes: &Attributes,
        kind: EntityKind,
    ) -> Result<StoreId, StoreError> {
        let mut graph = self.lock();
        let id = StoreId(graph.next_node_id);
        graph.next_node_id += 1;
        graph.nodes.push(StoredNode {
            id,
            kind,
            attributes: attributes.clone(),
        });
        Ok(id)
    }

    async fn insert_edge(
        &self,
        from: StoreId,
        to: StoreId,
        kind: EdgeKind,
        attributes: &Attributes,
    ) -> Result<StoreId, StoreError> {
        let mut graph = self.lock();
        for endpoint in [from, to] {
            if graph.node(endpoint).is_none() {
                return Err(StoreError::write(format!(
                    "{} relationship endpoint {} does not exist",
                    kind, endpoint
                )));
            }
        }

        let id = StoreId(graph.next_relationship_id);
        graph.next_relationship_id += 1;
        graph.relationships.push(StoredRelationship {
            id,
            kind,
            from,
            to,
            attributes: attributes.clone(),
        });
        Ok(id)
    }

    async fn query(&self, raw: &str) -> Result<QueryOutcome, StoreError> {
        Err(StoreError::unsupported(format!(
            "in-memory store cannot run raw queries: {}",
            raw
        )))
    }

    async fn wipe_all(&self) -> Result<(), StoreError> {
        let mut graph = self.lock();
        graph.nodes.clear();
        graph.relationships.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryGraphStore::new();
        let a = store
            .insert_entity(&Attributes::new(), EntityKind::User)
            .await
            .unwrap();
        let b = store
            .insert_entity(&Attributes::new(), EntityKind::School)
            .await
            .unwrap();

        assert_eq!(a, StoreId(0));
        assert_eq!(b, StoreId(1));
        assert_eq!(store.nodes(EntityKind::User).len(), 1);
    }

    #[tokio::test]
    async fn test_edge_requires_existing_endpoints() {
        let store = InMemoryGraphStore::new();
        let user = store
            .insert_entity(&Attributes::new(), EntityKind::User)
            .await
            .unwrap();

        let err = store
            .insert_edge(user, StoreId(42), EdgeKind::Student, &Attributes::new())
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::WriteError(_)));
        assert_eq!(store.relationship_count(), 0);
    }

    #[tokio::test]
    async fn test_raw_queries_are_unsupported() {
        let store = InMemoryGraphStore::new();
        let err = store.query("SHOW INDEXES").await.unwrap_err();
        assert!(matches!(err, StoreError::Unsupported(_)));
    }
}
