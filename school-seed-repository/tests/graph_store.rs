//! Integration tests for the `GraphStore` interface and the in-memory store.

use async_trait::async_trait;
use school_seed_repository::{
    GraphStore, InMemoryGraphStore, QueryOutcome, StoreError, StoreId, WIPE_ALL_QUERY,
};
use school_seed_shared::{Attributes, EdgeKind, EntityKind};
use std::sync::Mutex;

/// Store that only records raw queries, to observe the default `wipe_all`.
struct QueryRecordingStore {
    queries: Mutex<Vec<String>>,
    fail: bool,
}

impl QueryRecordingStore {
    fn new(fail: bool) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            fail,
        }
    }
}

#[async_trait]
impl GraphStore for QueryRecordingStore {
    async fn insert_entity(
        &self,
        _attributes: &Attributes,
        _kind: EntityKind,
    ) -> Result<StoreId, StoreError> {
        Err(StoreError::unsupported("insert_entity"))
    }

    async fn insert_edge(
        &self,
        _from: StoreId,
        _to: StoreId,
        _kind: EdgeKind,
        _attributes: &Attributes,
    ) -> Result<StoreId, StoreError> {
        Err(StoreError::unsupported("insert_edge"))
    }

    async fn query(&self, raw: &str) -> Result<QueryOutcome, StoreError> {
        self.queries.lock().unwrap().push(raw.to_string());
        if self.fail {
            Err(StoreError::query("connection reset"))
        } else {
            Ok(QueryOutcome::default())
        }
    }
}

fn named(name: &str) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("name".to_string(), name.to_string());
    attributes
}

// ============================================================================
// Default wipe_all
// ============================================================================

#[tokio::test]
async fn test_default_wipe_all_issues_single_delete_query() {
    let store = QueryRecordingStore::new(false);

    store.wipe_all().await.unwrap();

    let queries = store.queries.lock().unwrap();
    assert_eq!(queries.as_slice(), [WIPE_ALL_QUERY.to_string()]);
}

#[tokio::test]
async fn test_default_wipe_all_propagates_query_error() {
    let store = QueryRecordingStore::new(true);

    let err = store.wipe_all().await.unwrap_err();
    assert_eq!(err, StoreError::query("connection reset"));
}

// ============================================================================
// In-memory store
// ============================================================================

#[tokio::test]
async fn test_memory_store_links_nodes() {
    let store = InMemoryGraphStore::new();
    let school = store
        .insert_entity(&named("Test School"), EntityKind::School)
        .await
        .unwrap();
    let user = store
        .insert_entity(&named("Teacher 0"), EntityKind::User)
        .await
        .unwrap();

    let edge = store
        .insert_edge(user, school, EdgeKind::Teacher, &Attributes::new())
        .await
        .unwrap();

    let relationships = store.relationships(EdgeKind::Teacher);
    assert_eq!(relationships.len(), 1);
    assert_eq!(relationships[0].id, edge);
    assert_eq!(relationships[0].from, user);
    assert_eq!(relationships[0].to, school);
    assert_eq!(
        store.node(school).unwrap().attributes.get("name").map(String::as_str),
        Some("Test School")
    );
}

#[tokio::test]
async fn test_memory_store_does_not_deduplicate() {
    let store = InMemoryGraphStore::new();
    for _ in 0..2 {
        store
            .insert_entity(&named("Test School"), EntityKind::School)
            .await
            .unwrap();
    }

    assert_eq!(store.nodes(EntityKind::School).len(), 2);
}

#[tokio::test]
async fn test_memory_store_wipe_all_clears_everything() {
    let store = InMemoryGraphStore::new();
    let school = store
        .insert_entity(&named("Test School"), EntityKind::School)
        .await
        .unwrap();
    let user = store
        .insert_entity(&named("Student 0"), EntityKind::User)
        .await
        .unwrap();
    store
        .insert_edge(user, school, EdgeKind::Student, &Attributes::new())
        .await
        .unwrap();

    store.wipe_all().await.unwrap();

    assert_eq!(store.node_count(), 0);
    assert_eq!(store.relationship_count(), 0);
}
