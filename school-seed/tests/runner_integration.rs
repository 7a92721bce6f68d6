//! Integration tests for full seeding runs against the in-memory store.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use school_seed::generator::{generate_random, RandomParams};
use school_seed::{
    FixtureSource, GenerationMode, MaterializerConfig, RunOptions, SeedError, SeedRunner,
};
use school_seed_repository::{GraphStore, InMemoryGraphStore, QueryOutcome, StoreError, StoreId};
use school_seed_shared::{Attributes, EdgeKind, EntityKind, GraphError};
use std::collections::HashSet;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// Store whose wipe always fails
struct BrokenWipeStore {
    inner: InMemoryGraphStore,
    writes: AtomicUsize,
}

#[async_trait]
impl GraphStore for BrokenWipeStore {
    async fn insert_entity(
        &self,
        attributes: &Attributes,
        kind: EntityKind,
    ) -> Result<StoreId, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.insert_entity(attributes, kind).await
    }

    async fn insert_edge(
        &self,
        from: StoreId,
        to: StoreId,
        kind: EdgeKind,
        attributes: &Attributes,
    ) -> Result<StoreId, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.insert_edge(from, to, kind, attributes).await
    }

    async fn query(&self, _raw: &str) -> Result<QueryOutcome, StoreError> {
        Err(StoreError::connection("connection refused"))
    }
}

fn runner(store: Arc<dyn GraphStore>) -> SeedRunner {
    SeedRunner::new(store, MaterializerConfig::default())
}

async fn prepopulate(store: &InMemoryGraphStore) {
    store
        .insert_entity(&Attributes::new(), EntityKind::School)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fixture_run_with_wipe_replaces_data() {
    let store = Arc::new(InMemoryGraphStore::new());
    prepopulate(&store).await;

    let options = RunOptions {
        wipe: true,
        ..RunOptions::default()
    };
    let summary = runner(store.clone()).execute(&options).await.unwrap();

    assert_eq!(summary.materialization.inserted_entities, 7);
    assert_eq!(summary.materialization.inserted_edges, 7);
    assert_eq!(summary.entity_counts.get(&EntityKind::User), Some(&5));
    assert_eq!(summary.indexes_created, None);
    assert_eq!(store.node_count(), 7);
}

#[tokio::test]
async fn test_run_without_wipe_appends() {
    let store = Arc::new(InMemoryGraphStore::new());
    prepopulate(&store).await;

    runner(store.clone())
        .execute(&RunOptions::default())
        .await
        .unwrap();

    assert_eq!(store.node_count(), 8);
}

#[tokio::test]
async fn test_wipe_failure_aborts_before_writes() {
    let store = Arc::new(BrokenWipeStore {
        inner: InMemoryGraphStore::new(),
        writes: AtomicUsize::new(0),
    });
    let options = RunOptions {
        wipe: true,
        ..RunOptions::default()
    };

    let err = runner(store.clone()).execute(&options).await.unwrap_err();

    assert!(matches!(err, SeedError::WipeFailure(StoreError::ConnectionError(_))));
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

fn malformed_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "School": [{{ "id": "s1", "name": "Test School" }}],
            "Group": [{{ "id": "g1", "name": "Group 0", "users": ["nobody"] }}]
        }}"#
    )
    .unwrap();
    file
}

#[tokio::test]
async fn test_wipe_runs_before_malformed_fixture_is_read() {
    let file = malformed_fixture();
    let store = Arc::new(InMemoryGraphStore::new());
    prepopulate(&store).await;
    let options = RunOptions {
        wipe: true,
        mode: GenerationMode::Fixed(FixtureSource::File(file.path().to_path_buf())),
        create_indexes: false,
    };

    let err = runner(store.clone()).execute(&options).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::MalformedFixture(GraphError::UnknownEntity { .. })
    ));
    assert_eq!(store.node_count(), 0);
}

#[tokio::test]
async fn test_truncated_fixture_after_wipe() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "School": ["#).unwrap();

    let store = Arc::new(InMemoryGraphStore::new());
    prepopulate(&store).await;
    let options = RunOptions {
        wipe: true,
        mode: GenerationMode::Fixed(FixtureSource::File(file.path().to_path_buf())),
        create_indexes: false,
    };

    let err = runner(store.clone()).execute(&options).await.unwrap_err();

    assert!(matches!(err, SeedError::MalformedFixture(GraphError::ParseError(_))));
    assert_eq!(store.node_count(), 0);
}

#[tokio::test]
async fn test_wipe_failure_reported_before_malformed_fixture() {
    let file = malformed_fixture();
    let store = Arc::new(BrokenWipeStore {
        inner: InMemoryGraphStore::new(),
        writes: AtomicUsize::new(0),
    });
    let options = RunOptions {
        wipe: true,
        mode: GenerationMode::Fixed(FixtureSource::File(file.path().to_path_buf())),
        create_indexes: false,
    };

    let err = runner(store.clone()).execute(&options).await.unwrap_err();

    assert!(matches!(err, SeedError::WipeFailure(_)));
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_malformed_fixture_without_wipe_writes_nothing() {
    let file = malformed_fixture();
    let store = Arc::new(InMemoryGraphStore::new());
    prepopulate(&store).await;
    let options = RunOptions {
        mode: GenerationMode::Fixed(FixtureSource::File(file.path().to_path_buf())),
        ..RunOptions::default()
    };

    let err = runner(store.clone()).execute(&options).await.unwrap_err();

    assert!(matches!(err, SeedError::MalformedFixture(_)));
    assert_eq!(store.node_count(), 1);
}

#[tokio::test]
async fn test_index_failures_do_not_fail_run() {
    let store = Arc::new(InMemoryGraphStore::new());
    let options = RunOptions {
        create_indexes: true,
        ..RunOptions::default()
    };

    let summary = runner(store).execute(&options).await.unwrap();
    assert_eq!(summary.indexes_created, Some(0));
}

#[tokio::test]
async fn test_randomized_run() {
    let store = Arc::new(InMemoryGraphStore::new());
    let options = RunOptions {
        mode: GenerationMode::Randomized(RandomParams::exact(120, 20, 3)),
        ..RunOptions::default()
    };

    let summary = runner(store.clone()).execute(&options).await.unwrap();

    // 120 students + 6 teachers, 18 groups, 1 school
    assert_eq!(summary.materialization.inserted_entities, 145);
    assert_eq!(store.nodes(EntityKind::Group).len(), 18);
}

#[test]
fn test_random_graphs_have_no_dangling_edges() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random(&RandomParams::default(), &mut rng).unwrap();

        let ids: HashSet<&str> = graph.entities().iter().map(|e| e.logical_id.as_str()).collect();
        for edge in graph.edges() {
            assert!(ids.contains(edge.from_logical_id.as_str()));
            assert!(ids.contains(edge.to_logical_id.as_str()));
        }

        // every group has at least its teacher as a member
        let teachers: HashSet<&str> = graph
            .edges()
            .iter()
            .filter(|e| e.kind == EdgeKind::Teacher)
            .map(|e| e.from_logical_id.as_str())
            .collect();
        for group in graph.logical_ids(EntityKind::Group) {
            assert!(graph.edges().iter().any(|e| e.kind == EdgeKind::Member
                && e.to_logical_id == group
                && teachers.contains(e.from_logical_id.as_str())));
        }
    }
}
