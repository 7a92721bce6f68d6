//! Two-phase materialization of a logical graph into a graph store.
//!
//! Phase 1 inserts every entity concurrently and collects the store ids into an
//! [`IdentifierMapping`]. Phase 2 starts only once every entity insert has
//! settled: it resolves each edge's endpoints through the mapping, then inserts
//! every edge concurrently. A single failure in either phase fails the run.
//! Nothing is rolled back; entities committed before a failure stay in the
//! store.

mod mapping;

pub use mapping::IdentifierMapping;

use futures::future::join_all;
use school_seed_repository::{GraphStore, StoreError, StoreId};
use school_seed_shared::{Attributes, Edge, Entity, EntityKind, GraphError, LogicalGraph};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::config::{DEFAULT_CONCURRENCY_LIMIT, PROGRESS_REPORT_INTERVAL};
use crate::errors::SeedError;

/// Tuning for a materializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterializerConfig {
    /// Maximum number of in-flight insert requests per phase.
    pub concurrency_limit: usize,
    /// Log progress every this many settled requests.
    pub report_interval: usize,
}

impl Default for MaterializerConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            report_interval: PROGRESS_REPORT_INTERVAL,
        }
    }
}

impl MaterializerConfig {
    pub fn with_concurrency_limit(concurrency_limit: usize) -> Self {
        Self {
            concurrency_limit,
            ..Self::default()
        }
    }
}

/// Counts reported by a successful materialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializationResult {
    pub inserted_entities: usize,
    pub inserted_edges: usize,
}

/// An edge whose endpoints have been mapped to store ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEdge {
    pub edge: Edge,
    pub from: StoreId,
    pub to: StoreId,
}

/// Resolve every edge's endpoints through `mapping`.
///
/// Endpoint kinds follow the edge kind, so a logical id mapped under another
/// kind does not resolve.
///
/// # Errors
///
/// * `SeedError::UnresolvedReference` - for the first endpoint with no store id
pub fn resolve_edges(
    edges: &[Edge],
    mapping: &IdentifierMapping,
) -> Result<Vec<ResolvedEdge>, SeedError> {
    edges
        .iter()
        .map(|edge| -> Result<ResolvedEdge, SeedError> {
            let (from_kind, to_kind) = edge.kind.endpoints();
            let from = mapping
                .resolve(from_kind, &edge.from_logical_id)
                .ok_or_else(|| SeedError::unresolved(edge.kind, from_kind, &edge.from_logical_id))?;
            let to = mapping
                .resolve(to_kind, &edge.to_logical_id)
                .ok_or_else(|| SeedError::unresolved(edge.kind, to_kind, &edge.to_logical_id))?;

            Ok(ResolvedEdge {
                edge: edge.clone(),
                from,
                to,
            })
        })
        .collect()
}

/// Writes logical graphs into a [`GraphStore`].
pub struct Materializer {
    store: Arc<dyn GraphStore>,
    config: MaterializerConfig,
}

impl Materializer {
    pub fn new(store: Arc<dyn GraphStore>, config: MaterializerConfig) -> Self {
        let config = MaterializerConfig {
            concurrency_limit: config.concurrency_limit.max(1),
            report_interval: config.report_interval.max(1),
        };
        Self { store, config }
    }

    /// Write every entity, then every edge, of `graph`.
    pub async fn materialize(&self, graph: &LogicalGraph) -> Result<MaterializationResult, SeedError> {
        if graph.is_empty() {
            info!("Nothing to write");
            return Ok(MaterializationResult::default());
        }

        let start = Instant::now();

        info!("Creating {} entities...", graph.entities().len());
        let mapping = self.write_entities(graph.entities()).await?;
        for kind in EntityKind::ALL {
            info!("✓ Created {} {} entities", mapping.count(kind), kind);
        }

        let resolved = resolve_edges(graph.edges(), &mapping)?;

        info!("Creating {} edges...", resolved.len());
        let inserted_edges = self.write_edges(resolved).await?;
        info!("✓ Created {} edges", inserted_edges);

        info!(
            elapsed_secs = start.elapsed().as_secs_f64(),
            "Materialization complete"
        );

        Ok(MaterializationResult {
            inserted_entities: mapping.total(),
            inserted_edges,
        })
    }

    /// Phase 1: insert all entities and capture their store ids.
    ///
    /// Every request is allowed to settle before the result is reported; the
    /// first failure (in input order) is returned. A repeated kind and logical
    /// id is rejected before any insert is issued, so every mapped id belongs
    /// to exactly one written entity.
    pub async fn write_entities(&self, entities: &[Entity]) -> Result<IdentifierMapping, SeedError> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in entities {
            if !seen.insert((entity.kind, entity.logical_id.as_str())) {
                return Err(GraphError::duplicate(entity.kind, &entity.logical_id).into());
            }
        }

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit));
        let processed = Arc::new(AtomicUsize::new(0));
        let total = entities.len();
        let report_interval = self.config.report_interval;

        let mut tasks = Vec::with_capacity(total);

        for entity in entities {
            let entity = entity.clone();
            let store = self.store.clone();
            let semaphore = semaphore.clone();
            let processed = processed.clone();

            let task = tokio::spawn(async move {
                let result = match semaphore.acquire().await {
                    Ok(_permit) => store.insert_entity(&entity.attributes, entity.kind).await,
                    Err(e) => Err(StoreError::write(format!("Insert limiter closed: {}", e))),
                };

                let current = processed.fetch_add(1, Ordering::Relaxed) + 1;
                if current % report_interval == 0 || current == total {
                    info!("  Progress: {}/{} entities", current, total);
                }

                (entity, result)
            });

            tasks.push(task);
        }

        let mut mapping = IdentifierMapping::new();
        let mut first_failure = None;
        let mut failed = 0;

        for joined in join_all(tasks).await {
            let (entity, result) = joined.map_err(|e| SeedError::task(e.to_string()))?;
            match result {
                Ok(store_id) => {
                    mapping.insert(entity.kind, entity.logical_id, store_id);
                }
                Err(e) => {
                    warn!(
                        kind = %entity.kind,
                        logical_id = %entity.logical_id,
                        error = %e,
                        "Failed to create entity"
                    );
                    failed += 1;
                    if first_failure.is_none() {
                        first_failure = Some(SeedError::entity_write(&entity, e));
                    }
                }
            }
        }

        match first_failure {
            Some(err) => {
                warn!("{} of {} entity inserts failed, no edges will be written", failed, total);
                Err(err)
            }
            None => Ok(mapping),
        }
    }

    /// Phase 2: insert all resolved edges.
    pub async fn write_edges(&self, edges: Vec<ResolvedEdge>) -> Result<usize, SeedError> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit));
        let processed = Arc::new(AtomicUsize::new(0));
        let total = edges.len();
        let report_interval = self.config.report_interval;

        let mut tasks = Vec::with_capacity(total);

        for resolved in edges {
            let store = self.store.clone();
            let semaphore = semaphore.clone();
            let processed = processed.clone();

            let task = tokio::spawn(async move {
                let result = match semaphore.acquire().await {
                    Ok(_permit) => {
                        store
                            .insert_edge(
                                resolved.from,
                                resolved.to,
                                resolved.edge.kind,
                                &Attributes::new(),
                            )
                            .await
                    }
                    Err(e) => Err(StoreError::write(format!("Insert limiter closed: {}", e))),
                };

                let current = processed.fetch_add(1, Ordering::Relaxed) + 1;
                if current % report_interval == 0 || current == total {
                    info!("  Progress: {}/{} edges", current, total);
                }

                (resolved.edge, result)
            });

            tasks.push(task);
        }

        let mut inserted = 0;
        let mut first_failure = None;
        let mut failed = 0;

        for joined in join_all(tasks).await {
            let (edge, result) = joined.map_err(|e| SeedError::task(e.to_string()))?;
            match result {
                Ok(_) => inserted += 1,
                Err(e) => {
                    warn!(
                        kind = %edge.kind,
                        from = %edge.from_logical_id,
                        to = %edge.to_logical_id,
                        error = %e,
                        "Failed to create edge"
                    );
                    failed += 1;
                    if first_failure.is_none() {
                        first_failure = Some(SeedError::edge_write(&edge, e));
                    }
                }
            }
        }

        match first_failure {
            Some(err) => {
                warn!("{} of {} edge inserts failed", failed, total);
                Err(err)
            }
            None => Ok(inserted),
        }
    }
}
