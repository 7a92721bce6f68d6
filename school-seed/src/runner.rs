// Seed runner - orchestrates one seeding run
use school_seed_repository::GraphStore;
use school_seed_shared::EntityKind;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::errors::SeedError;
use crate::generator::{self, GenerationMode};
use crate::indexer;
use crate::materializer::{MaterializationResult, Materializer, MaterializerConfig};
use crate::wipe;

/// What a run should do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Delete all existing data before writing.
    pub wipe: bool,
    pub mode: GenerationMode,
    /// Create logical id indexes after writing.
    pub create_indexes: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub materialization: MaterializationResult,
    pub entity_counts: BTreeMap<EntityKind, usize>,
    /// Indexes created, when index creation was requested.
    pub indexes_created: Option<usize>,
    pub elapsed: Duration,
}

/// Runner that coordinates generation, wiping and materialization
pub struct SeedRunner {
    store: Arc<dyn GraphStore>,
    materializer: Materializer,
}

impl SeedRunner {
    pub fn new(store: Arc<dyn GraphStore>, config: MaterializerConfig) -> Self {
        let materializer = Materializer::new(store.clone(), config);
        Self {
            store,
            materializer,
        }
    }

    /// Execute one run.
    ///
    /// A requested wipe completes before generation starts; if it fails the
    /// run stops without generating or writing anything.
    pub async fn execute(&self, options: &RunOptions) -> Result<RunSummary, SeedError> {
        let start_time = Instant::now();

        // Step 1: Optionally clear the store
        if options.wipe {
            info!("=== Wiping store ===");
            wipe::wipe_all(self.store.as_ref()).await?;
        }

        // Step 2: Build the logical graph
        info!("=== Generating data ===");
        let graph = generator::generate(&options.mode).await?;
        let entity_counts = graph.entity_counts();

        // Step 3: Write entities, then edges
        info!("=== Writing data ===");
        let materialization = self.materializer.materialize(&graph).await?;

        // Step 4: Indexes
        let indexes_created = if options.create_indexes {
            info!("=== Creating indexes ===");
            let created = indexer::create_indexes(self.store.as_ref()).await;
            indexer::verify_indexes(self.store.as_ref()).await;
            Some(created)
        } else {
            None
        };

        let elapsed = start_time.elapsed();

        info!("=== Seeding complete ===");
        info!("Total time: {:.2}s", elapsed.as_secs_f64());
        for (kind, count) in &entity_counts {
            info!("{}: {}", kind, count);
        }
        info!("Edges: {}", materialization.inserted_edges);

        Ok(RunSummary {
            materialization,
            entity_counts,
            indexes_created,
            elapsed,
        })
    }
}
