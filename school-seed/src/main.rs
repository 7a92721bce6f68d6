//! School Seed Main Entry Point
//!
//! Seeds a graph database with a school dataset, either the bundled fixture or
//! randomly generated data.

use anyhow::Result;
use clap::Parser;
use school_seed::config::{get_concurrency_limit, get_neo4j_settings};
use school_seed::{
    FixtureSource, GenerationMode, MaterializerConfig, RandomParams, RunOptions, SeedRunner,
};
use school_seed_repository::{GraphStore, InMemoryGraphStore, Neo4jGraphStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "school-seed")]
#[command(version, about = "Seed a graph database with a school, its users and groups")]
struct Cli {
    /// Delete all data before inserting test data
    #[arg(short, long)]
    delete: bool,

    /// Use randomly generated data
    #[arg(short, long, conflicts_with = "fixture")]
    randomize: bool,

    /// Create indexes on the logical id of every label after inserting
    #[arg(short, long)]
    index: bool,

    /// Load the fixed dataset from this JSON file instead of the bundled one
    #[arg(long, value_name = "PATH")]
    fixture: Option<PathBuf>,

    /// Write into an in-memory store instead of Neo4j
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        let mode = if self.randomize {
            GenerationMode::Randomized(RandomParams::default())
        } else {
            match &self.fixture {
                Some(path) => GenerationMode::Fixed(FixtureSource::File(path.clone())),
                None => GenerationMode::Fixed(FixtureSource::Bundled),
            }
        };

        RunOptions {
            wipe: self.delete,
            mode,
            create_indexes: self.index,
        }
    }
}

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("school_seed=info,school_seed_repository=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .init();
}

fn build_store(dry_run: bool) -> Result<Arc<dyn GraphStore>> {
    if dry_run {
        info!("Dry run: writing into an in-memory store");
        return Ok(Arc::new(InMemoryGraphStore::new()));
    }

    let settings = get_neo4j_settings()?;
    let store = Neo4jGraphStore::connect(&settings.uri, &settings.user, &settings.password)?;
    info!("✓ Connected to Neo4j");
    Ok(Arc::new(store))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    init_tracing();

    info!("-----------------------------");
    info!("Running school graph seed");
    info!("-----------------------------");

    let store = build_store(cli.dry_run)?;
    let config = MaterializerConfig::with_concurrency_limit(get_concurrency_limit());
    let runner = SeedRunner::new(store, config);

    match runner.execute(&cli.run_options()).await {
        Ok(summary) => {
            info!(
                entities = summary.materialization.inserted_entities,
                edges = summary.materialization.inserted_edges,
                "Seeding finished successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Seeding failed");
            Err(e.into())
        }
    }
}
