//! Fixed datasets loaded from JSON fixtures.

use school_seed_shared::{Dataset, GraphError, LogicalGraph};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::BUNDLED_FIXTURE;
use crate::errors::SeedError;

/// Where a fixed dataset comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FixtureSource {
    /// The fixture compiled into the binary.
    #[default]
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
}

/// Parse a JSON dataset into a validated logical graph.
pub fn parse_fixture(json: &str) -> Result<LogicalGraph, SeedError> {
    let dataset: Dataset =
        serde_json::from_str(json).map_err(|e| GraphError::parse(e.to_string()))?;

    Ok(LogicalGraph::try_from(dataset)?)
}

async fn read_fixture(path: &Path) -> Result<String, SeedError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SeedError::FixtureUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Load the fixed dataset from `source`.
pub async fn load_fixture(source: &FixtureSource) -> Result<LogicalGraph, SeedError> {
    let graph = match source {
        FixtureSource::Bundled => {
            info!("Loading bundled fixture");
            parse_fixture(BUNDLED_FIXTURE)?
        }
        FixtureSource::File(path) => {
            info!(path = %path.display(), "Loading fixture file");
            parse_fixture(&read_fixture(path).await?)?
        }
    };

    info!(
        entities = graph.entities().len(),
        edges = graph.edges().len(),
        "Loaded fixed dataset"
    );
    Ok(graph)
}
