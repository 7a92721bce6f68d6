// Neo4j connection setup
use neo4rs::Graph;
use tracing::info;

use crate::errors::StoreError;

/// Connect to Neo4j and return a Graph instance
pub fn connect(uri: &str, user: &str, password: &str) -> Result<Graph, StoreError> {
    info!(neo4j_uri = %uri, "Connecting to Neo4j");

    Graph::new(uri, user, password)
        .map_err(|e| StoreError::connection(format!("Failed to connect to Neo4j: {}", e)))
}
