// Neo4j implementation of the graph store
use async_trait::async_trait;
use neo4rs::{Graph, Query};
use school_seed_shared::{Attributes, EdgeKind, EntityKind};
use std::collections::HashMap;
use tracing::debug;

use crate::errors::StoreError;
use crate::interfaces::GraphStore;
use crate::types::{QueryOutcome, StoreId};

/// Writes nodes and relationships to Neo4j over Bolt.
///
/// Node labels come from `EntityKind` and relationship types from `EdgeKind`;
/// both are closed sets, so they are formatted into the query text while all
/// values travel as parameters. Store ids are Neo4j's internal `id()`.
#[derive(Clone)]
pub struct Neo4jGraphStore {
    graph: Graph,
}

impl Neo4jGraphStore {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// Connect to Neo4j and wrap the connection in a store.
    pub fn connect(uri: &str, user: &str, password: &str) -> Result<Self, StoreError> {
        super::connect(uri, user, password).map(Self::new)
    }

    /// Run a query that returns a single `id` column and decode it.
    async fn execute_returning_id(&self, query: Query, what: &str) -> Result<StoreId, StoreError> {
        let mut result = self.graph.execute(query).await?;
        let row = result
            .next()
            .await?
            .ok_or_else(|| StoreError::write(format!("{} was not created", what)))?;

        row.get::<i64>("id")
            .map(StoreId)
            .map_err(|e| StoreError::decode(format!("Failed to read id of {}: {}", what, e)))
    }
}

fn properties(attributes: &Attributes) -> HashMap<&str, String> {
    attributes
        .iter()
        .map(|(key, value)| (key.as_str(), value.clone()))
        .collect()
}

#[async_trait]
impl GraphStore for Neo4jGraphStore {
    async fn insert_entity(
        &self,
        attributes: &Attributes,
        kind: EntityKind,
    ) -> Result<StoreId, StoreError> {
        let query_str = format!(
            "CREATE (n:{}) SET n = $props RETURN id(n) AS id",
            kind.label()
        );
        let query = Query::new(query_str).param("props", properties(attributes));

        let id = self
            .execute_returning_id(query, &format!("{} node", kind))
            .await?;
        debug!(kind = %kind, store_id = %id, "Created node");
        Ok(id)
    }

    async fn insert_edge(
        &self,
        from: StoreId,
        to: StoreId,
        kind: EdgeKind,
        attributes: &Attributes,
    ) -> Result<StoreId, StoreError> {
        let query_str = format!(
            "MATCH (from) WHERE id(from) = $from_id \
             MATCH (to) WHERE id(to) = $to_id \
             CREATE (from)-[r:{}]->(to) \
             SET r = $props \
             RETURN id(r) AS id",
            kind.label()
        );
        let query = Query::new(query_str)
            .param("from_id", from.value())
            .param("to_id", to.value())
            .param("props", properties(attributes));

        let id = self
            .execute_returning_id(query, &format!("{} relationship {} -> {}", kind, from, to))
            .await?;
        debug!(kind = %kind, store_id = %id, "Created relationship");
        Ok(id)
    }

    async fn query(&self, raw: &str) -> Result<QueryOutcome, StoreError> {
        let mut result = self.graph.execute(Query::new(raw.to_string())).await?;

        let mut rows = 0;
        while result.next().await?.is_some() {
            rows += 1;
        }

        Ok(QueryOutcome { rows })
    }
}
