//! The logical graph handed from a generator to the materializer.

use std::collections::{BTreeMap, HashMap};

use super::{Edge, EntityKind, Entity};
use crate::errors::GraphError;

/// Entities plus the edges linking them by logical id.
///
/// A graph built with [`LogicalGraph::new`] guarantees that every edge endpoint
/// names an entity of the kind the edge requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalGraph {
    entities: Vec<Entity>,
    edges: Vec<Edge>,
}

impl LogicalGraph {
    /// Build a graph, validating logical ids and edge endpoints.
    ///
    /// # Errors
    ///
    /// * `GraphError::DuplicateLogicalId` - two entities share a logical id
    /// * `GraphError::UnknownEntity` - an edge endpoint names no entity
    /// * `GraphError::EndpointKindMismatch` - an edge endpoint has the wrong kind
    pub fn new(entities: Vec<Entity>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut kinds: HashMap<&str, EntityKind> = HashMap::with_capacity(entities.len());
        for entity in &entities {
            if kinds.insert(&entity.logical_id, entity.kind).is_some() {
                return Err(GraphError::duplicate(entity.kind, &entity.logical_id));
            }
        }

        for edge in &edges {
            let (from_kind, to_kind) = edge.kind.endpoints();
            check_endpoint(&kinds, edge, &edge.from_logical_id, from_kind)?;
            check_endpoint(&kinds, edge, &edge.to_logical_id, to_kind)?;
        }

        Ok(Self { entities, edges })
    }

    /// Build a graph without validating edge endpoints.
    ///
    /// Dangling references are left for the materializer to reject while
    /// resolving edges.
    pub fn unchecked(entities: Vec<Entity>, edges: Vec<Edge>) -> Self {
        Self { entities, edges }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.edges.is_empty()
    }

    /// Number of entities of each kind.
    pub fn entity_counts(&self) -> BTreeMap<EntityKind, usize> {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(entity.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Logical ids of every entity of `kind`, in insertion order.
    pub fn logical_ids(&self, kind: EntityKind) -> impl Iterator<Item = &str> {
        self.entities
            .iter()
            .filter(move |e| e.kind == kind)
            .map(|e| e.logical_id.as_str())
    }
}

fn check_endpoint(
    kinds: &HashMap<&str, EntityKind>,
    edge: &Edge,
    logical_id: &str,
    expected: EntityKind,
) -> Result<(), GraphError> {
    match kinds.get(logical_id) {
        None => Err(GraphError::unknown_entity(edge.kind, logical_id)),
        Some(&actual) if actual != expected => Err(GraphError::EndpointKindMismatch {
            edge_kind: edge.kind,
            logical_id: logical_id.to_string(),
            expected,
            actual,
        }),
        Some(_) => Ok(()),
    }
}
