//! Entities and pending edges of a logical graph.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{EdgeKind, EntityKind};

/// Attribute set written alongside an entity or edge.
pub type Attributes = BTreeMap<String, String>;

/// Attribute under which an entity's logical id is written to the store.
pub const LOGICAL_ID_ATTRIBUTE: &str = "id";

/// An entity waiting to be written to the store.
///
/// `logical_id` links the entity to edges within one run. It is written as the
/// `id` attribute but is never used as the store's own identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub logical_id: String,
    pub kind: EntityKind,
    pub attributes: Attributes,
}

impl Entity {
    /// Create an entity, recording its logical id in the attribute set.
    pub fn new(kind: EntityKind, logical_id: impl Into<String>) -> Self {
        let logical_id = logical_id.into();
        let mut attributes = Attributes::new();
        attributes.insert(LOGICAL_ID_ATTRIBUTE.to_string(), logical_id.clone());

        Self {
            logical_id,
            kind,
            attributes,
        }
    }

    /// Add an attribute, replacing any previous value under the same key.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// A directed edge between two entities, referenced by logical id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub kind: EdgeKind,
    pub from_logical_id: String,
    pub to_logical_id: String,
}

impl Edge {
    pub fn new(kind: EdgeKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from_logical_id: from.into(),
            to_logical_id: to.into(),
        }
    }
}
