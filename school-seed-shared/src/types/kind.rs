//! Closed sets of entity, edge and role kinds.
//!
//! Each edge kind carries a fixed pair of endpoint entity kinds, which is what the
//! logical graph checks at construction time and what the materializer uses to
//! look up store ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind (label) of an entity in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    School,
    User,
    Group,
}

impl EntityKind {
    /// Every entity kind, in insertion order.
    pub const ALL: [EntityKind; 3] = [EntityKind::School, EntityKind::User, EntityKind::Group];

    /// Label used for nodes of this kind in the store.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::School => "School",
            EntityKind::User => "User",
            EntityKind::Group => "Group",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind (relationship type) of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    /// User is a member of a group.
    Member,
    /// User studies at a school.
    Student,
    /// User teaches at a school.
    Teacher,
}

impl EdgeKind {
    /// Relationship type used for edges of this kind in the store.
    pub fn label(&self) -> &'static str {
        match self {
            EdgeKind::Member => "MEMBER",
            EdgeKind::Student => "STUDENT",
            EdgeKind::Teacher => "TEACHER",
        }
    }

    /// Entity kinds required at the `(from, to)` ends of this edge.
    pub fn endpoints(&self) -> (EntityKind, EntityKind) {
        match self {
            EdgeKind::Member => (EntityKind::User, EntityKind::Group),
            EdgeKind::Student | EdgeKind::Teacher => (EntityKind::User, EntityKind::School),
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of a user within its school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    /// Kind of the school-affiliation edge emitted for a user with this role.
    pub fn affiliation(&self) -> EdgeKind {
        match self {
            Role::Student => EdgeKind::Student,
            Role::Teacher => EdgeKind::Teacher,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
