//! Serialized school dataset and its conversion into a logical graph.
//!
//! A dataset groups records by kind, the way fixture files are written:
//!
//! ```json
//! {
//!   "School": [{ "id": "s1", "name": "Test School" }],
//!   "User": [{ "id": "u1", "username": "Teacher 0", "schoolId": "s1", "role": "teacher" }],
//!   "Group": [{ "id": "g1", "name": "Group 0", "users": ["u1"] }]
//! }
//! ```
//!
//! Users point at their school and groups list their members; converting the
//! dataset derives one edge per such reference.

use serde::{Deserialize, Serialize};

use super::{Edge, EdgeKind, Entity, EntityKind, LogicalGraph, Role};
use crate::errors::GraphError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub school_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: String,
    pub name: String,
    /// Logical ids of the member users.
    #[serde(default)]
    pub users: Vec<String>,
}

/// Records of one school dataset, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "School", default)]
    pub schools: Vec<SchoolRecord>,
    #[serde(rename = "User", default)]
    pub users: Vec<UserRecord>,
    #[serde(rename = "Group", default)]
    pub groups: Vec<GroupRecord>,
}

impl Dataset {
    /// Number of users holding `role`.
    pub fn count_role(&self, role: Role) -> usize {
        self.users.iter().filter(|u| u.role == role).count()
    }
}

impl TryFrom<Dataset> for LogicalGraph {
    type Error = GraphError;

    fn try_from(dataset: Dataset) -> Result<Self, Self::Error> {
        let mut entities =
            Vec::with_capacity(dataset.schools.len() + dataset.users.len() + dataset.groups.len());
        let mut edges = Vec::new();

        for school in dataset.schools {
            entities.push(Entity::new(EntityKind::School, school.id).with_attribute("name", school.name));
        }

        for user in dataset.users {
            edges.push(Edge::new(user.role.affiliation(), &user.id, user.school_id));
            entities.push(
                Entity::new(EntityKind::User, user.id)
                    .with_attribute("username", user.username)
                    .with_attribute("role", user.role.as_str()),
            );
        }

        for group in dataset.groups {
            for member in &group.users {
                edges.push(Edge::new(EdgeKind::Member, member, &group.id));
            }
            entities.push(Entity::new(EntityKind::Group, group.id).with_attribute("name", group.name));
        }

        LogicalGraph::new(entities, edges)
    }
}
