//! Core data structures of the school seeder: entity and edge kinds, logical
//! graphs, and the serialized dataset they are built from.

pub mod dataset;
pub mod entity;
pub mod graph;
pub mod kind;

pub use dataset::{Dataset, GroupRecord, SchoolRecord, UserRecord};
pub use entity::{Attributes, Edge, Entity, LOGICAL_ID_ATTRIBUTE};
pub use graph::LogicalGraph;
pub use kind::{EdgeKind, EntityKind, Role};
