//! # School Seed Shared
//!
//! Data structures shared across the school seeder: the logical graph produced
//! by generators and consumed by the materializer, and the dataset format used
//! by fixtures.

pub mod errors;
pub mod types;

pub use errors::GraphError;
pub use types::{
    Attributes, Dataset, Edge, EdgeKind, Entity, EntityKind, GroupRecord, LogicalGraph, Role,
    SchoolRecord, UserRecord, LOGICAL_ID_ATTRIBUTE,
};
