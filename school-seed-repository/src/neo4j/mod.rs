//! Neo4j module - Bolt connection and the `GraphStore` implementation over it.

pub mod connection;
pub mod store;

pub use connection::connect;
pub use store::Neo4jGraphStore;
