//! Interface definitions for the graph store.
//!
//! This module defines the abstract `GraphStore` trait that allows for
//! dependency injection and swappable store implementations.

mod graph_store;

pub use graph_store::{GraphStore, WIPE_ALL_QUERY};
