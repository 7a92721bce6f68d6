//! Graph generators.
//!
//! A generator produces the logical graph for one run, either from a fixed
//! dataset or synthesized at random. Both go through the same dataset to graph
//! conversion, so both guarantee that no edge references a missing entity.

pub mod fixture;
pub mod random;

pub use fixture::{load_fixture, parse_fixture, FixtureSource};
pub use random::{generate_random, RandomParams, RandomShape};

use school_seed_shared::LogicalGraph;

use crate::errors::SeedError;

/// How the logical graph for a run is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationMode {
    Fixed(FixtureSource),
    Randomized(RandomParams),
}

impl Default for GenerationMode {
    fn default() -> Self {
        Self::Fixed(FixtureSource::Bundled)
    }
}

/// Produce a logical graph for `mode`.
pub async fn generate(mode: &GenerationMode) -> Result<LogicalGraph, SeedError> {
    match mode {
        GenerationMode::Fixed(source) => load_fixture(source).await,
        GenerationMode::Randomized(params) => {
            let mut rng = rand::thread_rng();
            generate_random(params, &mut rng)
        }
    }
}
