// Store wipe, run before materializing when requested
use school_seed_repository::GraphStore;
use tracing::info;

use crate::errors::SeedError;

/// Delete all existing data from the store.
///
/// A failure leaves the store in an unknown state, so callers must not write
/// into it afterwards.
pub async fn wipe_all(store: &dyn GraphStore) -> Result<(), SeedError> {
    info!("Clearing existing data...");
    store.wipe_all().await.map_err(SeedError::WipeFailure)?;
    info!("✓ Deleted all data");
    Ok(())
}
