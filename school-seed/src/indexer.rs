// Index creation on the logical id attribute of every entity label
use school_seed_repository::GraphStore;
use school_seed_shared::{EntityKind, LOGICAL_ID_ATTRIBUTE};
use tracing::{info, warn};

/// Statement creating the logical id index for `kind`.
pub fn index_statement(kind: EntityKind) -> String {
    format!(
        "CREATE INDEX {}_{} IF NOT EXISTS FOR (n:{}) ON (n.{})",
        kind.label().to_lowercase(),
        LOGICAL_ID_ATTRIBUTE,
        kind.label(),
        LOGICAL_ID_ATTRIBUTE
    )
}

/// Create an index on the logical id of every entity label.
///
/// Failures are logged and skipped. Returns how many indexes were created.
pub async fn create_indexes(store: &dyn GraphStore) -> usize {
    let mut created = 0;

    for kind in EntityKind::ALL {
        info!("Creating index on {}.{}...", kind, LOGICAL_ID_ATTRIBUTE);
        match store.query(&index_statement(kind)).await {
            Ok(_) => {
                info!("✓ Created index on {}.{}", kind, LOGICAL_ID_ATTRIBUTE);
                created += 1;
            }
            Err(e) => warn!(
                "Failed to create index on {}.{}: {}",
                kind, LOGICAL_ID_ATTRIBUTE, e
            ),
        }
    }

    created
}

/// Count the indexes present in the store.
pub async fn verify_indexes(store: &dyn GraphStore) -> Option<usize> {
    info!("Verifying indexes...");
    match store.query("SHOW INDEXES").await {
        Ok(outcome) => {
            info!("✓ Total indexes in database: {}", outcome.rows);
            Some(outcome.rows)
        }
        Err(e) => {
            warn!("Could not verify indexes: {}", e);
            None
        }
    }
}
