//! Logical id to store id mapping produced by the entity phase.

use school_seed_repository::StoreId;
use school_seed_shared::EntityKind;
use std::collections::HashMap;

/// Store ids captured while inserting entities, keyed by kind and logical id.
///
/// Built once by the entity phase and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMapping {
    by_kind: HashMap<EntityKind, HashMap<String, StoreId>>,
}

impl IdentifierMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the store id of an entity.
    ///
    /// Returns the id previously mapped under the same key, which is replaced.
    pub fn insert(
        &mut self,
        kind: EntityKind,
        logical_id: impl Into<String>,
        store_id: StoreId,
    ) -> Option<StoreId> {
        self.by_kind
            .entry(kind)
            .or_default()
            .insert(logical_id.into(), store_id)
    }

    pub fn resolve(&self, kind: EntityKind, logical_id: &str) -> Option<StoreId> {
        self.by_kind.get(&kind)?.get(logical_id).copied()
    }

    /// Number of mapped entities across all kinds.
    pub fn total(&self) -> usize {
        self.by_kind.values().map(HashMap::len).sum()
    }

    /// Number of mapped entities of `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.by_kind.get(&kind).map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_scoped_by_kind() {
        let mut mapping = IdentifierMapping::new();
        mapping.insert(EntityKind::User, "a", StoreId(1));
        mapping.insert(EntityKind::Group, "b", StoreId(2));

        assert_eq!(mapping.resolve(EntityKind::User, "a"), Some(StoreId(1)));
        assert_eq!(mapping.resolve(EntityKind::Group, "a"), None);
        assert_eq!(mapping.resolve(EntityKind::School, "a"), None);
        assert_eq!(mapping.total(), 2);
        assert_eq!(mapping.count(EntityKind::User), 1);
    }

    #[test]
    fn test_repeated_insert_replaces_and_returns_previous() {
        let mut mapping = IdentifierMapping::new();
        assert_eq!(mapping.insert(EntityKind::School, "s", StoreId(1)), None);
        assert_eq!(
            mapping.insert(EntityKind::School, "s", StoreId(9)),
            Some(StoreId(1))
        );

        assert_eq!(mapping.resolve(EntityKind::School, "s"), Some(StoreId(9)));
        assert_eq!(mapping.total(), 1);
    }
}
