use std::collections::HashMap;
use std::sync::Arc;

use super::types::DetailRecord;

/// Name-keyed memo of detail records.
///
/// Grows monotonically and never evicts. A stored record is never replaced,
/// so every lookup of a name after its first successful fetch returns the
/// same allocation. [`DetailFetcher`](super::DetailFetcher) drives the
/// get-or-fetch-and-store cycle across its spawned requests.
#[derive(Debug, Default)]
pub struct DetailCache {
    records: HashMap<String, Arc<DetailRecord>>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<DetailRecord>> {
        self.records.get(name).cloned()
    }

    /// Store `record` under `name` unless one is already present.
    /// Returns whichever record the cache holds afterwards.
    pub fn store(&mut self, name: impl Into<String>, record: DetailRecord) -> Arc<DetailRecord> {
        self.records
            .entry(name.into())
            .or_insert_with(|| Arc::new(record))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::test_support::{charmander, pikachu};

    #[test]
    fn test_store_never_replaces() {
        let mut cache = DetailCache::new();
        let first = cache.store("pikachu", pikachu());

        let mut impostor = pikachu();
        impostor.id = 9999;
        let second = cache.store("pikachu", impostor);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.id, 25);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_len_counts_distinct_names() {
        let mut cache = DetailCache::new();
        assert!(cache.is_empty());
        cache.store("pikachu", pikachu());
        cache.store("charmander", charmander());
        cache.store("pikachu", pikachu());
        assert_eq!(cache.len(), 2);
        assert!(cache.get("charmander").is_some());
        assert!(cache.get("bulbasaur").is_none());
    }
}
