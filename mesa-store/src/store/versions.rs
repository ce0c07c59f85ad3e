//! Per-collection version counters
//!
//! 使用 DashMap 实现无锁并发的版本号管理。
//! Every mutating store operation bumps the version of each collection
//! it touched, so reactive consumers can compare a remembered version
//! against the current one instead of diffing whole collections.

use dashmap::DashMap;

/// Collection version manager
///
/// Versions start at 0 and increase monotonically; they carry no
/// meaning beyond "something changed since you last looked".
#[derive(Debug)]
pub struct CollectionVersions {
    versions: DashMap<String, u64>,
}

impl CollectionVersions {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// Bump the version of the given collection and return the new value
    pub fn increment(&self, collection: &str) -> u64 {
        let mut entry = self.versions.entry(collection.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current version of the given collection (0 if never mutated)
    pub fn get(&self, collection: &str) -> u64 {
        self.versions.get(collection).map(|v| *v).unwrap_or(0)
    }
}

impl Default for CollectionVersions {
    fn default() -> Self {
        Self::new()
    }
}
