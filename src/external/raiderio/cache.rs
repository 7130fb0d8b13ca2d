//! In-memory realm listing cache.

use dashmap::DashMap;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::external::raiderio::model::RealmEntry;

/// Per-region cache of flattened realm listings with a time-to-live.
///
/// Backed by a `DashMap` so concurrent interactions can read and populate it
/// without a global lock. No lock is held while the upstream request runs, so two
/// concurrent misses for the same region may both fetch; the later insert wins.
/// Clones share the same underlying map.
#[derive(Clone)]
pub struct RealmCache {
    entries: Arc<DashMap<String, CachedRealms>>,
    ttl: Duration,
}

struct CachedRealms {
    realms: Arc<Vec<RealmEntry>>,
    inserted_at: Instant,
}

impl RealmCache {
    /// Creates an empty cache. A zero `ttl` disables caching entirely.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Returns the cached listing for `region` if present and younger than the TTL.
    ///
    /// An expired entry is evicted on the way out.
    pub fn get(&self, region: &str) -> Option<Arc<Vec<RealmEntry>>> {
        if !self.is_enabled() {
            return None;
        }

        {
            let entry = self.entries.get(region)?;
            if entry.inserted_at.elapsed() < self.ttl {
                return Some(Arc::clone(&entry.realms));
            }
        }

        // Shard guard must be released before removing. Re-check the age so a fresh
        // entry written by a concurrent fetch in between is kept.
        self.entries
            .remove_if(region, |_, cached| cached.inserted_at.elapsed() >= self.ttl);
        None
    }

    /// Stores the listing for `region` and returns it as a shared handle.
    pub fn insert(&self, region: &str, realms: Vec<RealmEntry>) -> Arc<Vec<RealmEntry>> {
        let realms = Arc::new(realms);

        if self.is_enabled() {
            self.entries.insert(
                region.to_string(),
                CachedRealms {
                    realms: Arc::clone(&realms),
                    inserted_at: Instant::now(),
                },
            );
        }

        realms
    }

    /// Number of regions currently held, expired entries included.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
