use async_trait::async_trait;
use lru::LruCache;
use ssllabs_exporter_application::ports::{CacheMaintenancePort, CachePruneOutcome, ProbeCache};
use ssllabs_exporter_application::services::ProbeSnapshot;
use ssllabs_exporter_domain::{DomainError, Target};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry {
    expires_at: Instant,
    snapshot: Arc<ProbeSnapshot>,
}

/// Snapshots keyed by target, expiring `retention` after their last insert.
///
/// Every entry shares the same retention, so insertion order is expiry order
/// and pruning can stop at the first live entry. Lookups do not check expiry;
/// an expired entry is served until the next prune.
pub struct ProbeResultCache {
    entries: Mutex<LruCache<Arc<str>, CacheEntry>>,
    retention: Duration,
}

impl ProbeResultCache {
    pub fn new(retention: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::unbounded()),
            retention,
        }
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove every entry whose expiry has passed. Returns how many were removed.
    pub fn prune(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.lock();
        let mut removed = 0;

        loop {
            let expired = matches!(entries.peek_lru(), Some((_, entry)) if entry.expires_at <= now);
            if !expired {
                break;
            }
            entries.pop_lru();
            removed += 1;
        }

        removed
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<Arc<str>, CacheEntry>> {
        // Poisoning is ignored: every critical section is a single map call.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ProbeCache for ProbeResultCache {
    fn get(&self, target: &Target) -> Option<Arc<ProbeSnapshot>> {
        self.lock()
            .peek(target.as_str())
            .map(|entry| Arc::clone(&entry.snapshot))
    }

    fn put(&self, target: &Target, snapshot: Arc<ProbeSnapshot>) {
        let entry = CacheEntry {
            expires_at: Instant::now() + self.retention,
            snapshot,
        };

        // An existing key is overwritten and moved to the newest position.
        self.lock().put(Arc::clone(target.as_arc()), entry);
    }
}

#[async_trait]
impl CacheMaintenancePort for ProbeResultCache {
    async fn run_prune_cycle(&self) -> Result<CachePruneOutcome, DomainError> {
        let entries_removed = self.prune();
        let cache_size = self.len();

        debug!(entries_removed, cache_size, "probe cache pruned");

        Ok(CachePruneOutcome {
            entries_removed,
            cache_size,
        })
    }
}
