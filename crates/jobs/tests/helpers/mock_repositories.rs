#![allow(dead_code)]

use async_trait::async_trait;
use ssllabs_exporter_application::ports::{CacheMaintenancePort, CachePruneOutcome};
use ssllabs_exporter_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockCacheMaintenancePort {
    prune_call_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
    outcome: Arc<Mutex<CachePruneOutcome>>,
}

impl MockCacheMaintenancePort {
    pub fn new() -> Self {
        Self {
            prune_call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
            outcome: Arc::new(Mutex::new(CachePruneOutcome::default())),
        }
    }

    pub fn with_outcome(self, outcome: CachePruneOutcome) -> Self {
        *self.outcome.lock().unwrap() = outcome;
        self
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn prune_call_count(&self) -> u64 {
        self.prune_call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCacheMaintenancePort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheMaintenancePort for MockCacheMaintenancePort {
    async fn run_prune_cycle(&self) -> Result<CachePruneOutcome, DomainError> {
        self.prune_call_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::MetricsError("mock prune failure".to_string()));
        }

        Ok(self.outcome.lock().unwrap().clone())
    }
}
