use async_trait::async_trait;
use ssllabs_exporter_domain::DomainError;

/// Outcome of a cache prune cycle.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CachePruneOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for periodic result cache maintenance.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    /// Remove every expired entry.
    async fn run_prune_cycle(&self) -> Result<CachePruneOutcome, DomainError>;
}
