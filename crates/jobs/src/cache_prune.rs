use ssllabs_exporter_application::ports::CacheMaintenancePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_PRUNE_DELAY: Duration = Duration::from_secs(60);

/// Periodically removes expired probe results from the cache.
pub struct CachePruneJob {
    maintenance: Arc<dyn CacheMaintenancePort>,
    prune_delay: Duration,
    shutdown: CancellationToken,
}

impl CachePruneJob {
    pub fn new(maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            maintenance,
            prune_delay: DEFAULT_PRUNE_DELAY,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_prune_delay(mut self, prune_delay: Duration) -> Self {
        self.prune_delay = prune_delay;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            prune_delay_secs = self.prune_delay.as_secs(),
            "Starting cache prune job"
        );

        let mut interval = tokio::time::interval(self.prune_delay);
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CachePruneJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.maintenance.run_prune_cycle().await {
                        Ok(outcome) => {
                            if outcome.entries_removed > 0 {
                                info!(
                                    entries_removed = outcome.entries_removed,
                                    cache_size = outcome.cache_size,
                                    "Cache prune cycle completed"
                                );
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Cache prune cycle failed");
                        }
                    }
                }
            }
        }
    }
}
