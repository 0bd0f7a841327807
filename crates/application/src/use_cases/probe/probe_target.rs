use crate::context::ProbeContext;
use crate::ports::ProbeCache;
use crate::services::{ProbeMetrics, ProbeSnapshot};
use crate::use_cases::assessment::AnalyzeTargetUseCase;
use chrono::Utc;
use ssllabs_exporter_domain::{endpoints_lowest_grade, DomainError, Target};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub snapshot: Arc<ProbeSnapshot>,
    pub cache_hit: bool,
}

/// Serves a probe from the result cache, or runs a fresh assessment and
/// caches its snapshot.
///
/// Concurrent misses for the same target each run their own assessment.
pub struct ProbeTargetUseCase {
    analyze: Arc<AnalyzeTargetUseCase>,
    cache: Arc<dyn ProbeCache>,
    ignore_failed: bool,
}

impl ProbeTargetUseCase {
    pub fn new(analyze: Arc<AnalyzeTargetUseCase>, cache: Arc<dyn ProbeCache>) -> Self {
        Self {
            analyze,
            cache,
            ignore_failed: false,
        }
    }

    /// Do not cache failed probes.
    pub fn with_ignore_failed(mut self, ignore_failed: bool) -> Self {
        self.ignore_failed = ignore_failed;
        self
    }

    /// `timeout` bounds the assessment on a cache miss; `cancel` aborts it.
    #[instrument(skip(self, target, cancel), fields(target = %target))]
    pub async fn execute(
        &self,
        target: &Target,
        timeout: Duration,
        cancel: CancellationToken,
    ) -> Result<ProbeOutcome, DomainError> {
        if let Some(snapshot) = self.cache.get(target) {
            debug!("serving results from cache");
            return Ok(ProbeOutcome {
                snapshot,
                cache_hit: true,
            });
        }

        let ctx = ProbeContext::with_timeout(timeout, cancel);
        let snapshot = Arc::new(self.assess(target, &ctx).await?);

        if self.ignore_failed && snapshot.failed() {
            debug!("failed probe not cached");
        } else {
            self.cache.put(target, Arc::clone(&snapshot));
        }

        Ok(ProbeOutcome {
            snapshot,
            cache_hit: false,
        })
    }

    /// Run the assessment and turn its outcome into a metrics snapshot.
    pub async fn assess(
        &self,
        target: &Target,
        ctx: &ProbeContext,
    ) -> Result<ProbeSnapshot, DomainError> {
        let metrics = ProbeMetrics::new()?;
        metrics.record_start(Utc::now().timestamp());

        let start = Instant::now();
        let outcome = self.analyze.execute(target, ctx).await;
        let elapsed = start.elapsed();
        metrics.record_duration(elapsed);

        match outcome {
            Ok(result) => {
                let grade = endpoints_lowest_grade(&result.endpoints);
                info!(
                    grade = %grade,
                    endpoints = result.endpoints.len(),
                    duration_secs = elapsed.as_secs_f64(),
                    "assessment succeeded"
                );
                metrics.record_success(grade);
            }
            Err(failure) => {
                error!(
                    error = %failure.error,
                    status = %failure.result.status,
                    duration_secs = elapsed.as_secs_f64(),
                    "assessment failed"
                );
                metrics.record_failure();
            }
        }

        Ok(metrics.into_snapshot())
    }
}
