use super::backoff::BackoffPolicy;
use crate::context::ProbeContext;
use crate::ports::AssessmentApi;
use chrono::Utc;
use ssllabs_exporter_domain::{AssessmentResult, AssessmentStatus, DomainError, Target};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// A driver failure together with the last result observed before it.
///
/// The result status is replaced by the synthesized status of the error
/// (`DEADLINE_EXCEEDED`, `ABORTED`, `ERROR`) when there is one.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error}")]
pub struct AssessmentFailure {
    pub error: DomainError,
    pub result: AssessmentResult,
}

impl AssessmentFailure {
    fn new(error: DomainError) -> Self {
        Self::with_result(error, AssessmentResult::default())
    }

    fn with_result(error: DomainError, mut result: AssessmentResult) -> Self {
        if let Some(status) = error.status() {
            result.status = status;
        }
        Self { error, result }
    }
}

/// Drives an SSLLabs assessment of one target until it is ready or the probe
/// context runs out.
pub struct AnalyzeTargetUseCase {
    api: Arc<dyn AssessmentApi>,
    backoff: BackoffPolicy,
}

impl AnalyzeTargetUseCase {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self {
            api,
            backoff: BackoffPolicy::default(),
        }
    }

    pub fn with_backoff(mut self, backoff: BackoffPolicy) -> Self {
        self.backoff = backoff;
        self
    }

    #[instrument(skip(self, target, ctx), fields(target = %target))]
    pub async fn execute(
        &self,
        target: &Target,
        ctx: &ProbeContext,
    ) -> Result<AssessmentResult, AssessmentFailure> {
        debug!("start processing");

        // A result the service already holds is reused when it is "fresh
        // enough": mostly useful after a previous probe for the same target
        // timed out before collecting its result.
        let cached = self.analyze(target, false, ctx).await.inspect_err(|e| {
            error!(error = %e.error, "failed to get cached result");
        })?;

        let timeout_secs = ctx.remaining().as_secs() as i64;
        let now = Utc::now().timestamp();
        if cached.is_ready() && cached.test_time_millis / 1000 + timeout_secs >= now {
            debug!("cached result will be used");
            return Ok(cached);
        }

        let mut result = if cached.status.is_running() {
            cached
        } else {
            debug!("triggering a new assessment");
            self.analyze(target, true, ctx).await.inspect_err(|e| {
                error!(error = %e.error, "failed to trigger a new assessment");
            })?
        };

        loop {
            if result.is_ready() {
                debug!("assessment finished successfully");
                return Ok(result);
            }

            if ctx.is_expired() {
                return Err(AssessmentFailure::with_result(
                    DomainError::DeadlineExceeded,
                    result,
                ));
            }

            if let Err(e) = ctx.sleep(self.backoff.poll_delay()).await {
                return Err(AssessmentFailure::with_result(e, result));
            }

            debug!("fetching assessment updates");
            result = self.analyze(target, false, ctx).await.inspect_err(|e| {
                error!(error = %e.error, "failed to fetch updates");
            })?;
        }
    }

    /// One observation of the assessment, retrying transport and server
    /// faults until progress is reported or the context runs out.
    async fn analyze(
        &self,
        target: &Target,
        start_new: bool,
        ctx: &ProbeContext,
    ) -> Result<AssessmentResult, AssessmentFailure> {
        while !ctx.is_expired() {
            if ctx.is_cancelled() {
                return Err(AssessmentFailure::new(DomainError::Aborted));
            }

            // Each iteration starts from a fresh result; nothing from a
            // failed attempt carries over.
            let result = ctx
                .run(self.api.analyze(target, start_new))
                .await
                .map_err(AssessmentFailure::new)?;

            let pause = match &result.status {
                AssessmentStatus::Dns | AssessmentStatus::InProgress | AssessmentStatus::Ready => {
                    return Ok(result);
                }
                AssessmentStatus::Error => {
                    return Err(AssessmentFailure::with_result(
                        DomainError::AssessmentFailed,
                        result,
                    ));
                }
                AssessmentStatus::HttpError => {
                    let pause = self.backoff.http_error_delay();
                    debug!(duration = ?pause, "sleeping due to HTTP error");
                    pause
                }
                AssessmentStatus::ServerError => {
                    let pause = self.backoff.server_error_delay();
                    debug!(duration = ?pause, "sleeping due to remote server error");
                    pause
                }
                AssessmentStatus::DeadlineExceeded
                | AssessmentStatus::Aborted
                | AssessmentStatus::Unrecognized(_) => {
                    let status = result.status.to_string();
                    return Err(AssessmentFailure::with_result(
                        DomainError::UnrecognizedStatus(status),
                        result,
                    ));
                }
            };

            ctx.sleep(pause).await.map_err(AssessmentFailure::new)?;
        }

        Err(AssessmentFailure::new(DomainError::DeadlineExceeded))
    }
}
