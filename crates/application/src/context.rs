use ssllabs_exporter_domain::DomainError;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Deadline and cancellation signal shared by every suspension point of a probe.
#[derive(Debug, Clone)]
pub struct ProbeContext {
    deadline: Instant,
    cancel: CancellationToken,
}

impl ProbeContext {
    pub fn new(deadline: Instant, cancel: CancellationToken) -> Self {
        Self { deadline, cancel }
    }

    pub fn with_timeout(timeout: Duration, cancel: CancellationToken) -> Self {
        Self::new(Instant::now() + timeout, cancel)
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Sleep for `duration`, waking early at the deadline.
    ///
    /// Returns `Aborted` if the context is cancelled while sleeping.
    pub async fn sleep(&self, duration: Duration) -> Result<(), DomainError> {
        let wake_at = (Instant::now() + duration).min(self.deadline);

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(DomainError::Aborted),
            _ = sleep_until(wake_at) => Ok(()),
        }
    }

    /// Drive `fut` until it completes, the deadline passes or the context is cancelled.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, DomainError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(DomainError::Aborted),
            _ = sleep_until(self.deadline) => Err(DomainError::DeadlineExceeded),
            output = fut => Ok(output),
        }
    }
}
