use std::ops::Range;
use std::time::Duration;

/// Randomised wait bands used while driving an assessment.
///
/// Server errors are mostly rate limiting, so they back off much longer than
/// transport errors.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    pub poll_interval: Range<Duration>,
    pub http_error: Range<Duration>,
    pub server_error: Range<Duration>,
}

impl BackoffPolicy {
    pub fn poll_delay(&self) -> Duration {
        jitter(&self.poll_interval)
    }

    pub fn http_error_delay(&self) -> Duration {
        jitter(&self.http_error)
    }

    pub fn server_error_delay(&self) -> Duration {
        jitter(&self.server_error)
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10)..Duration::from_secs(20),
            http_error: Duration::ZERO..Duration::from_secs(10),
            server_error: Duration::from_secs(30)..Duration::from_secs(60),
        }
    }
}

/// Uniformly distributed duration in `band`, millisecond resolution.
fn jitter(band: &Range<Duration>) -> Duration {
    let low = band.start.as_millis() as u64;
    let high = band.end.as_millis() as u64;
    if high <= low {
        return band.start;
    }
    Duration::from_millis(fastrand::u64(low..high))
}
