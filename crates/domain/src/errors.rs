use crate::assessment::AssessmentStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Target parameter is missing")]
    InvalidTarget,

    #[error("context deadline exceeded")]
    DeadlineExceeded,

    #[error("context canceled")]
    Aborted,

    #[error("the remote server couldn't process the request")]
    AssessmentFailed,

    #[error("unrecognized status: {0}")]
    UnrecognizedStatus(String),

    #[error("SSLLabs API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Metrics error: {0}")]
    MetricsError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Status the driver reports alongside this failure.
    pub fn status(&self) -> Option<AssessmentStatus> {
        match self {
            DomainError::DeadlineExceeded => Some(AssessmentStatus::DeadlineExceeded),
            DomainError::Aborted => Some(AssessmentStatus::Aborted),
            DomainError::AssessmentFailed => Some(AssessmentStatus::Error),
            _ => None,
        }
    }
}
