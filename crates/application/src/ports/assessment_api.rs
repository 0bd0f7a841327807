use async_trait::async_trait;
use ssllabs_exporter_domain::{ApiInfo, AssessmentResult, DomainError, Target};

/// Port for the remote TLS assessment service.
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    /// Issue a single `/analyze` request.
    ///
    /// With `start_new == false` the service returns what it knows about the
    /// target and starts an assessment only if it has none. With
    /// `start_new == true` a fresh assessment is forced.
    ///
    /// Transport failures and unparseable bodies are reported as
    /// `HttpError`, non-200 responses as `ServerError`; this never fails.
    async fn analyze(&self, target: &Target, start_new: bool) -> AssessmentResult;

    /// Engine and criteria versions of the service.
    async fn info(&self) -> Result<ApiInfo, DomainError>;
}
