//! SSLLabs API v3 client.
//!
//! Only the two endpoints the exporter relies on are wrapped:
//!
//! ```text
//! GET {api}analyze?host=<target>&all=done[&startNew=on]
//! GET {api}info
//! ```
//!
//! `analyze` never fails: transport faults and unparseable bodies become
//! `HTTP_ERROR`, any non-200 response becomes `SERVER_ERROR`, and the driver
//! decides how to back off.

use async_trait::async_trait;
use reqwest::StatusCode;
use ssllabs_exporter_application::ports::AssessmentApi;
use ssllabs_exporter_domain::{ApiInfo, AssessmentResult, AssessmentStatus, DomainError, Target};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct SslLabsClient {
    client: reqwest::Client,
    api_url: String,
}

impl SslLabsClient {
    /// `request_timeout` bounds every single HTTP call, independently of the
    /// probe deadline.
    pub fn new(api_url: &str, request_timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(request_timeout)
            .user_agent(concat!("ssllabs-exporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::ConfigError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, api_url))
    }

    pub fn with_client(client: reqwest::Client, api_url: &str) -> Self {
        let mut api_url = api_url.to_string();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}{}", self.api_url, name)
    }
}

#[async_trait]
impl AssessmentApi for SslLabsClient {
    async fn analyze(&self, target: &Target, start_new: bool) -> AssessmentResult {
        let mut query = vec![("host", target.as_str()), ("all", "done")];
        if start_new {
            query.push(("startNew", "on"));
        }

        let response = match self
            .client
            .get(self.endpoint("analyze"))
            .query(&query)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(host = %target, error = %e, "analyze request failed");
                return AssessmentResult::with_status(AssessmentStatus::HttpError);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(host = %target, http_status = status.as_u16(), "SSLLabs API returned an error");
            return AssessmentResult::with_status(AssessmentStatus::ServerError);
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                debug!(host = %target, error = %e, "failed to read analyze response");
                return AssessmentResult::with_status(AssessmentStatus::HttpError);
            }
        };

        match serde_json::from_slice::<AssessmentResult>(&body) {
            Ok(result) => result,
            Err(e) => {
                debug!(host = %target, error = %e, "failed to parse analyze response");
                AssessmentResult::with_status(AssessmentStatus::HttpError)
            }
        }
    }

    async fn info(&self) -> Result<ApiInfo, DomainError> {
        let response = self
            .client
            .get(self.endpoint("info"))
            .send()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(format!("info request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamUnavailable(format!(
                "info request returned HTTP {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(format!("failed to read info: {e}")))?;

        serde_json::from_slice(&body)
            .map_err(|e| DomainError::UpstreamUnavailable(format!("failed to parse info: {e}")))
    }
}
