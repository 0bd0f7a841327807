use serde::Deserialize;
use std::fmt;

/// Progress of an SSLLabs assessment.
///
/// `Dns`, `InProgress`, `Ready` and `Error` come straight from the API wire
/// format. `HttpError` and `ServerError` are produced by the API client when a
/// request fails, `DeadlineExceeded` and `Aborted` by the assessment driver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum AssessmentStatus {
    Dns,
    InProgress,
    Ready,
    Error,
    HttpError,
    ServerError,
    DeadlineExceeded,
    Aborted,
    /// Any value the API returned that we do not know about, kept verbatim.
    Unrecognized(String),
}

impl AssessmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AssessmentStatus::Dns => "DNS",
            AssessmentStatus::InProgress => "IN_PROGRESS",
            AssessmentStatus::Ready => "READY",
            AssessmentStatus::Error => "ERROR",
            AssessmentStatus::HttpError => "HTTP_ERROR",
            AssessmentStatus::ServerError => "SERVER_ERROR",
            AssessmentStatus::DeadlineExceeded => "DEADLINE_EXCEEDED",
            AssessmentStatus::Aborted => "ABORTED",
            AssessmentStatus::Unrecognized(s) => s,
        }
    }

    /// An assessment is already running upstream.
    pub fn is_running(&self) -> bool {
        matches!(self, AssessmentStatus::Dns | AssessmentStatus::InProgress)
    }
}

impl From<String> for AssessmentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DNS" => AssessmentStatus::Dns,
            "IN_PROGRESS" => AssessmentStatus::InProgress,
            "READY" => AssessmentStatus::Ready,
            "ERROR" => AssessmentStatus::Error,
            "HTTP_ERROR" => AssessmentStatus::HttpError,
            "SERVER_ERROR" => AssessmentStatus::ServerError,
            "DEADLINE_EXCEEDED" => AssessmentStatus::DeadlineExceeded,
            "ABORTED" => AssessmentStatus::Aborted,
            _ => AssessmentStatus::Unrecognized(value),
        }
    }
}

impl From<&str> for AssessmentStatus {
    fn from(value: &str) -> Self {
        AssessmentStatus::from(value.to_string())
    }
}

impl Default for AssessmentStatus {
    fn default() -> Self {
        AssessmentStatus::Unrecognized(String::new())
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result for a single IP of the assessed host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointResult {
    pub status_message: String,

    /// Empty when the endpoint could not be reached.
    pub grade: String,
}

impl EndpointResult {
    pub fn graded(grade: &str) -> Self {
        Self {
            status_message: "Ready".to_string(),
            grade: grade.to_string(),
        }
    }
}

/// The subset of the `/analyze` response the exporter needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentResult {
    pub status: AssessmentStatus,

    /// Completion time of the last assessment, epoch milliseconds.
    #[serde(rename = "testTime")]
    pub test_time_millis: i64,

    pub endpoints: Vec<EndpointResult>,
}

impl AssessmentResult {
    pub fn with_status(status: AssessmentStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == AssessmentStatus::Ready
    }
}

/// Response of the `/info` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiInfo {
    pub engine_version: String,
    pub criteria_version: String,
    pub max_assessments: i64,
    pub current_assessments: i64,
}
