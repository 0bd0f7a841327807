#![allow(dead_code)]

use async_trait::async_trait;
use ssllabs_exporter_api::AppState;
use ssllabs_exporter_application::ports::AssessmentApi;
use ssllabs_exporter_application::use_cases::{AnalyzeTargetUseCase, ProbeTargetUseCase};
use ssllabs_exporter_domain::{
    ApiInfo, AssessmentResult, AssessmentStatus, DomainError, EndpointResult, Target,
};
use ssllabs_exporter_infrastructure::{BuildInfo, ExporterMetrics, ProbeResultCache};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Answers every `/analyze` call with the same result after `delay`.
pub struct MockAssessmentApi {
    response: Mutex<AssessmentResult>,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockAssessmentApi {
    pub fn ready(grades: &[&str]) -> Self {
        Self::with_result(AssessmentResult {
            status: AssessmentStatus::Ready,
            test_time_millis: now_millis(),
            endpoints: grades.iter().map(|g| EndpointResult::graded(g)).collect(),
        })
    }

    pub fn with_result(result: AssessmentResult) -> Self {
        Self {
            response: Mutex::new(result),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

#[async_trait]
impl AssessmentApi for MockAssessmentApi {
    async fn analyze(&self, _target: &Target, _start_new: bool) -> AssessmentResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.response.lock().unwrap().clone()
    }

    async fn info(&self) -> Result<ApiInfo, DomainError> {
        Ok(api_info())
    }
}

pub fn api_info() -> ApiInfo {
    ApiInfo {
        engine_version: "2.2.0".to_string(),
        criteria_version: "2009q".to_string(),
        max_assessments: 25,
        current_assessments: 0,
    }
}

pub struct TestApp {
    pub state: AppState,
    pub cache: Arc<ProbeResultCache>,
}

pub fn test_app(api: Arc<MockAssessmentApi>, probe_timeout: Duration, ignore_failed: bool) -> TestApp {
    let cache = Arc::new(ProbeResultCache::new(Duration::from_secs(3600)));
    let analyze = Arc::new(AnalyzeTargetUseCase::new(api));
    let probe = ProbeTargetUseCase::new(analyze, cache.clone()).with_ignore_failed(ignore_failed);
    let exporter_metrics =
        ExporterMetrics::new(&BuildInfo::new("0.4.0"), &api_info()).unwrap();

    TestApp {
        state: AppState {
            probe: Arc::new(probe),
            exporter_metrics: Arc::new(exporter_metrics),
            probe_timeout,
            shutdown: CancellationToken::new(),
        },
        cache,
    }
}
