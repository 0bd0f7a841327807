#![allow(dead_code)]

use async_trait::async_trait;
use ssllabs_exporter_application::ports::{AssessmentApi, ProbeCache};
use ssllabs_exporter_application::services::ProbeSnapshot;
use ssllabs_exporter_domain::{
    ApiInfo, AssessmentResult, AssessmentStatus, DomainError, EndpointResult, Target,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn result(status: AssessmentStatus) -> AssessmentResult {
    AssessmentResult {
        status,
        ..Default::default()
    }
}

pub fn ready_result(test_time_millis: i64, grades: &[&str]) -> AssessmentResult {
    AssessmentResult {
        status: AssessmentStatus::Ready,
        test_time_millis,
        endpoints: grades.iter().map(|g| EndpointResult::graded(g)).collect(),
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Replays scripted `/analyze` responses in order; the last one repeats once
/// the script runs out.
#[derive(Clone, Default)]
pub struct MockAssessmentApi {
    script: Arc<Mutex<VecDeque<AssessmentResult>>>,
    last: Arc<Mutex<Option<AssessmentResult>>>,
    calls: Arc<Mutex<Vec<bool>>>,
    delay: Arc<Mutex<Duration>>,
    info: Arc<Mutex<Option<ApiInfo>>>,
}

impl MockAssessmentApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<AssessmentResult>) -> Self {
        let mock = Self::new();
        mock.script.lock().unwrap().extend(responses);
        mock
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().unwrap() = delay;
        self
    }

    pub fn set_info(&self, info: ApiInfo) {
        *self.info.lock().unwrap() = Some(info);
    }

    /// `start_new` flag of every request, in order.
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next_response(&self) -> AssessmentResult {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = Some(next);
        }
        last.clone()
            .unwrap_or_else(|| result(AssessmentStatus::HttpError))
    }
}

#[async_trait]
impl AssessmentApi for MockAssessmentApi {
    async fn analyze(&self, _target: &Target, start_new: bool) -> AssessmentResult {
        self.calls.lock().unwrap().push(start_new);

        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.next_response()
    }

    async fn info(&self) -> Result<ApiInfo, DomainError> {
        self.info
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::UpstreamUnavailable("no info".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MockProbeCache {
    entries: Arc<Mutex<HashMap<String, Arc<ProbeSnapshot>>>>,
    puts: Arc<Mutex<usize>>,
}

impl MockProbeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn put_count(&self) -> usize {
        *self.puts.lock().unwrap()
    }
}

impl ProbeCache for MockProbeCache {
    fn get(&self, target: &Target) -> Option<Arc<ProbeSnapshot>> {
        self.entries.lock().unwrap().get(target.as_str()).cloned()
    }

    fn put(&self, target: &Target, snapshot: Arc<ProbeSnapshot>) {
        *self.puts.lock().unwrap() += 1;
        self.entries
            .lock()
            .unwrap()
            .insert(target.as_str().to_string(), snapshot);
    }
}
