use ssllabs_exporter_application::use_cases::{AnalyzeTargetUseCase, BackoffPolicy};
use ssllabs_exporter_application::ProbeContext;
use ssllabs_exporter_domain::{AssessmentStatus, DomainError, Target};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::{now_millis, ready_result, result, MockAssessmentApi};

fn target() -> Target {
    Target::parse("example.com").unwrap()
}

fn context(timeout_secs: u64) -> ProbeContext {
    ProbeContext::with_timeout(Duration::from_secs(timeout_secs), CancellationToken::new())
}

fn use_case(api: &MockAssessmentApi) -> AnalyzeTargetUseCase {
    AnalyzeTargetUseCase::new(Arc::new(api.clone()))
}

#[tokio::test(start_paused = true)]
async fn test_fresh_cached_result_is_returned_without_kickoff() {
    let api = MockAssessmentApi::with_responses(vec![ready_result(now_millis(), &["A"])]);

    let result = use_case(&api).execute(&target(), &context(600)).await.unwrap();

    assert_eq!(result.status, AssessmentStatus::Ready);
    assert_eq!(result.endpoints[0].grade, "A");
    assert_eq!(api.calls(), vec![false]);
}

#[tokio::test(start_paused = true)]
async fn test_stale_result_triggers_new_assessment() {
    let api = MockAssessmentApi::with_responses(vec![
        ready_result(0, &["A"]),
        ready_result(now_millis(), &["B"]),
    ]);

    let result = use_case(&api).execute(&target(), &context(600)).await.unwrap();

    assert_eq!(result.endpoints[0].grade, "B");
    assert_eq!(api.calls(), vec![false, true]);
}

#[tokio::test(start_paused = true)]
async fn test_running_assessment_is_polled_without_kickoff() {
    let api = MockAssessmentApi::with_responses(vec![
        result(AssessmentStatus::Dns),
        result(AssessmentStatus::InProgress),
        ready_result(now_millis(), &["A+"]),
    ]);
    let start = Instant::now();

    let result = use_case(&api).execute(&target(), &context(600)).await.unwrap();

    assert!(result.is_ready());
    assert_eq!(api.calls(), vec![false, false, false]);
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(20), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(40), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_kickoff_then_poll_until_ready() {
    let api = MockAssessmentApi::with_responses(vec![
        ready_result(0, &["F"]),
        result(AssessmentStatus::Dns),
        result(AssessmentStatus::InProgress),
        ready_result(now_millis(), &["A", "B"]),
    ]);

    let result = use_case(&api).execute(&target(), &context(600)).await.unwrap();

    assert_eq!(result.endpoints.len(), 2);
    assert_eq!(api.calls(), vec![false, true, false, false]);
}

#[tokio::test(start_paused = true)]
async fn test_http_error_is_retried() {
    let api = MockAssessmentApi::with_responses(vec![
        result(AssessmentStatus::HttpError),
        result(AssessmentStatus::HttpError),
        ready_result(now_millis(), &["A"]),
    ]);
    let start = Instant::now();

    let result = use_case(&api).execute(&target(), &context(600)).await.unwrap();

    assert!(result.is_ready());
    assert_eq!(api.call_count(), 3);
    assert!(start.elapsed() < Duration::from_secs(20));
}

#[tokio::test(start_paused = true)]
async fn test_server_error_backs_off_longer() {
    let api = MockAssessmentApi::with_responses(vec![
        result(AssessmentStatus::ServerError),
        ready_result(now_millis(), &["A"]),
    ]);
    let start = Instant::now();

    let result = use_case(&api).execute(&target(), &context(600)).await.unwrap();

    assert!(result.is_ready());
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(30), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(60), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_error_status_fails_assessment() {
    let api = MockAssessmentApi::with_responses(vec![result(AssessmentStatus::Error)]);

    let failure = use_case(&api)
        .execute(&target(), &context(600))
        .await
        .unwrap_err();

    assert_eq!(failure.error, DomainError::AssessmentFailed);
    assert_eq!(failure.result.status, AssessmentStatus::Error);
    assert_eq!(api.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_error_status_during_polling_fails_assessment() {
    let api = MockAssessmentApi::with_responses(vec![
        result(AssessmentStatus::InProgress),
        result(AssessmentStatus::Error),
    ]);

    let failure = use_case(&api)
        .execute(&target(), &context(600))
        .await
        .unwrap_err();

    assert_eq!(failure.error, DomainError::AssessmentFailed);
    assert_eq!(api.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_unrecognized_status_fails_assessment() {
    let api = MockAssessmentApi::with_responses(vec![result(AssessmentStatus::from("WEIRD"))]);

    let failure = use_case(&api)
        .execute(&target(), &context(600))
        .await
        .unwrap_err();

    assert_eq!(
        failure.error,
        DomainError::UnrecognizedStatus("WEIRD".to_string())
    );
    assert_eq!(failure.error.to_string(), "unrecognized status: WEIRD");
}

#[tokio::test(start_paused = true)]
async fn test_deadline_exceeded_while_polling() {
    let api = MockAssessmentApi::with_responses(vec![result(AssessmentStatus::InProgress)]);
    let start = Instant::now();

    let failure = use_case(&api)
        .execute(&target(), &context(60))
        .await
        .unwrap_err();

    assert_eq!(failure.error, DomainError::DeadlineExceeded);
    assert_eq!(failure.error.to_string(), "context deadline exceeded");
    assert_eq!(failure.result.status, AssessmentStatus::DeadlineExceeded);
    assert!(start.elapsed() >= Duration::from_secs(60));
    assert!(start.elapsed() < Duration::from_secs(61));
}

#[tokio::test(start_paused = true)]
async fn test_deadline_exceeded_while_retrying_server_errors() {
    let api = MockAssessmentApi::with_responses(vec![result(AssessmentStatus::ServerError)]);

    let failure = use_case(&api)
        .execute(&target(), &context(60))
        .await
        .unwrap_err();

    assert_eq!(failure.error, DomainError::DeadlineExceeded);
    assert!(api.call_count() <= 3);
}

#[tokio::test(start_paused = true)]
async fn test_slow_upstream_call_is_bounded_by_deadline() {
    let api = MockAssessmentApi::with_responses(vec![ready_result(now_millis(), &["A"])])
        .with_delay(Duration::from_secs(120));
    let start = Instant::now();

    let failure = use_case(&api)
        .execute(&target(), &context(60))
        .await
        .unwrap_err();

    assert_eq!(failure.error, DomainError::DeadlineExceeded);
    assert!(start.elapsed() >= Duration::from_secs(60));
    assert!(start.elapsed() < Duration::from_secs(61));
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_aborts_assessment() {
    let api = MockAssessmentApi::with_responses(vec![result(AssessmentStatus::InProgress)]);
    let token = CancellationToken::new();
    let ctx = ProbeContext::with_timeout(Duration::from_secs(600), token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(25)).await;
        token.cancel();
    });

    let failure = use_case(&api).execute(&target(), &ctx).await.unwrap_err();
    canceller.await.unwrap();

    assert_eq!(failure.error, DomainError::Aborted);
    assert_eq!(failure.error.to_string(), "context canceled");
    assert_eq!(failure.result.status, AssessmentStatus::Aborted);
}

#[tokio::test(start_paused = true)]
async fn test_custom_backoff_policy_is_used() {
    let api = MockAssessmentApi::with_responses(vec![
        result(AssessmentStatus::InProgress),
        result(AssessmentStatus::InProgress),
        ready_result(now_millis(), &["A"]),
    ]);
    let backoff = BackoffPolicy {
        poll_interval: Duration::from_secs(1)..Duration::from_secs(1),
        ..BackoffPolicy::default()
    };
    let start = Instant::now();

    use_case(&api)
        .with_backoff(backoff)
        .execute(&target(), &context(600))
        .await
        .unwrap();

    assert_eq!(start.elapsed(), Duration::from_secs(2));
}
