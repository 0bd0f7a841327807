pub mod analyze_target;
pub mod backoff;

pub use analyze_target::{AnalyzeTargetUseCase, AssessmentFailure};
pub use backoff::BackoffPolicy;
