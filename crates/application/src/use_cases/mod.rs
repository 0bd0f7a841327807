pub mod assessment;
pub mod probe;

// Re-export use cases
pub use assessment::{AnalyzeTargetUseCase, AssessmentFailure, BackoffPolicy};
pub use probe::{ProbeOutcome, ProbeTargetUseCase};
