pub mod probe_target;

pub use probe_target::{ProbeOutcome, ProbeTargetUseCase};
