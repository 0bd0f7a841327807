mod probe_snapshot;

pub use probe_snapshot::{
    ProbeMetrics, ProbeSnapshot, GRADE_METRIC, GRADE_TIME_METRIC, PROBE_DURATION_METRIC,
    PROBE_SUCCESS_METRIC,
};
