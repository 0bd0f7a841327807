use prometheus::proto::MetricFamily;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use ssllabs_exporter_domain::{AggregatedGrade, DomainError};
use std::time::Duration;

pub const PROBE_DURATION_METRIC: &str = "ssllabs_probe_duration_seconds";
pub const PROBE_SUCCESS_METRIC: &str = "ssllabs_probe_success";
pub const GRADE_METRIC: &str = "ssllabs_grade";
pub const GRADE_TIME_METRIC: &str = "ssllabs_grade_time_seconds";

/// Label used when there is no grade to report.
const NO_GRADE_LABEL: &str = "-";

/// Gauges of a single probe, registered on a registry of their own.
pub struct ProbeMetrics {
    registry: Registry,
    duration: Gauge,
    success: Gauge,
    grade: GaugeVec,
    grade_time: Gauge,
}

impl ProbeMetrics {
    pub fn new() -> Result<Self, DomainError> {
        Self::build().map_err(|e| DomainError::MetricsError(e.to_string()))
    }

    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let duration = Gauge::with_opts(Opts::new(
            PROBE_DURATION_METRIC,
            "Displays how long the assessment took to complete in seconds",
        ))?;
        let success = Gauge::with_opts(Opts::new(
            PROBE_SUCCESS_METRIC,
            "Displays whether the assessment succeeded or not",
        ))?;
        let grade = GaugeVec::new(
            Opts::new(
                GRADE_METRIC,
                "Displays the returned SSLLabs grade of the target host",
            ),
            &["grade"],
        )?;
        let grade_time = Gauge::with_opts(Opts::new(
            GRADE_TIME_METRIC,
            "Displays the assessment time for the target host",
        ))?;

        registry.register(Box::new(duration.clone()))?;
        registry.register(Box::new(success.clone()))?;
        registry.register(Box::new(grade.clone()))?;
        registry.register(Box::new(grade_time.clone()))?;

        Ok(Self {
            registry,
            duration,
            success,
            grade,
            grade_time,
        })
    }

    /// Wall clock (epoch seconds) at which the probe started.
    pub fn record_start(&self, started_at_unix: i64) {
        self.grade_time.set(started_at_unix as f64);
    }

    pub fn record_duration(&self, elapsed: Duration) {
        self.duration.set(elapsed.as_secs_f64());
    }

    /// Success stays at 0 and the grade is reported as `-1`.
    pub fn record_failure(&self) {
        self.grade.with_label_values(&[NO_GRADE_LABEL]).set(-1.0);
    }

    pub fn record_success(&self, grade: AggregatedGrade) {
        self.success.set(1.0);

        match grade {
            AggregatedGrade::Ungraded => self.grade.with_label_values(&[NO_GRADE_LABEL]).set(0.0),
            other => self.grade.with_label_values(&[other.as_label()]).set(1.0),
        }
    }

    pub fn into_snapshot(self) -> ProbeSnapshot {
        ProbeSnapshot {
            registry: self.registry,
            duration: self.duration,
            success: self.success,
            grade: self.grade,
            grade_time: self.grade_time,
        }
    }
}

/// Read-only metrics of a finished probe, ready to be served or cached.
pub struct ProbeSnapshot {
    registry: Registry,
    duration: Gauge,
    success: Gauge,
    grade: GaugeVec,
    grade_time: Gauge,
}

impl ProbeSnapshot {
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Text exposition of the snapshot.
    pub fn render(&self) -> Result<String, DomainError> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.gather(), &mut buffer)
            .map_err(|e| DomainError::MetricsError(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| DomainError::MetricsError(e.to_string()))
    }

    /// True when the probe success gauge reads 0.
    pub fn failed(&self) -> bool {
        self.success.get() == 0.0
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration.get()
    }

    pub fn grade_time_seconds(&self) -> f64 {
        self.grade_time.get()
    }

    /// Value of `ssllabs_grade` for the given label, if that series was set.
    pub fn grade_value(&self, label: &str) -> Option<f64> {
        let series = self
            .gather()
            .iter()
            .filter(|family| family.name() == GRADE_METRIC)
            .flat_map(|family| family.get_metric())
            .any(|metric| {
                metric
                    .get_label()
                    .iter()
                    .any(|pair| pair.name() == "grade" && pair.value() == label)
            });

        series.then(|| self.grade.with_label_values(&[label]).get())
    }
}

impl std::fmt::Debug for ProbeSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeSnapshot")
            .field("failed", &self.failed())
            .field("duration_seconds", &self.duration_seconds())
            .finish()
    }
}
