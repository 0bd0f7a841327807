pub mod exporter_metrics;

pub use exporter_metrics::{BuildInfo, ExporterMetrics};
