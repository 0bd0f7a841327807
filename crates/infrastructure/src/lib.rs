//! SSLLabs Exporter Infrastructure Layer
pub mod cache;
pub mod metrics;
pub mod ssllabs;

pub use cache::ProbeResultCache;
pub use metrics::{BuildInfo, ExporterMetrics};
pub use ssllabs::SslLabsClient;
