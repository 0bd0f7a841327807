mod assessment_api;
mod cache_maintenance_port;
mod probe_cache;

pub use assessment_api::AssessmentApi;
pub use cache_maintenance_port::{CacheMaintenancePort, CachePruneOutcome};
pub use probe_cache::ProbeCache;

// Re-export for convenience
pub use ssllabs_exporter_domain::{AssessmentResult, Target};
