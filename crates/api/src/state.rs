use ssllabs_exporter_application::use_cases::ProbeTargetUseCase;
use ssllabs_exporter_infrastructure::ExporterMetrics;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<ProbeTargetUseCase>,
    pub exporter_metrics: Arc<ExporterMetrics>,
    /// Upper bound of a single probe, lowered by the scraper's own timeout.
    pub probe_timeout: Duration,
    /// Cancelled on process shutdown; every probe runs under a child token.
    pub shutdown: CancellationToken,
}
