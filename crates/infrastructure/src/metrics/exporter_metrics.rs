use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};
use ssllabs_exporter_domain::{ApiInfo, DomainError};

pub const EXPORTER_METRIC: &str = "ssllabs_exporter";
pub const API_METRIC: &str = "ssllabs_api";

/// Build identity reported by `ssllabs_exporter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub branch: String,
    pub revision: String,
    pub rust_version: String,
}

impl BuildInfo {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            branch: option_env!("SSLLABS_EXPORTER_BRANCH")
                .unwrap_or("unknown")
                .to_string(),
            revision: option_env!("SSLLABS_EXPORTER_REVISION")
                .unwrap_or("unknown")
                .to_string(),
            rust_version: option_env!("SSLLABS_EXPORTER_RUSTC_VERSION")
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

/// Process-wide metrics served on `/metrics`. Built once at startup.
pub struct ExporterMetrics {
    registry: Registry,
}

impl ExporterMetrics {
    pub fn new(build: &BuildInfo, api: &ApiInfo) -> Result<Self, DomainError> {
        Self::build(build, api).map_err(|e| DomainError::MetricsError(e.to_string()))
    }

    fn build(build: &BuildInfo, api: &ApiInfo) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let exporter = Gauge::with_opts(
            Opts::new(EXPORTER_METRIC, "SSLLabs exporter build parameters")
                .const_label("branch", &build.branch)
                .const_label("revision", &build.revision)
                .const_label("rustversion", &build.rust_version)
                .const_label("version", &build.version),
        )?;
        exporter.set(1.0);

        // `criteria` carries the engine version as well; dashboards depend on it.
        let api_versions = Gauge::with_opts(
            Opts::new(API_METRIC, "SSLLabs API engine and criteria versions")
                .const_label("engine", &api.engine_version)
                .const_label("criteria", &api.engine_version),
        )?;
        api_versions.set(1.0);

        registry.register(Box::new(exporter))?;
        registry.register(Box::new(api_versions))?;

        Ok(Self { registry })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn render(&self) -> Result<String, DomainError> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| DomainError::MetricsError(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| DomainError::MetricsError(e.to_string()))
    }
}
