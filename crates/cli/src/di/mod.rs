use ssllabs_exporter_application::use_cases::{AnalyzeTargetUseCase, ProbeTargetUseCase};
use ssllabs_exporter_domain::Config;
use ssllabs_exporter_infrastructure::{ProbeResultCache, SslLabsClient};
use std::sync::Arc;

pub struct Services {
    pub client: Arc<SslLabsClient>,
    pub cache: Arc<ProbeResultCache>,
    pub probe: Arc<ProbeTargetUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Arc::new(SslLabsClient::new(
            &config.upstream.api_url,
            config.upstream.request_timeout,
        )?);
        let cache = Arc::new(ProbeResultCache::new(config.cache.retention));

        let analyze = Arc::new(AnalyzeTargetUseCase::new(client.clone()));
        let probe = Arc::new(
            ProbeTargetUseCase::new(analyze, cache.clone())
                .with_ignore_failed(config.cache.ignore_failed),
        );

        Ok(Self {
            client,
            cache,
            probe,
        })
    }
}
