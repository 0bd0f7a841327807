use clap::Parser;
use ssllabs_exporter_api::AppState;
use ssllabs_exporter_application::ports::AssessmentApi;
use ssllabs_exporter_domain::CliOverrides;
use ssllabs_exporter_infrastructure::{BuildInfo, ExporterMetrics};
use ssllabs_exporter_jobs::{CachePruneJob, JobRunner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "ssllabs_exporter")]
#[command(version)]
#[command(about = "Prometheus exporter for SSLLabs TLS assessments")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Address to listen on for HTTP requests [default: :19115]
    #[arg(long)]
    listen_address: Option<String>,

    /// Time limit of a single probe, at least 1m [default: 10m]
    #[arg(long)]
    timeout: Option<String>,

    /// Log level (error, warn, info, debug) [default: debug]
    #[arg(long)]
    log_level: Option<String>,

    /// How long probe results are served from cache [default: 1h]
    #[arg(long)]
    cache_retention: Option<String>,

    /// Do not cache failed probes
    #[arg(long)]
    cache_ignore_failed: bool,

    /// SSLLabs API base URL [default: https://api.ssllabs.com/api/v3/]
    #[arg(long)]
    api_url: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            listen_address: self.listen_address.clone(),
            timeout: self.timeout.clone(),
            log_level: self.log_level.clone(),
            cache_retention: self.cache_retention.clone(),
            cache_ignore_failed: self.cache_ignore_failed,
            api_url: self.api_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting ssllabs_exporter");

    let services = di::Services::new(&config)?;

    let api_info = services.client.info().await.inspect_err(|e| {
        error!(error = %e, "Failed to fetch SSLLabs API info");
    })?;
    info!(
        engine_version = %api_info.engine_version,
        criteria_version = %api_info.criteria_version,
        max_assessments = api_info.max_assessments,
        current_assessments = api_info.current_assessments,
        "SSLLabs API info"
    );

    let exporter_metrics = Arc::new(ExporterMetrics::new(
        &BuildInfo::new(env!("CARGO_PKG_VERSION")),
        &api_info,
    )?);

    let shutdown = CancellationToken::new();

    let jobs = JobRunner::new()
        .with_cache_prune(
            CachePruneJob::new(services.cache.clone()).with_prune_delay(config.cache.prune_delay),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let state = AppState {
        probe: services.probe,
        exporter_metrics,
        probe_timeout: config.probe.timeout,
        shutdown: shutdown.clone(),
    };

    let result =
        server::start_web_server(&config.server.bind_address(), state, shutdown.clone()).await;

    shutdown.cancel();
    for job in jobs {
        let _ = job.await;
    }

    result?;
    info!("Server shutdown complete");
    Ok(())
}
