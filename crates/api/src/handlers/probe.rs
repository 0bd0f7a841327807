use crate::{errors::ApiError, state::AppState, utils::get_timeout};
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use prometheus::TEXT_FORMAT;
use serde::Deserialize;
use ssllabs_exporter_domain::Target;
use tracing::{debug, instrument};

#[derive(Debug, Default, Deserialize)]
pub struct ProbeQuery {
    #[serde(default)]
    pub target: String,
}

#[instrument(skip(state, headers), fields(target = %params.target), name = "api_probe")]
pub async fn probe(
    State(state): State<AppState>,
    Query(params): Query<ProbeQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let target = Target::parse(&params.target)?;
    let timeout = get_timeout(&headers, state.probe_timeout);

    debug!(timeout_secs = timeout.as_secs_f64(), "probing target");

    // Dropping this future (scraper went away) drops the probe context with it.
    let outcome = state
        .probe
        .execute(&target, timeout, state.shutdown.child_token())
        .await?;

    let body = outcome.snapshot.render()?;
    Ok(([(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response())
}
