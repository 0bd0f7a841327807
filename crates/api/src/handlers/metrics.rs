use crate::{errors::ApiError, state::AppState};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use prometheus::TEXT_FORMAT;
use tracing::instrument;

#[instrument(skip(state), name = "api_metrics")]
pub async fn metrics(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = state.exporter_metrics.render()?;
    Ok(([(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response())
}
