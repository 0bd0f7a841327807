use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use ssllabs_exporter_domain::DomainError;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::InvalidTarget => StatusCode::BAD_REQUEST,
            other => {
                error!(error = %other, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.to_string(),
        )
            .into_response()
    }
}
