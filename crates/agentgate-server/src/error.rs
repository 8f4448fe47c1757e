use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use agentgate_core::{Error, ErrorBody};

/// REST-facing wrapper that maps core errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
