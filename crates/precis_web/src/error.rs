use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad Request: the 'text' query parameter is required and must not be empty")]
    MissingText,

    #[error(transparent)]
    Analysis(#[from] precis_core::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingText => StatusCode::BAD_REQUEST,
            ApiError::Analysis(e) if e.is_invalid_input() => StatusCode::BAD_REQUEST,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Analysis failed: {}", self);
            (status, Json(json!({ "error": self.to_string() }))).into_response()
        } else {
            warn!("Rejected request: {}", self);
            (status, self.to_string()).into_response()
        }
    }
}
