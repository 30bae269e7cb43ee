use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("peer connection is closed")]
    PeerGone,

    #[error("relay actor has stopped")]
    ActorStopped,
}

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("No photo uploaded")]
    Missing,

    #[error("invalid upload body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("photo storage failed: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for PhotoError {
    fn into_response(self) -> Response {
        let status = match &self {
            PhotoError::Missing => StatusCode::BAD_REQUEST,
            PhotoError::Multipart(e) => e.status(),
            PhotoError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
