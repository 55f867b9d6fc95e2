//! Frame annotation routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::services::annotation::{self, AnnotationError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/annotations/load/:frame_key` — one frame's annotations, grouped
/// by coach. `frame_key` is `analysisId:frameIndex`.
pub async fn load_frame_annotations(State(state): State<AppState>, Path(frame_key): Path<String>) -> Response {
    match annotation::load_frame(state.annotations.as_deref(), &frame_key).await {
        Ok(loaded) => Json(loaded).into_response(),
        Err(err) => annotation_error_response(err).into_response(),
    }
}

pub(crate) fn annotation_error_response(err: AnnotationError) -> (StatusCode, Json<ErrorBody>) {
    let (status, message) = match err {
        AnnotationError::InvalidFrameKey(message) => (StatusCode::BAD_REQUEST, message),
        AnnotationError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "Database not configured".to_owned()),
        AnnotationError::Database(e) => {
            tracing::error!(error = %e, "annotation query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load annotations".to_owned())
        }
    };
    (status, Json(ErrorBody { error: message }))
}

#[cfg(test)]
#[path = "annotations_test.rs"]
mod tests;
