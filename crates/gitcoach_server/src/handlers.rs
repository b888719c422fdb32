//! HTTP handlers for the feedback server

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::types::{OverallFeedbackRequest, SectionFeedbackRequest};
use gitcoach::{Engine, FeedbackError, OverallFeedback, SectionFeedback};

/// Shared server state
pub struct AppState {
    pub engine: Engine,
}

/// Wire-level error wrapper mapping the pipeline taxonomy onto HTTP statuses.
pub struct ApiError(FeedbackError);

impl From<FeedbackError> for ApiError {
    fn from(err: FeedbackError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FeedbackError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            FeedbackError::FailedPrecondition(_) => StatusCode::PRECONDITION_FAILED,
            FeedbackError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            FeedbackError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
            FeedbackError::Api(_) | FeedbackError::UnexpectedResponse(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({
            "error": {
                "kind": self.0.kind(),
                "message": self.0.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

/// Handler for POST /v1/feedback/section
pub async fn section_feedback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SectionFeedbackRequest>,
) -> Result<Json<SectionFeedback>, ApiError> {
    let request_id = Uuid::new_v4();
    let section = req.section.as_deref().unwrap_or_default();
    tracing::info!(%request_id, section, "section feedback requested");

    let result = state
        .engine
        .section_feedback(section, req.answers.as_ref(), req.user_id.as_deref())
        .await;

    match &result {
        Ok(_) => tracing::info!(%request_id, "section feedback complete"),
        Err(err) => {
            tracing::warn!(%request_id, kind = err.kind(), error = %err, "section feedback failed")
        }
    }
    Ok(Json(result?))
}

/// Handler for POST /v1/feedback/overall
pub async fn overall_feedback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OverallFeedbackRequest>,
) -> Result<Json<OverallFeedback>, ApiError> {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, "overall feedback requested");

    let result = state
        .engine
        .overall_feedback(req.answers.as_ref(), req.user_id.as_deref())
        .await;

    match &result {
        Ok(_) => tracing::info!(%request_id, "overall feedback complete"),
        Err(err) => {
            tracing::warn!(%request_id, kind = err.kind(), error = %err, "overall feedback failed")
        }
    }
    Ok(Json(result?))
}

/// Handler for GET /healthz
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: FeedbackError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            status_of(FeedbackError::InvalidArgument("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(FeedbackError::FailedPrecondition("x".into())),
            StatusCode::PRECONDITION_FAILED
        );
        assert_eq!(
            status_of(FeedbackError::RateLimited),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_of(FeedbackError::DeadlineExceeded),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_of(FeedbackError::UnexpectedResponse("x".into())),
            StatusCode::BAD_GATEWAY
        );
    }
}
