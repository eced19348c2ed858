use crate::review::{ReviewRequest, ReviewResponse, ReviewService};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::{any::Any, sync::Arc};
use tracing::{error, warn};

pub const HEALTH_MESSAGE: &str = "Code Review API is running";

#[derive(Clone)]
pub struct AppState {
    pub reviewer: Arc<ReviewService>,
}

pub async fn review(
    State(state): State<AppState>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> (StatusCode, Json<ReviewResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected review request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(ReviewResponse::error(rejection.body_text())),
            );
        }
    };

    let response = state.reviewer.review(&request).await;
    (StatusCode::OK, Json(response))
}

pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

pub async fn not_found() -> (StatusCode, Json<ReviewResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ReviewResponse::error("route not found")),
    )
}

/// Renders a handler panic as a 500 review envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Review handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ReviewResponse::error(detail)),
    )
        .into_response()
}
