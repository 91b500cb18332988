//! Route table and route modules.

use std::any::Any;

use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::ErrorBody;
use crate::state::AppState;

pub mod health;
pub mod workout;

/// Answers requests whose method and path match no declared route. Also
/// registered for HEAD on GET-only routes, which axum would otherwise serve
/// with the GET handler.
pub async fn route_not_found(method: Method, uri: Uri) -> Response {
    tracing::debug!(%method, %uri, "no route matched");

    let body = ErrorBody {
        error: "route_not_found",
        message: format!("no route for {method} {}", uri.path()),
    };

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Turns a handler panic into a 500 instead of dropping the connection.
#[allow(clippy::needless_pass_by_value)]
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "handler panicked");

    let body = ErrorBody {
        error: "internal_error",
        message: "internal server error".to_string(),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    router
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Builds the complete application router. The route table is fixed once this
/// returns.
pub fn app(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .merge(health::router())
            .merge(workout::router()),
    )
    .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use serde_json::Value;
    use tower::ServiceExt;
    use workout_core::clock::SystemClock;
    use workout_test_support::RecordingWorkoutRepository;

    use super::*;

    async fn boom() -> &'static str {
        panic!("handler blew up")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500_with_json_body() {
        // Arrange
        let state = AppState::new(
            Arc::new(SystemClock),
            Arc::new(RecordingWorkoutRepository::new()),
        );
        let router: Router<AppState> = Router::new().route("/boom", get(boom));
        let app = with_middleware(router).with_state(state);
        let request = Request::builder()
            .method("GET")
            .uri("/boom")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["error"], "internal_error");
    }
}
