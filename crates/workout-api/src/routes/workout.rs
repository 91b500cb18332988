//! Routes for recording and reading workouts.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::{Json, Router, routing::get, routing::post};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use workout_core::workout::{Exercise, Workout};
use workout_tracking::application::{command_handlers, query_handlers};
use workout_tracking::domain::commands;

use crate::error::ApiError;
use crate::routes::route_not_found;
use crate::state::AppState;

/// Request body for POST /api/workout.
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    /// Short description of the session.
    pub name: String,
    /// Calendar day the workout was performed (`YYYY-MM-DD`). Defaults to
    /// today (UTC).
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Exercises in the order they were performed.
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// POST /api/workout
#[instrument(skip(state, request), fields(name = %request.name))]
async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>), ApiError> {
    let command = commands::CreateWorkout {
        correlation_id: Uuid::new_v4(),
        workout_id: Uuid::now_v7(),
        name: request.name,
        date: request.date,
        notes: request.notes,
        exercises: request.exercises,
    };

    info!(correlation_id = %command.correlation_id, "handling create_workout command");

    let workout = command_handlers::handle_create_workout(
        &command,
        state.clock.as_ref(),
        state.workout_repository.as_ref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/workout
#[instrument(skip(state))]
async fn read_many(State(state): State<AppState>) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = query_handlers::list_workouts(state.workout_repository.as_ref()).await?;
    Ok(Json(workouts))
}

/// Last path segment exactly as it arrived, still percent-encoded.
fn raw_last_segment(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}

/// GET /api/workout/{id}
///
/// A segment that does not percent-decode to UTF-8 is forwarded raw, so the
/// lookup answers every id with the same JSON error shape.
#[instrument(skip_all, fields(id = tracing::field::Empty))]
async fn read(
    State(state): State<AppState>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Workout>, ApiError> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            debug!(%rejection, "id segment not decodable, using raw segment");
            raw_last_segment(&uri).to_owned()
        }
    };
    tracing::Span::current().record("id", id.as_str());

    let workout = query_handlers::get_workout_by_id(&id, state.workout_repository.as_ref()).await?;
    Ok(Json(workout))
}

/// Returns the router for the workout resource. HEAD is mapped to the
/// not-found handler explicitly because axum serves it with the GET handler.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/workout",
            post(create)
                .get(read_many)
                .head(route_not_found)
                .fallback(route_not_found),
        )
        .route(
            "/api/workout/{id}",
            get(read).head(route_not_found).fallback(route_not_found),
        )
}
