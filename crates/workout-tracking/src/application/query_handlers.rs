//! Query handlers for the workout tracking context.

use uuid::Uuid;
use workout_core::error::DomainError;
use workout_core::repository::WorkoutRepository;
use workout_core::workout::Workout;

/// Retrieves a workout by the raw id taken from the request path.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if `id` is not a UUID or no workout has
/// that id, or the repository error if the lookup fails.
pub async fn get_workout_by_id(
    id: &str,
    repo: &dyn WorkoutRepository,
) -> Result<Workout, DomainError> {
    let not_found = || DomainError::NotFound {
        resource: "workout",
        id: id.to_owned(),
    };

    let workout_id = Uuid::parse_str(id).map_err(|_| not_found())?;
    repo.find_by_id(workout_id).await?.ok_or_else(not_found)
}

/// Retrieves every workout, oldest first.
///
/// # Errors
///
/// Returns the repository error if the lookup fails.
pub async fn list_workouts(repo: &dyn WorkoutRepository) -> Result<Vec<Workout>, DomainError> {
    repo.list().await
}
