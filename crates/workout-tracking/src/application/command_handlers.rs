//! Command handlers for the workout tracking context.
//!
//! This module contains application-level command handler functions that
//! validate a command, build the record and persist it.

use workout_core::clock::Clock;
use workout_core::error::DomainError;
use workout_core::repository::WorkoutRepository;
use workout_core::workout::{Exercise, Workout};

use crate::domain::commands::CreateWorkout;

fn validate_exercise(index: usize, exercise: &Exercise) -> Result<(), DomainError> {
    if exercise.name.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "exercise {index}: name must not be empty"
        )));
    }
    if exercise.sets == 0 {
        return Err(DomainError::Validation(format!(
            "exercise {index}: sets must be greater than zero"
        )));
    }
    if exercise.reps == 0 {
        return Err(DomainError::Validation(format!(
            "exercise {index}: reps must be greater than zero"
        )));
    }
    if let Some(weight) = exercise.weight_kg
        && (!weight.is_finite() || weight < 0.0)
    {
        return Err(DomainError::Validation(format!(
            "exercise {index}: weight_kg must be a non-negative number"
        )));
    }
    Ok(())
}

/// Handles the `CreateWorkout` command: validates the payload, stamps the
/// creation time, defaults the date to the clock's current day and persists
/// the workout.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the name or any exercise is invalid,
/// or the repository error if persisting fails.
pub async fn handle_create_workout(
    command: &CreateWorkout,
    clock: &dyn Clock,
    repo: &dyn WorkoutRepository,
) -> Result<Workout, DomainError> {
    if command.name.trim().is_empty() {
        return Err(DomainError::Validation(
            "workout name must not be empty".into(),
        ));
    }
    for (index, exercise) in command.exercises.iter().enumerate() {
        validate_exercise(index, exercise)?;
    }

    let workout = Workout {
        id: command.workout_id,
        name: command.name.clone(),
        date: command.date.unwrap_or_else(|| clock.today()),
        notes: command.notes.clone(),
        exercises: command.exercises.clone(),
        created_at: clock.now(),
    };

    repo.insert(&workout).await?;

    tracing::debug!(
        correlation_id = %command.correlation_id,
        workout_id = %workout.id,
        "workout created"
    );

    Ok(workout)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;
    use workout_core::error::DomainError;
    use workout_core::workout::Exercise;
    use workout_test_support::{
        FailingWorkoutRepository, FixedClock, RecordedCall, RecordingWorkoutRepository,
    };

    use super::handle_create_workout;
    use crate::domain::commands::CreateWorkout;

    fn squat() -> Exercise {
        Exercise {
            name: "back squat".to_owned(),
            sets: 5,
            reps: 5,
            weight_kg: Some(100.0),
        }
    }

    fn command_with(name: &str, exercises: Vec<Exercise>) -> CreateWorkout {
        CreateWorkout {
            correlation_id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            name: name.to_owned(),
            date: Some(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()),
            notes: None,
            exercises,
        }
    }

    #[tokio::test]
    async fn test_handle_create_workout_persists_and_stamps_clock_time() {
        // Arrange
        let clock = FixedClock::at(2026, 1, 15, 10, 0, 0);
        let repo = RecordingWorkoutRepository::new();
        let command = command_with("Leg day", vec![squat()]);

        // Act
        let workout = handle_create_workout(&command, &clock, &repo).await.unwrap();

        // Assert
        assert_eq!(workout.id, command.workout_id);
        assert_eq!(workout.name, "Leg day");
        assert_eq!(workout.created_at, clock.0);
        assert_eq!(workout.date, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(workout.exercises, vec![squat()]);
        assert_eq!(repo.calls(), vec![RecordedCall::Insert(command.workout_id)]);
    }

    #[tokio::test]
    async fn test_handle_create_workout_defaults_date_to_clock_day() {
        // Arrange
        let clock = FixedClock::at(2026, 3, 2, 23, 30, 0);
        let repo = RecordingWorkoutRepository::new();
        let mut command = command_with("Late run", vec![]);
        command.date = None;

        // Act
        let workout = handle_create_workout(&command, &clock, &repo).await.unwrap();

        // Assert
        assert_eq!(workout.date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[tokio::test]
    async fn test_handle_create_workout_rejects_blank_name() {
        // Arrange
        let clock = FixedClock(Utc::now());
        let repo = RecordingWorkoutRepository::new();
        let command = command_with("   ", vec![]);

        // Act
        let result = handle_create_workout(&command, &clock, &repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_handle_create_workout_rejects_zero_reps() {
        // Arrange
        let clock = FixedClock(Utc::now());
        let repo = RecordingWorkoutRepository::new();
        let mut exercise = squat();
        exercise.reps = 0;
        let command = command_with("Leg day", vec![exercise]);

        // Act
        let result = handle_create_workout(&command, &clock, &repo).await;

        // Assert
        match result {
            Err(DomainError::Validation(message)) => assert!(message.contains("reps")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_handle_create_workout_rejects_negative_weight() {
        // Arrange
        let clock = FixedClock(Utc::now());
        let repo = RecordingWorkoutRepository::new();
        let mut exercise = squat();
        exercise.weight_kg = Some(-5.0);
        let command = command_with("Leg day", vec![exercise]);

        // Act
        let result = handle_create_workout(&command, &clock, &repo).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_handle_create_workout_propagates_repository_failure() {
        // Arrange
        let clock = FixedClock(Utc::now());
        let command = command_with("Leg day", vec![]);

        // Act
        let result = handle_create_workout(&command, &clock, &FailingWorkoutRepository).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
