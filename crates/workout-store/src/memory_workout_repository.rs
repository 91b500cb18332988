//! In-process implementation of the `WorkoutRepository` trait.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use workout_core::error::DomainError;
use workout_core::repository::WorkoutRepository;
use workout_core::workout::Workout;

fn poisoned() -> DomainError {
    DomainError::Infrastructure("workout store lock poisoned".into())
}

/// Workout repository backed by a vector held in memory. Records live as long
/// as the repository does.
#[derive(Debug, Default)]
pub struct InMemoryWorkoutRepository {
    workouts: RwLock<Vec<Workout>>,
}

impl InMemoryWorkoutRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryWorkoutRepository {
    async fn insert(&self, workout: &Workout) -> Result<(), DomainError> {
        let mut workouts = self.workouts.write().map_err(|_| poisoned())?;
        if workouts.iter().any(|w| w.id == workout.id) {
            return Err(DomainError::Infrastructure(format!(
                "duplicate workout id {}",
                workout.id
            )));
        }
        workouts.push(workout.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>, DomainError> {
        let workouts = self.workouts.read().map_err(|_| poisoned())?;
        Ok(workouts.iter().find(|w| w.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Workout>, DomainError> {
        let mut workouts = self.workouts.read().map_err(|_| poisoned())?.clone();
        workouts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(workouts)
    }
}
