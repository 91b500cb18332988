//! Workout repository abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::workout::Workout;

/// Repository trait for storing and reading workouts.
#[async_trait]
pub trait WorkoutRepository: Send + Sync {
    /// Persist a new workout.
    async fn insert(&self, workout: &Workout) -> Result<(), DomainError>;

    /// Look up a single workout. Returns `Ok(None)` when it does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>, DomainError>;

    /// Load every workout, ordered by creation time then id.
    async fn list(&self) -> Result<Vec<Workout>, DomainError>;
}
