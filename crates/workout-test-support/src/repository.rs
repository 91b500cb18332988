//! Test repositories — mock `WorkoutRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;
use workout_core::error::DomainError;
use workout_core::repository::WorkoutRepository;
use workout_core::workout::Workout;
use workout_store::memory_workout_repository::InMemoryWorkoutRepository;

/// One call observed by a `RecordingWorkoutRepository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    /// `insert` was called with a workout carrying this id.
    Insert(Uuid),
    /// `find_by_id` was called with this id.
    FindById(Uuid),
    /// `list` was called.
    List,
}

/// A workout repository that records every call it receives and delegates
/// storage to an `InMemoryWorkoutRepository`.
#[derive(Debug, Default)]
pub struct RecordingWorkoutRepository {
    inner: InMemoryWorkoutRepository,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingWorkoutRepository {
    /// Create an empty recording repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording repository pre-populated with `workouts`. Seeding
    /// calls are not recorded.
    ///
    /// # Panics
    ///
    /// Panics if two seeded workouts share an id.
    pub async fn seeded(workouts: &[Workout]) -> Self {
        let repo = Self::new();
        for workout in workouts {
            repo.inner.insert(workout).await.unwrap();
        }
        repo
    }

    /// Returns a snapshot of all calls received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl WorkoutRepository for RecordingWorkoutRepository {
    async fn insert(&self, workout: &Workout) -> Result<(), DomainError> {
        self.record(RecordedCall::Insert(workout.id));
        self.inner.insert(workout).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>, DomainError> {
        self.record(RecordedCall::FindById(id));
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<Workout>, DomainError> {
        self.record(RecordedCall::List);
        self.inner.list().await
    }
}

/// A workout repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingWorkoutRepository;

#[async_trait]
impl WorkoutRepository for FailingWorkoutRepository {
    async fn insert(&self, _workout: &Workout) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Workout>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list(&self) -> Result<Vec<Workout>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
