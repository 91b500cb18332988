//! `PostgreSQL` implementation of the `WorkoutRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use workout_core::error::DomainError;
use workout_core::repository::WorkoutRepository;
use workout_core::workout::{Exercise, Workout};

/// Row shape of the `workouts` table.
#[derive(Debug, sqlx::FromRow)]
struct WorkoutRow {
    id: Uuid,
    name: String,
    date: NaiveDate,
    notes: Option<String>,
    exercises: Json<Vec<Exercise>>,
    created_at: DateTime<Utc>,
}

impl From<WorkoutRow> for Workout {
    fn from(row: WorkoutRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            date: row.date,
            notes: row.notes,
            exercises: row.exercises.0,
            created_at: row.created_at,
        }
    }
}

fn infrastructure(err: &sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

/// PostgreSQL-backed workout repository.
#[derive(Debug, Clone)]
pub struct PgWorkoutRepository {
    pool: PgPool,
}

impl PgWorkoutRepository {
    /// Creates a new `PgWorkoutRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkoutRepository for PgWorkoutRepository {
    async fn insert(&self, workout: &Workout) -> Result<(), DomainError> {
        sqlx::query(
            r"
            INSERT INTO workouts (id, name, date, notes, exercises, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(workout.id)
        .bind(&workout.name)
        .bind(workout.date)
        .bind(workout.notes.as_deref())
        .bind(Json(&workout.exercises))
        .bind(workout.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>, DomainError> {
        let row: Option<WorkoutRow> = sqlx::query_as(
            r"
            SELECT id, name, date, notes, exercises, created_at
            FROM workouts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        Ok(row.map(Workout::from))
    }

    async fn list(&self) -> Result<Vec<Workout>, DomainError> {
        let rows: Vec<WorkoutRow> = sqlx::query_as(
            r"
            SELECT id, name, date, notes, exercises, created_at
            FROM workouts
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure(&e))?;

        Ok(rows.into_iter().map(Workout::from).collect())
    }
}
