//! Shared application state.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use workout_core::clock::Clock;
use workout_core::repository::WorkoutRepository;
use workout_store::memory_workout_repository::InMemoryWorkoutRepository;
use workout_store::pg_workout_repository::PgWorkoutRepository;
use workout_store::schema;

use crate::error::AppError;

const MAX_DB_CONNECTIONS: u32 = 10;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for creation timestamps.
    pub clock: Arc<dyn Clock>,
    /// Workout storage.
    pub workout_repository: Arc<dyn WorkoutRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, workout_repository: Arc<dyn WorkoutRepository>) -> Self {
        Self {
            clock,
            workout_repository,
        }
    }
}

/// Opens the workout store. A database URL selects PostgreSQL (migrations
/// are applied before returning), otherwise records are kept in memory.
///
/// # Errors
///
/// Returns `AppError::Database` if the pool cannot connect, or
/// `AppError::Migration` if the schema cannot be brought up to date.
pub async fn connect_repository(
    database_url: Option<&str>,
) -> Result<Arc<dyn WorkoutRepository>, AppError> {
    let Some(database_url) = database_url else {
        tracing::warn!("DATABASE_URL not set, workouts are kept in memory only");
        return Ok(Arc::new(InMemoryWorkoutRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(database_url)
        .await?;
    schema::run_migrations(&pool).await?;

    tracing::info!("connected to PostgreSQL workout store");
    Ok(Arc::new(PgWorkoutRepository::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_repository_without_url_uses_memory_store() {
        let repo = connect_repository(None).await.unwrap();

        assert!(repo.list().await.unwrap().is_empty());
    }
}
