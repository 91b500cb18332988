//! Workout storage backends.
//!
//! `PgWorkoutRepository` is the production store. `InMemoryWorkoutRepository`
//! keeps records for the lifetime of the process and is selected when no
//! database is configured.

pub mod memory_workout_repository;
pub mod pg_workout_repository;
pub mod schema;
