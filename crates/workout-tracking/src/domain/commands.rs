//! Commands for the workout tracking context.

use chrono::NaiveDate;
use uuid::Uuid;
use workout_core::workout::Exercise;

/// Command to record a new workout.
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier the new workout will be stored under.
    pub workout_id: Uuid,
    /// Short description of the session.
    pub name: String,
    /// Calendar day the workout was performed. `None` means today.
    pub date: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Exercises in the order they were performed.
    pub exercises: Vec<Exercise>,
}
