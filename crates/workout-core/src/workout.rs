//! The workout record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single exercise performed as part of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, e.g. "back squat".
    pub name: String,
    /// Number of sets performed.
    pub sets: u32,
    /// Repetitions per set.
    pub reps: u32,
    /// Load in kilograms, absent for bodyweight work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

/// A persisted workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Workout identifier.
    pub id: Uuid,
    /// Short description of the session.
    pub name: String,
    /// Calendar day the workout was performed.
    pub date: NaiveDate,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Exercises in the order they were performed.
    pub exercises: Vec<Exercise>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
