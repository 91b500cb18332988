//! Shared test mocks and utilities for the workout API.

mod clock;
mod repository;

pub use clock::FixedClock;
pub use repository::{FailingWorkoutRepository, RecordedCall, RecordingWorkoutRepository};
