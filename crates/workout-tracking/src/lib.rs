//! Workout API — workout tracking.
//!
//! Responsible for recording workouts and reading them back, one at a time
//! or all at once.

pub mod application;
pub mod domain;
