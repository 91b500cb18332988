//! Workout Core — shared domain abstractions.
//!
//! This crate defines the workout record, the repository seam, the error
//! taxonomy and the clock that the other workout crates depend on. It
//! contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod repository;
pub mod workout;
