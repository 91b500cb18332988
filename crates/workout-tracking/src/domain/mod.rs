//! Domain types for the workout tracking context.

pub mod commands;
