//! Application services for the workout tracking context.

pub mod command_handlers;
pub mod query_handlers;
