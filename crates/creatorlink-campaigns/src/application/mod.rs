//! Application services for the Campaigns context.

pub mod query_handlers;
pub mod repository;
