//! Domain model for the Campaigns context.

pub mod attributes;
pub mod campaign;
pub mod commands;
