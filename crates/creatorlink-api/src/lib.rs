//! Creatorlink — HTTP API.
//!
//! Exposes the creator directory, the campaign wizard and the campaign
//! list over JSON routes.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
