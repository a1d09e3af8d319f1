//! Creatorlink — Campaigns bounded context.
//!
//! Owns finalized, immutable campaign records: the append request the
//! wizard produces, id and timestamp assignment, durable storage of the
//! collection, and the read side used by list and detail views.

pub mod application;
pub mod domain;
