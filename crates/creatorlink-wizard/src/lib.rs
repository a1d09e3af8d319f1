//! Creatorlink — Campaign Wizard bounded context.
//!
//! Drives a brand through the six campaign creation steps, gates forward
//! movement on per-step validity, keeps the in-progress draft in durable
//! storage after every change, and hands the finished draft to the
//! campaign repository.

pub mod application;
pub mod domain;
