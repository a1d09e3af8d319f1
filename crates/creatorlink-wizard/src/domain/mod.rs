//! Domain model for the Campaign Wizard context.

pub mod commands;
pub mod draft;
pub mod review;
pub mod steps;
pub mod validation;
