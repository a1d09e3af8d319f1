//! Application services for the Campaign Wizard context.

pub mod controller;
pub mod resume;
