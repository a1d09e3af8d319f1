//! Creatorlink Core — shared abstractions.
//!
//! This crate defines the traits and types the wizard and campaign store
//! depend on: time, id generation, key-value storage, commands and the
//! domain error. It contains no storage backend of its own.

pub mod clock;
pub mod command;
pub mod error;
pub mod format;
pub mod id;
pub mod storage;
