//! Creatorlink storage backends.
//!
//! Implementations of the `KeyValueStore` trait: an in-memory map for tests
//! and ephemeral runs, and a directory of files for durable local state.

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
