//! Identifier generation.
//!
//! Campaign ids must never collide, even when two campaigns are created
//! within the same clock tick, so they are drawn from a generator rather
//! than derived from the current time. Production uses random v4 UUIDs;
//! tests inject a sequential generator.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use uuid::Builder;

/// Abstraction over unique identifier generation.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier that has never been returned before.
    fn next_id(&self) -> String;
}

/// Generates random v4 UUIDs from an owned `StdRng`.
#[derive(Debug)]
pub struct RandomIdGenerator {
    rng: Mutex<StdRng>,
}

impl RandomIdGenerator {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let mut bytes = [0u8; 16];
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}
