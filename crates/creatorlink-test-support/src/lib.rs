//! Shared test doubles for the Creatorlink workspace.

mod clock;
mod ids;
mod store;

pub use clock::{FixedClock, SteppingClock};
pub use ids::SequentialIdGenerator;
pub use store::{FailingStore, RecordingStore, StoreWrite};
