pub mod difficulty;
pub mod event;

pub use difficulty::Difficulty;
pub use event::{Event, EventId, Occupancy};
