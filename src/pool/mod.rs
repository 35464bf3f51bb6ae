pub mod snapshot;
pub mod tick;
pub mod token;

pub use snapshot::PoolSnapshot;
pub use tick::{InitializedTick, ProcessedTick, TickIndexMap};
pub use token::{Token, sort_tokens};
