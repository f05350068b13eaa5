//! Sessions: the engine's public contract with the presentation layer.
//!
//! - `session`: `Session`, `MoveOutcome`, `Snapshot`
//! - `store`: the best-score persistence seam and its implementations

#[allow(clippy::module_inception)]
pub mod session;
pub mod store;

pub use session::{MoveOutcome, Session, Snapshot};
pub use store::{BestScoreRecord, BestScoreStore, JsonFileStore, MemoryStore, StoreError};
