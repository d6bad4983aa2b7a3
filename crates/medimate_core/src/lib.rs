//! MediMate Core - shared data model, state store, and rule engines
//!
//! Everything here is deterministic: the analyzers map structured input to
//! recommendation objects through fixed thresholds and lookup tables, and the
//! state store persists key -> JSON files under a single data directory.
//! There is no network, no database, and no real inference anywhere.

pub mod error;
pub mod paths;
pub mod quiz;
pub mod report;
pub mod skin;
pub mod store;
pub mod symptom;
pub mod types;
pub mod wellness;

pub use error::StoreError;
pub use store::StateStore;
pub use types::*;
