//! Persistence gateway
//!
//! Versioned whole-state snapshots, the storage trait and the JSON file
//! backend. The record store stays storage-agnostic; everything flows
//! through [`StateSnapshot`].

pub mod file;
pub mod snapshot;
pub mod traits;

pub use file::FileStateStore;
pub use snapshot::{StateSnapshot, SCHEMA_VERSION};
pub use traits::StateStore;
