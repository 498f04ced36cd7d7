//! Core business logic
//!
//! Validation rules, the in-memory record store with its audit trail,
//! derived reporting and the background runtime. This layer owns every
//! domain invariant; adapters and the CLI only call into it.

pub mod audit;
pub mod reporting;
pub mod runtime;
pub mod store;
pub mod validation;

pub use runtime::{Runtime, RuntimeIntervals, SharedStore};
pub use store::RecordStore;
