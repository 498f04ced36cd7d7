//! Record store: collections, identifier sequence and seeding
//!
//! The store is the only owner of record state. External code reaches the
//! collections exclusively through its operations, which enforce the
//! uniqueness invariants and append audit entries.

pub mod records;
pub mod seed;
pub mod sequence;

pub use records::RecordStore;
pub use sequence::IdSequence;
