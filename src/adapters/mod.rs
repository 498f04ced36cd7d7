//! Outward-facing adapters
//!
//! Everything that talks to the outside world: snapshot persistence and
//! the simulated external services. The core never imports from here
//! except through the traits these modules expose.

pub mod integrations;
pub mod persistence;
