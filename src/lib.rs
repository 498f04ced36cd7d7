// VidaPlus - Hospital Management Core
// Copyright (c) 2026 VidaPlus Contributors
// Licensed under the MIT License

//! # VidaPlus - Hospital Management Core
//!
//! VidaPlus is a hospital-management core library with a small operator
//! CLI: patient, professional and bed registries, appointment and
//! telemedicine scheduling, bed occupancy and consultation reporting, an
//! append-only audit trail and versioned JSON state snapshots.
//!
//! ## Architecture
//!
//! VidaPlus follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (validation, record store, reporting, runtime)
//! - [`adapters`] - Persistence gateway and simulated external services
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use vidaplus::core::store::RecordStore;
//! use vidaplus::core::reporting::system_statistics;
//! use vidaplus::domain::PatientDraft;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = RecordStore::new();
//!
//!     let patient = store.register_patient(PatientDraft {
//!         name: "Maria da Silva".to_string(),
//!         cpf: "529.982.247-25".to_string(),
//!         ..Default::default()
//!     })?;
//!     println!("Registered patient #{}", patient.id);
//!
//!     let stats = system_statistics(&store);
//!     assert_eq!(stats.total_patients, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Invariants
//!
//! Every mutation validates its input, enforces uniqueness (CPF,
//! professional registry, bed number) and referential integrity, then
//! appends exactly one audit entry. A failed operation never leaves the
//! store partially mutated.
//!
//! ## Persistence
//!
//! The store serializes to a versioned snapshot document
//! ([`adapters::persistence::StateSnapshot`]); restoring validates the
//! document before any state is replaced, so a malformed backup cannot
//! corrupt a running system.
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with a
//! [`domain::HospitalError`]:
//!
//! ```rust
//! use vidaplus::core::store::RecordStore;
//! use vidaplus::domain::{HospitalError, PatientDraft};
//!
//! let mut store = RecordStore::new();
//! let err = store
//!     .register_patient(PatientDraft {
//!         name: "Ana".to_string(),
//!         cpf: "111.111.111-11".to_string(),
//!         ..Default::default()
//!     })
//!     .unwrap_err();
//! assert!(matches!(err, HospitalError::Validation(_)));
//! ```
//!
//! ## Logging
//!
//! VidaPlus uses structured logging with the `tracing` crate; see
//! [`logging::init_logging`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
