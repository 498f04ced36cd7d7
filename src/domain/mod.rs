//! Domain models and types for VidaPlus.
//!
//! This module contains the core domain models, types and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PatientId`], [`ProfessionalId`],
//!   [`BedId`], [`AppointmentId`], [`BookingId`], [`AuditEntryId`])
//! - **Entity models** ([`Patient`], [`Professional`], [`Bed`],
//!   [`Appointment`], [`TelemedicineBooking`], [`AuditLogEntry`])
//! - **Error types** ([`HospitalError`], [`IntegrationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so different entity kinds cannot be
//! mixed at a call site:
//!
//! ```rust
//! use vidaplus::domain::{PatientId, BedId};
//!
//! let patient = PatientId::new(1);
//! let bed = BedId::new(1);
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: PatientId = bed;  // Compile error!
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`] with [`HospitalError`]:
//!
//! ```rust
//! use vidaplus::domain::{HospitalError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(HospitalError::Validation("CPF inválido".to_string()))
//! }
//! ```

pub mod appointment;
pub mod audit;
pub mod bed;
pub mod booking;
pub mod errors;
pub mod ids;
pub mod patient;
pub mod professional;
pub mod result;

// Re-export commonly used types for convenience
pub use appointment::{Appointment, AppointmentStatus};
pub use audit::{AuditAction, AuditLogEntry, PLACEHOLDER_ACTOR, PLACEHOLDER_ORIGIN};
pub use bed::{Bed, BedDraft, BedStatus, Sector};
pub use booking::{BookingDraft, BookingStatus, ConsultationKind, TelemedicineBooking};
pub use errors::{HospitalError, IntegrationError};
pub use ids::{AppointmentId, AuditEntryId, BedId, BookingId, PatientId, ProfessionalId};
pub use patient::{Patient, PatientDraft, PatientStatus, DEFAULT_INSURANCE_PLAN};
pub use professional::{Facility, Professional, ProfessionalDraft, ProfessionalStatus, Specialty};
pub use result::Result;
