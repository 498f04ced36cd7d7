//! Domain identifier types
//!
//! This module provides newtype wrappers for record identifiers. Each type
//! wraps a `u64` issued by the record store's monotonic sequence, so two
//! different entity kinds can never be confused at a call site.
//!
//! Identifiers are never derived from the wall clock; uniqueness holds by
//! construction under all timing conditions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use vidaplus::domain::ids::PatientId;
///
/// let id = PatientId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatientId(u64);

impl PatientId {
    /// Creates a new PatientId from a raw sequence value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Professional identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfessionalId(u64);

impl ProfessionalId {
    /// Creates a new ProfessionalId from a raw sequence value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProfessionalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bed identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BedId(u64);

impl BedId {
    /// Creates a new BedId from a raw sequence value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appointment identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppointmentId(u64);

impl AppointmentId {
    /// Creates a new AppointmentId from a raw sequence value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Telemedicine booking identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(u64);

impl BookingId {
    /// Creates a new BookingId from a raw sequence value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audit log entry identifier newtype wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AuditEntryId(u64);

impl AuditEntryId {
    /// Creates a new AuditEntryId from a raw sequence value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AuditEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
