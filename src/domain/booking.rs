//! Telemedicine booking domain model
//!
//! Bookings reference patients and professionals by identifier; display
//! names are resolved at read time through the record store rather than
//! denormalized into the booking itself.

use super::ids::{BookingId, PatientId, ProfessionalId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of telemedicine consultation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationKind {
    Consultation,
    FollowUp,
    Emergency,
}

impl ConsultationKind {
    /// The three fixed kinds, in report order
    pub const ALL: [ConsultationKind; 3] = [
        ConsultationKind::Consultation,
        ConsultationKind::FollowUp,
        ConsultationKind::Emergency,
    ];
}

impl fmt::Display for ConsultationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConsultationKind::Consultation => "Consulta",
            ConsultationKind::FollowUp => "Retorno",
            ConsultationKind::Emergency => "Emergência",
        };
        write!(f, "{label}")
    }
}

/// Telemedicine booking lifecycle status
///
/// Allowed transitions: Scheduled → InProgress → Completed. Cancellation
/// removes the booking instead of parking it in a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Scheduled => "Agendada",
            BookingStatus::InProgress => "Em andamento",
            BookingStatus::Completed => "Realizada",
        };
        write!(f, "{label}")
    }
}

/// A telemedicine booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemedicineBooking {
    /// Store-issued identifier
    pub id: BookingId,

    /// Patient under consultation
    pub patient_id: PatientId,

    /// Attending physician; must hold a physician specialty
    pub professional_id: ProfessionalId,

    /// When the consultation takes place
    pub scheduled_for: DateTime<Utc>,

    /// Consultation kind
    pub kind: ConsultationKind,

    /// Free-text notes from the scheduling form
    pub notes: String,

    /// Lifecycle status
    pub status: BookingStatus,

    /// When the booking was created
    pub booked_at: DateTime<Utc>,
}

/// Draft data for scheduling a telemedicine booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    /// Patient under consultation (required)
    pub patient_id: PatientId,

    /// Attending physician (required)
    pub professional_id: ProfessionalId,

    /// When the consultation takes place (required)
    pub scheduled_for: DateTime<Utc>,

    /// Consultation kind
    pub kind: ConsultationKind,

    /// Free-text notes
    pub notes: String,
}
