//! Appointment domain model
//!
//! Basic in-person scheduling record. Telemedicine bookings are a separate
//! entity with their own lifecycle; see [`crate::domain::booking`].

use super::ids::{AppointmentId, PatientId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Agendada"),
        }
    }
}

/// A scheduled in-person appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-issued identifier
    pub id: AppointmentId,

    /// The patient this appointment belongs to; must exist at scheduling
    pub patient_id: PatientId,

    /// When the appointment takes place
    pub scheduled_for: DateTime<Utc>,

    /// Kind label (free text, e.g. "Consulta")
    pub kind: String,

    /// Lifecycle status
    pub status: AppointmentStatus,
}
