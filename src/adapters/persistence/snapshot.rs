//! Versioned state snapshot document
//!
//! A snapshot is the full record-store state: the five collections, the
//! audit log, a schema-version tag, the save timestamp and the id-sequence
//! watermark. The persistence gateway saves and loads whole snapshots; it
//! never sees individual records.

use crate::domain::{
    Appointment, AuditLogEntry, Bed, HospitalError, Patient, Professional, Result,
    TelemedicineBooking,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version written into every snapshot
pub const SCHEMA_VERSION: &str = "1.0";

/// Point-in-time capture of the full record-store state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Document schema version tag
    pub schema_version: String,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// Id-sequence watermark; restored stores issue ids above this
    pub next_id: u64,

    /// Patient collection
    pub patients: Vec<Patient>,

    /// Professional collection
    pub professionals: Vec<Professional>,

    /// Bed collection
    pub beds: Vec<Bed>,

    /// Appointment collection
    pub appointments: Vec<Appointment>,

    /// Telemedicine booking collection
    pub bookings: Vec<TelemedicineBooking>,

    /// Audit log entries
    pub audit_entries: Vec<AuditLogEntry>,
}

impl StateSnapshot {
    /// Parses a snapshot from its JSON document form
    ///
    /// A document missing the version tag, the save timestamp or any
    /// collection fails here, before any state is touched.
    ///
    /// # Errors
    ///
    /// Returns `HospitalError::Restore` describing the malformation.
    pub fn from_json(document: &str) -> Result<Self> {
        let snapshot: StateSnapshot = serde_json::from_str(document).map_err(|e| {
            HospitalError::Restore(format!("Documento de backup inválido: {e}"))
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serializes the snapshot as a pretty-printed JSON document
    ///
    /// # Errors
    ///
    /// Returns `HospitalError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the version tag
    ///
    /// # Errors
    ///
    /// Returns `HospitalError::Restore` when the tag is empty or names a
    /// schema this build does not understand.
    pub fn validate(&self) -> Result<()> {
        if self.schema_version.trim().is_empty() {
            return Err(HospitalError::Restore(
                "Documento de backup sem versão".to_string(),
            ));
        }
        if self.schema_version != SCHEMA_VERSION {
            return Err(HospitalError::Restore(format!(
                "Versão de backup não suportada: {}",
                self.schema_version
            )));
        }
        Ok(())
    }

    /// An empty snapshot taken now, used by tests and seeding paths
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            saved_at: Utc::now(),
            next_id: 1,
            patients: Vec::new(),
            professionals: Vec::new(),
            beds: Vec::new(),
            appointments: Vec::new(),
            bookings: Vec::new(),
            audit_entries: Vec::new(),
        }
    }
}
