//! Bed domain model
//!
//! Hospital beds grouped by sector. The bed number is the unique key.
//! Status moves through a fixed three-step cycle; see
//! [`BedStatus::next_in_cycle`].

use super::ids::BedId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hospital sector a bed belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Ward,
    Icu,
    Pediatrics,
    Maternity,
}

impl Sector {
    /// The four fixed sectors, in report order
    pub const ALL: [Sector; 4] = [
        Sector::Ward,
        Sector::Icu,
        Sector::Pediatrics,
        Sector::Maternity,
    ];
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sector::Ward => "Enfermaria",
            Sector::Icu => "UTI",
            Sector::Pediatrics => "Pediatria",
            Sector::Maternity => "Maternidade",
        };
        write!(f, "{label}")
    }
}

/// Bed occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedStatus {
    Available,
    Occupied,
    Maintenance,
}

impl BedStatus {
    /// Advances one step in the fixed cycle:
    /// Available → Occupied → Maintenance → Available.
    ///
    /// Three advances always return to the starting status.
    pub fn next_in_cycle(&self) -> BedStatus {
        match self {
            BedStatus::Available => BedStatus::Occupied,
            BedStatus::Occupied => BedStatus::Maintenance,
            BedStatus::Maintenance => BedStatus::Available,
        }
    }
}

impl fmt::Display for BedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BedStatus::Available => "Disponível",
            BedStatus::Occupied => "Ocupado",
            BedStatus::Maintenance => "Manutenção",
        };
        write!(f, "{label}")
    }
}

/// A hospital bed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bed {
    /// Store-issued identifier
    pub id: BedId,

    /// Bed number, unique across all beds
    pub number: String,

    /// Sector
    pub sector: Sector,

    /// Occupancy status
    pub status: BedStatus,

    /// Display name of the current occupant. Free text, not a patient
    /// reference; kept as entered at admission.
    pub occupant: Option<String>,

    /// When the record was created
    pub registered_at: DateTime<Utc>,
}

/// Draft data for registering a bed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedDraft {
    /// Bed number (required)
    pub number: String,

    /// Sector
    pub sector: Sector,

    /// Initial status
    pub status: BedStatus,

    /// Occupant name, when admitted with one
    pub occupant: Option<String>,
}
