//! Professional domain model
//!
//! Health professionals: physicians, nursing staff and technicians. The
//! registry number (CRM/COREN style) is the unique key for this entity.

use super::ids::ProfessionalId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Professional specialty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    /// General clinical practice
    GeneralPractice,
    Cardiology,
    Pediatrics,
    Gynecology,
    Orthopedics,
    Nursing,
    Technician,
}

impl Specialty {
    /// Whether this specialty can hold telemedicine consultations
    ///
    /// Nursing and technical staff are listed in the roster but are not
    /// offered as telemedicine physicians.
    pub fn is_physician(&self) -> bool {
        !matches!(self, Specialty::Nursing | Specialty::Technician)
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Specialty::GeneralPractice => "Clínico Geral",
            Specialty::Cardiology => "Cardiologia",
            Specialty::Pediatrics => "Pediatria",
            Specialty::Gynecology => "Ginecologia",
            Specialty::Orthopedics => "Ortopedia",
            Specialty::Nursing => "Enfermagem",
            Specialty::Technician => "Técnico",
        };
        write!(f, "{label}")
    }
}

/// Facility a professional is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facility {
    CentralHospital,
    NorthClinic,
    SouthClinic,
    Laboratory,
    HomeCare,
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Facility::CentralHospital => "Hospital Central",
            Facility::NorthClinic => "Clínica Norte",
            Facility::SouthClinic => "Clínica Sul",
            Facility::Laboratory => "Laboratório",
            Facility::HomeCare => "Home Care",
        };
        write!(f, "{label}")
    }
}

/// Lifecycle status of a professional record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionalStatus {
    Active,
    Inactive,
}

impl fmt::Display for ProfessionalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfessionalStatus::Active => write!(f, "Ativo"),
            ProfessionalStatus::Inactive => write!(f, "Inativo"),
        }
    }
}

/// A registered health professional
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    /// Store-issued identifier
    pub id: ProfessionalId,

    /// Full name
    pub name: String,

    /// License/registry number, unique across all professionals
    pub registry: String,

    /// Specialty
    pub specialty: Specialty,

    /// Contact phone
    pub phone: String,

    /// Contact e-mail
    pub email: String,

    /// Assigned facility
    pub facility: Facility,

    /// When the record was created
    pub registered_at: DateTime<Utc>,

    /// Lifecycle status
    pub status: ProfessionalStatus,
}

/// Draft data for registering or updating a professional
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalDraft {
    /// Full name (required)
    pub name: String,

    /// Registry number (required)
    pub registry: String,

    /// Specialty
    pub specialty: Specialty,

    /// Contact phone
    pub phone: String,

    /// Contact e-mail, shape-checked when non-empty
    pub email: String,

    /// Assigned facility
    pub facility: Facility,
}
