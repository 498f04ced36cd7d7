//! Patient domain model
//!
//! This module defines the Patient record and the draft type used when
//! registering or updating a patient through the record store.

use super::ids::PatientId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insurance plan label assigned when registration omits one
pub const DEFAULT_INSURANCE_PLAN: &str = "Particular";

/// Lifecycle status of a patient record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    /// Patient is under active care
    Active,
    /// Patient record is retained but inactive
    Inactive,
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientStatus::Active => write!(f, "Ativo"),
            PatientStatus::Inactive => write!(f, "Inativo"),
        }
    }
}

/// A registered patient
///
/// The CPF is stored normalized (digits only) and is unique across all
/// live patients; the record store enforces this at insert and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Store-issued identifier
    pub id: PatientId,

    /// Full name
    pub name: String,

    /// National identity number (CPF), digits only
    pub cpf: String,

    /// Birth date, when informed
    pub birth_date: Option<NaiveDate>,

    /// Contact phone
    pub phone: String,

    /// Contact e-mail
    pub email: String,

    /// Insurance plan label
    pub insurance_plan: String,

    /// When the record was created
    pub registered_at: DateTime<Utc>,

    /// Lifecycle status
    pub status: PatientStatus,

    /// Most recent consultation, if any
    pub last_visit: Option<DateTime<Utc>>,
}

impl Patient {
    /// CPF formatted for display: `XXX.XXX.XXX-XX`
    ///
    /// Returns the raw value unchanged if it is not 11 digits.
    pub fn formatted_cpf(&self) -> String {
        if self.cpf.len() == 11 && self.cpf.chars().all(|c| c.is_ascii_digit()) {
            format!(
                "{}.{}.{}-{}",
                &self.cpf[0..3],
                &self.cpf[3..6],
                &self.cpf[6..9],
                &self.cpf[9..11]
            )
        } else {
            self.cpf.clone()
        }
    }
}

/// Draft data for registering or updating a patient
///
/// Validation happens in the record store, not here; a draft carries the
/// raw form input as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientDraft {
    /// Full name (required)
    pub name: String,

    /// CPF as typed; punctuation is stripped during validation (required)
    pub cpf: String,

    /// Birth date
    pub birth_date: Option<NaiveDate>,

    /// Contact phone
    pub phone: String,

    /// Contact e-mail, shape-checked when non-empty
    pub email: String,

    /// Insurance plan label; empty falls back to [`DEFAULT_INSURANCE_PLAN`]
    pub insurance_plan: String,
}
