//! Audit log entry domain model
//!
//! Entries record who did what and when. There is no real session
//! identity in this system, so the actor and origin are fixed
//! placeholders stamped by the audit log itself.

use super::ids::AuditEntryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder actor label; no real session identity exists
pub const PLACEHOLDER_ACTOR: &str = "Sistema";

/// Placeholder origin address; no real client address exists
pub const PLACEHOLDER_ORIGIN: &str = "127.0.0.1";

/// Category of an audited action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// System lifecycle events (startup, seeding)
    System,
    /// Record created
    Registration,
    /// Record updated in place
    Update,
    /// Record removed
    Deletion,
    /// Appointment scheduled
    Scheduling,
    /// Telemedicine booking events (scheduled, started, completed)
    Telemedicine,
    /// Booking cancelled
    Cancellation,
    /// Bed status advanced
    StatusChange,
    /// State snapshot exported
    Backup,
    /// State wholesale-replaced from a snapshot
    Restore,
    /// Audit report exported
    Export,
    /// View/navigation event reported by the presentation layer
    Navigation,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuditAction::System => "sistema",
            AuditAction::Registration => "cadastro",
            AuditAction::Update => "atualizacao",
            AuditAction::Deletion => "exclusao",
            AuditAction::Scheduling => "agendamento",
            AuditAction::Telemedicine => "telemedicina",
            AuditAction::Cancellation => "cancelamento",
            AuditAction::StatusChange => "alteracao",
            AuditAction::Backup => "backup",
            AuditAction::Restore => "restauracao",
            AuditAction::Export => "export",
            AuditAction::Navigation => "navegacao",
        };
        write!(f, "{label}")
    }
}

/// One append-only audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Log-issued identifier
    pub id: AuditEntryId,

    /// When the action happened
    pub timestamp: DateTime<Utc>,

    /// Acting user label (always [`PLACEHOLDER_ACTOR`])
    pub actor: String,

    /// Action category
    pub action: AuditAction,

    /// Free-text detail
    pub detail: String,

    /// Originating address label (always [`PLACEHOLDER_ORIGIN`])
    pub origin: String,
}
