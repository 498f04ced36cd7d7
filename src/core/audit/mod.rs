//! Append-only audit log
//!
//! Every successful mutating operation appends exactly one entry here.
//! The log never fails, never deletes entries and only grows during a
//! session; the single exception is a full-state restore, which replaces
//! it wholesale with the restored entries.
//!
//! The exported report keeps the legacy CSV contract:
//! `Data/Hora,Usuário,Ação,Detalhes,IP` with `dd/mm/yyyy HH:MM:SS`
//! timestamps and only the free-text detail column quoted.

use crate::domain::audit::{AuditAction, AuditLogEntry, PLACEHOLDER_ACTOR, PLACEHOLDER_ORIGIN};
use crate::domain::ids::AuditEntryId;
use chrono::{NaiveDate, Utc};

/// Header row of the exported audit report
pub const CSV_HEADER: &str = "Data/Hora,Usuário,Ação,Detalhes,IP";

/// Append-only audit event recorder
///
/// Owns its own monotonic entry counter, independent from the record
/// store's sequence, so it stays self-contained.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditLogEntry>,
    next_id: u64,
}

/// Search filter for audit entries
///
/// All fields are optional; an empty filter matches everything. The end
/// date is inclusive through the last second of that day.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Entries at or after the start of this day
    pub from: Option<NaiveDate>,
    /// Entries up to the end of this day
    pub to: Option<NaiveDate>,
    /// Exact action category
    pub action: Option<AuditAction>,
    /// Case-insensitive substring of the actor label
    pub actor_contains: Option<String>,
}

impl AuditLog {
    /// Creates an empty audit log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a log from restored entries
    ///
    /// The internal counter resumes above the highest restored id so new
    /// appends never collide with restored ones.
    pub fn from_entries(entries: Vec<AuditLogEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id.value()).max().unwrap_or(0) + 1;
        Self { entries, next_id }
    }

    /// Appends one entry with the fixed placeholder actor and origin
    ///
    /// Never fails. Returns a reference to the appended entry.
    pub fn append(&mut self, action: AuditAction, detail: impl Into<String>) -> &AuditLogEntry {
        let entry = AuditLogEntry {
            id: AuditEntryId::new(self.next_id),
            timestamp: Utc::now(),
            actor: PLACEHOLDER_ACTOR.to_string(),
            action,
            detail: detail.into(),
            origin: PLACEHOLDER_ORIGIN.to_string(),
        };
        self.next_id += 1;
        self.entries.push(entry);
        self.entries.last().expect("entry was just pushed")
    }

    /// All entries in append order
    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching the filter, in append order
    pub fn search(&self, filter: &AuditFilter) -> Vec<&AuditLogEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                if let Some(from) = filter.from {
                    if entry.timestamp.date_naive() < from {
                        return false;
                    }
                }
                if let Some(to) = filter.to {
                    if entry.timestamp.date_naive() > to {
                        return false;
                    }
                }
                if let Some(action) = filter.action {
                    if entry.action != action {
                        return false;
                    }
                }
                if let Some(actor) = &filter.actor_contains {
                    if !entry
                        .actor
                        .to_lowercase()
                        .contains(&actor.to_lowercase())
                    {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    /// Renders the audit report as CSV
    ///
    /// One row per entry; only the detail column is double-quoted, with
    /// embedded quotes doubled.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for entry in &self.entries {
            let detail = entry.detail.replace('"', "\"\"");
            out.push_str(&format!(
                "{},{},{},\"{}\",{}\n",
                entry.timestamp.format("%d/%m/%Y %H:%M:%S"),
                entry.actor,
                entry.action,
                detail,
                entry.origin
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_grows_log_and_stamps_placeholders() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Registration, "Paciente cadastrado: Ana");
        log.append(AuditAction::Deletion, "Paciente excluído: Ana");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].actor, PLACEHOLDER_ACTOR);
        assert_eq!(log.entries()[0].origin, PLACEHOLDER_ORIGIN);
        assert!(log.entries()[0].id < log.entries()[1].id);
    }

    #[test]
    fn test_from_entries_resumes_counter() {
        let mut log = AuditLog::new();
        log.append(AuditAction::System, "primeiro");
        log.append(AuditAction::System, "segundo");

        let mut restored = AuditLog::from_entries(log.entries().to_vec());
        let entry = restored.append(AuditAction::System, "terceiro");
        assert_eq!(entry.id.value(), 3);
    }

    #[test]
    fn test_search_by_action() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Registration, "a");
        log.append(AuditAction::Deletion, "b");
        log.append(AuditAction::Registration, "c");

        let filter = AuditFilter {
            action: Some(AuditAction::Registration),
            ..Default::default()
        };
        let hits = log.search(&filter);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.action == AuditAction::Registration));
    }

    #[test]
    fn test_search_by_actor_substring_is_case_insensitive() {
        let mut log = AuditLog::new();
        log.append(AuditAction::System, "a");

        let filter = AuditFilter {
            actor_contains: Some("sist".to_string()),
            ..Default::default()
        };
        assert_eq!(log.search(&filter).len(), 1);

        let filter = AuditFilter {
            actor_contains: Some("ninguem".to_string()),
            ..Default::default()
        };
        assert!(log.search(&filter).is_empty());
    }

    #[test]
    fn test_search_date_range_is_inclusive() {
        let mut log = AuditLog::new();
        log.append(AuditAction::System, "hoje");
        let today = Utc::now().date_naive();

        let filter = AuditFilter {
            from: Some(today),
            to: Some(today),
            ..Default::default()
        };
        assert_eq!(log.search(&filter).len(), 1);
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Registration, "Paciente \"Ana\" cadastrado");

        let csv = log.to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));

        let row = lines.next().unwrap();
        assert!(row.contains(",Sistema,cadastro,"));
        assert!(row.contains("\"Paciente \"\"Ana\"\" cadastrado\""));
        assert!(row.ends_with(",127.0.0.1"));
    }

    #[test]
    fn test_csv_timestamp_format() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Export, "Relatório exportado");

        let csv = log.to_csv();
        let row = csv.lines().nth(1).unwrap();
        let timestamp = row.split(',').next().unwrap();
        // dd/mm/yyyy HH:MM:SS
        assert_eq!(timestamp.len(), 19);
        assert_eq!(&timestamp[2..3], "/");
        assert_eq!(&timestamp[5..6], "/");
        assert_eq!(&timestamp[10..11], " ");
    }
}
