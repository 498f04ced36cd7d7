//! Demonstration data seeding
//!
//! When the persistence gateway has no saved state, the store is seeded
//! with a small demonstration data set so the system starts non-empty.
//! Seeding goes through the normal registration operations, so every
//! invariant (CPF checksum, uniqueness) holds for seeded records too.

use crate::core::store::records::RecordStore;
use crate::domain::{
    AuditAction, BedDraft, BedStatus, Facility, PatientDraft, ProfessionalDraft, Result, Sector,
    Specialty,
};
use chrono::NaiveDate;

impl RecordStore {
    /// Seeds the demonstration data set into an empty store
    ///
    /// A no-op when any collection already has records. Appends one audit
    /// entry recording the initialization.
    ///
    /// # Errors
    ///
    /// Propagates registration errors; with an empty store the fixed
    /// demonstration records always pass validation.
    pub fn seed_demo_data(&mut self) -> Result<()> {
        if !self.is_empty() {
            return Ok(());
        }

        let maria = self.register_patient(PatientDraft {
            name: "Maria da Silva".to_string(),
            cpf: "529.982.247-25".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1980, 5, 15),
            phone: "(11) 98765-4321".to_string(),
            email: "maria@email.com".to_string(),
            insurance_plan: "Unimed".to_string(),
        })?;

        self.register_patient(PatientDraft {
            name: "João Santos".to_string(),
            cpf: "123.456.789-09".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1975, 12, 3),
            phone: "(11) 91234-5678".to_string(),
            email: "joao@email.com".to_string(),
            insurance_plan: "SUS".to_string(),
        })?;

        self.register_professional(ProfessionalDraft {
            name: "Dr. Carlos Oliveira".to_string(),
            registry: "CRM12345".to_string(),
            specialty: Specialty::Cardiology,
            phone: "(11) 99999-8888".to_string(),
            email: "carlos@hospital.com".to_string(),
            facility: Facility::CentralHospital,
        })?;

        self.register_bed(BedDraft {
            number: "101".to_string(),
            sector: Sector::Ward,
            status: BedStatus::Available,
            occupant: None,
        })?;

        self.register_bed(BedDraft {
            number: "102".to_string(),
            sector: Sector::Ward,
            status: BedStatus::Occupied,
            occupant: Some(maria.name),
        })?;

        self.record_event(AuditAction::System, "Sistema VidaPlus inicializado");
        tracing::info!("demo data seeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_empty_store() {
        let mut store = RecordStore::new();
        store.seed_demo_data().unwrap();

        assert_eq!(store.patients().len(), 2);
        assert_eq!(store.professionals().len(), 1);
        assert_eq!(store.beds().len(), 2);
        assert_eq!(store.beds()[1].status, BedStatus::Occupied);
        assert_eq!(store.beds()[1].occupant.as_deref(), Some("Maria da Silva"));

        // Last audit entry is the initialization record.
        let last = store.audit().entries().last().unwrap();
        assert_eq!(last.action, AuditAction::System);
    }

    #[test]
    fn test_seed_is_a_noop_on_populated_store() {
        let mut store = RecordStore::new();
        store.seed_demo_data().unwrap();
        let audit_len = store.audit().len();

        store.seed_demo_data().unwrap();
        assert_eq!(store.patients().len(), 2);
        assert_eq!(store.audit().len(), audit_len);
    }

    #[test]
    fn test_seeded_cpfs_are_checksum_valid() {
        let mut store = RecordStore::new();
        store.seed_demo_data().unwrap();
        for patient in store.patients() {
            assert!(crate::core::validation::validate_cpf(&patient.cpf));
        }
    }
}
