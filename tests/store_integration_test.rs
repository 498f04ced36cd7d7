//! End-to-end record store behavior across entity kinds

use chrono::{Duration, Utc};
use vidaplus::core::store::RecordStore;
use vidaplus::domain::{
    AuditAction, BedDraft, BedStatus, BookingDraft, BookingStatus, ConsultationKind, Facility,
    HospitalError, PatientDraft, ProfessionalDraft, Sector, Specialty,
};

fn patient_draft(name: &str, cpf: &str) -> PatientDraft {
    PatientDraft {
        name: name.to_string(),
        cpf: cpf.to_string(),
        ..Default::default()
    }
}

fn physician_draft(name: &str, registry: &str) -> ProfessionalDraft {
    ProfessionalDraft {
        name: name.to_string(),
        registry: registry.to_string(),
        specialty: Specialty::Cardiology,
        phone: String::new(),
        email: String::new(),
        facility: Facility::CentralHospital,
    }
}

#[test]
fn seeded_store_passes_through_every_registry() {
    let mut store = RecordStore::new();
    store.seed_demo_data().unwrap();

    assert_eq!(store.patients().len(), 2);
    assert_eq!(store.professionals().len(), 1);
    assert_eq!(store.beds().len(), 2);

    // Seeding is idempotent on a non-empty store.
    store.seed_demo_data().unwrap();
    assert_eq!(store.patients().len(), 2);

    // Every seeded mutation left an audit entry plus the startup event.
    assert!(store.audit().len() >= 6);
}

#[test]
fn ids_are_unique_across_entity_kinds() {
    let mut store = RecordStore::new();
    let patient = store
        .register_patient(patient_draft("Ana", "52998224725"))
        .unwrap();
    let professional = store
        .register_professional(physician_draft("Dr. Bia", "CRM9"))
        .unwrap();
    let bed = store
        .register_bed(BedDraft {
            number: "201".to_string(),
            sector: Sector::Icu,
            status: BedStatus::Available,
            occupant: None,
        })
        .unwrap();

    let mut values = vec![
        patient.id.value(),
        professional.id.value(),
        bed.id.value(),
    ];
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), 3);
}

#[test]
fn duplicate_cpf_is_rejected_even_with_different_formatting() {
    let mut store = RecordStore::new();
    store
        .register_patient(patient_draft("Ana", "529.982.247-25"))
        .unwrap();

    let err = store
        .register_patient(patient_draft("Outra Ana", "52998224725"))
        .unwrap_err();
    assert!(matches!(err, HospitalError::Conflict(_)));
    assert_eq!(store.patients().len(), 1);
}

#[test]
fn patient_delete_is_blocked_until_bookings_go_away() {
    let mut store = RecordStore::new();
    let patient = store
        .register_patient(patient_draft("Ana", "52998224725"))
        .unwrap();
    let physician = store
        .register_professional(physician_draft("Dr. Bia", "CRM9"))
        .unwrap();
    let booking = store
        .schedule_booking(BookingDraft {
            patient_id: patient.id,
            professional_id: physician.id,
            scheduled_for: Utc::now() + Duration::days(1),
            kind: ConsultationKind::Consultation,
            notes: String::new(),
        })
        .unwrap();

    let err = store.remove_patient(patient.id).unwrap_err();
    assert!(matches!(err, HospitalError::Conflict(_)));
    assert!(store.patient(patient.id).is_some());

    store.cancel_booking(booking.id).unwrap();
    store.remove_patient(patient.id).unwrap();
    assert!(store.patient(patient.id).is_none());
}

#[test]
fn booking_walks_its_full_lifecycle() {
    let mut store = RecordStore::new();
    let patient = store
        .register_patient(patient_draft("Ana", "52998224725"))
        .unwrap();
    let physician = store
        .register_professional(physician_draft("Dr. Bia", "CRM9"))
        .unwrap();
    let booking = store
        .schedule_booking(BookingDraft {
            patient_id: patient.id,
            professional_id: physician.id,
            scheduled_for: Utc::now(),
            kind: ConsultationKind::Emergency,
            notes: "urgente".to_string(),
        })
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Scheduled);

    // Completing a booking that has not started is a conflict.
    assert!(matches!(
        store.complete_booking(booking.id).unwrap_err(),
        HospitalError::Conflict(_)
    ));

    let started = store.start_booking(booking.id).unwrap();
    assert_eq!(started.status, BookingStatus::InProgress);

    let completed = store.complete_booking(booking.id).unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    // A completed consultation can no longer be cancelled.
    assert!(matches!(
        store.cancel_booking(booking.id).unwrap_err(),
        HospitalError::Conflict(_)
    ));
}

#[test]
fn nurses_cannot_hold_telemedicine_consultations() {
    let mut store = RecordStore::new();
    let patient = store
        .register_patient(patient_draft("Ana", "52998224725"))
        .unwrap();
    let nurse = store
        .register_professional(ProfessionalDraft {
            specialty: Specialty::Nursing,
            ..physician_draft("Enf. Carla", "COREN7")
        })
        .unwrap();

    let err = store
        .schedule_booking(BookingDraft {
            patient_id: patient.id,
            professional_id: nurse.id,
            scheduled_for: Utc::now(),
            kind: ConsultationKind::Consultation,
            notes: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, HospitalError::Validation(_)));
    assert!(store.bookings().is_empty());
}

#[test]
fn bed_cycle_wraps_around_and_audits_each_step() {
    let mut store = RecordStore::new();
    let bed = store
        .register_bed(BedDraft {
            number: "301".to_string(),
            sector: Sector::Maternity,
            status: BedStatus::Available,
            occupant: None,
        })
        .unwrap();
    let audit_before = store.audit().len();

    assert_eq!(store.advance_bed_status(bed.id).unwrap(), BedStatus::Occupied);
    assert_eq!(
        store.advance_bed_status(bed.id).unwrap(),
        BedStatus::Maintenance
    );
    assert_eq!(
        store.advance_bed_status(bed.id).unwrap(),
        BedStatus::Available
    );
    assert_eq!(store.audit().len(), audit_before + 3);
    assert_eq!(
        store.audit().entries().last().unwrap().action,
        AuditAction::StatusChange
    );
}

#[test]
fn operations_on_unknown_ids_surface_not_found() {
    let mut store = RecordStore::new();
    store.seed_demo_data().unwrap();
    let bogus = store.patients().last().unwrap().id;

    let err = store
        .update_patient(
            vidaplus::domain::PatientId::new(bogus.value() + 1000),
            patient_draft("Ninguém", "52998224725"),
        )
        .unwrap_err();
    assert!(matches!(err, HospitalError::NotFound(_)));
}

#[test]
fn search_patients_matches_name_cpf_and_email() {
    let mut store = RecordStore::new();
    store
        .register_patient(PatientDraft {
            email: "maria@example.com".to_string(),
            ..patient_draft("Maria da Silva", "52998224725")
        })
        .unwrap();
    store
        .register_patient(patient_draft("João Santos", "12345678909"))
        .unwrap();

    assert_eq!(store.search_patients("maria").len(), 1);
    assert_eq!(store.search_patients("123456").len(), 1);
    assert_eq!(store.search_patients("@example").len(), 1);
    assert_eq!(store.search_patients("").len(), 2);
    assert!(store.search_patients("zzz").is_empty());
}
