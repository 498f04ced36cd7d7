//! Snapshot persistence and backup restore behavior

use vidaplus::adapters::persistence::{FileStateStore, StateSnapshot, StateStore, SCHEMA_VERSION};
use vidaplus::core::store::RecordStore;
use vidaplus::domain::{AuditAction, PatientDraft};

fn seeded_store() -> RecordStore {
    let mut store = RecordStore::new();
    store.seed_demo_data().unwrap();
    store
}

#[tokio::test]
async fn snapshot_survives_a_disk_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let file_store = FileStateStore::new(dir.path().join("state.json"));

    let store = seeded_store();
    file_store.save(&store.snapshot()).await.unwrap();

    let loaded = file_store.load().await.unwrap().unwrap();
    assert_eq!(loaded.schema_version, SCHEMA_VERSION);
    assert_eq!(loaded.patients.len(), store.patients().len());
    assert_eq!(loaded.beds.len(), store.beds().len());
    assert_eq!(loaded.audit_entries.len(), store.audit().len());

    let hydrated = RecordStore::hydrate(loaded).unwrap();
    assert_eq!(hydrated.patients().len(), store.patients().len());
    // Routine hydration adds no audit entry.
    assert_eq!(hydrated.audit().len(), store.audit().len());
}

#[tokio::test]
async fn restore_records_the_event_and_resumes_ids() {
    let snapshot = seeded_store().snapshot();
    let audit_before = snapshot.audit_entries.len();

    let mut store = RecordStore::new();
    store.restore(snapshot).unwrap();

    assert_eq!(store.audit().len(), audit_before + 1);
    assert_eq!(
        store.audit().entries().last().unwrap().action,
        AuditAction::Restore
    );

    // New registrations never collide with restored ids.
    let highest = store
        .patients()
        .iter()
        .map(|p| p.id.value())
        .chain(store.professionals().iter().map(|p| p.id.value()))
        .chain(store.beds().iter().map(|b| b.id.value()))
        .max()
        .unwrap();
    let patient = store
        .register_patient(PatientDraft {
            name: "Novo Paciente".to_string(),
            cpf: "11144477735".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert!(patient.id.value() > highest);
}

#[test]
fn document_without_version_tag_is_rejected() {
    let mut value = serde_json::to_value(seeded_store().snapshot()).unwrap();
    value.as_object_mut().unwrap().remove("schema_version");

    let document = serde_json::to_string(&value).unwrap();
    assert!(StateSnapshot::from_json(&document).is_err());
}

#[test]
fn bad_backup_leaves_live_state_untouched() {
    let mut store = seeded_store();
    let patients_before = store.patients().len();
    let audit_before = store.audit().len();

    let mut snapshot = RecordStore::new().snapshot();
    snapshot.schema_version = "99.0".to_string();

    assert!(store.restore(snapshot).is_err());
    assert_eq!(store.patients().len(), patients_before);
    assert_eq!(store.audit().len(), audit_before);
}

#[tokio::test]
async fn backup_export_import_replaces_state() {
    let dir = tempfile::tempdir().unwrap();
    let backup_path = dir.path().join("backup.json");

    let original = seeded_store();
    FileStateStore::export_to(&original.snapshot(), &backup_path)
        .await
        .unwrap();

    // A diverged store is fully replaced by the imported backup.
    let mut diverged = RecordStore::new();
    diverged
        .register_patient(PatientDraft {
            name: "Paciente Temporário".to_string(),
            cpf: "11144477735".to_string(),
            ..Default::default()
        })
        .unwrap();

    let imported = FileStateStore::import_from(&backup_path).await.unwrap();
    diverged.restore(imported).unwrap();

    assert_eq!(diverged.patients().len(), original.patients().len());
    assert!(diverged
        .patients()
        .iter()
        .all(|p| p.name != "Paciente Temporário"));
}
