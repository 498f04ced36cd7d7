//! Background runtime shutdown behavior

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use vidaplus::adapters::persistence::{FileStateStore, StateStore};
use vidaplus::core::runtime::{Runtime, RuntimeIntervals, SharedStore};
use vidaplus::core::store::RecordStore;
use vidaplus::domain::PatientDraft;

fn slow_intervals() -> RuntimeIntervals {
    // Long enough that only the shutdown path can save.
    RuntimeIntervals {
        autosave: Duration::from_secs(3600),
        notifications: Duration::from_secs(3600),
    }
}

#[tokio::test]
async fn shutdown_saves_work_done_after_the_last_tick() {
    let dir = tempfile::tempdir().unwrap();
    let file_store = FileStateStore::new(dir.path().join("state.json"));
    let state_store: Arc<dyn StateStore> = Arc::new(file_store.clone());

    let store: SharedStore = Arc::new(Mutex::new(RecordStore::new()));
    let runtime = Runtime::new(Arc::clone(&store), state_store, slow_intervals());

    let (tx, rx) = watch::channel(false);
    let handles = runtime.spawn(rx);

    // Mutate the store while the loops are idle between ticks.
    {
        let mut guard = store.lock().await;
        guard
            .register_patient(PatientDraft {
                name: "Ana".to_string(),
                cpf: "52998224725".to_string(),
                ..Default::default()
            })
            .unwrap();
    }

    tx.send(true).unwrap();
    for handle in handles {
        handle.await.unwrap();
    }

    let saved = file_store.load().await.unwrap().unwrap();
    assert_eq!(saved.patients.len(), 1);
    assert_eq!(saved.patients[0].name, "Ana");
}

#[tokio::test]
async fn both_loops_exit_promptly_on_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let state_store: Arc<dyn StateStore> =
        Arc::new(FileStateStore::new(dir.path().join("state.json")));
    let store: SharedStore = Arc::new(Mutex::new(RecordStore::new()));

    let runtime = Runtime::new(store, state_store, slow_intervals());
    let (tx, rx) = watch::channel(false);
    let handles = runtime.spawn(rx);

    tx.send(true).unwrap();
    let joined = tokio::time::timeout(Duration::from_secs(5), async {
        for handle in handles {
            handle.await.unwrap();
        }
    })
    .await;
    assert!(joined.is_ok(), "loops did not stop within the deadline");
}
