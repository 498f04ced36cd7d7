//! Background runtime
//!
//! Two periodic loops over a shared record store: a state autosave and a
//! pending-notification scan. Both run on `tokio` intervals and stop
//! when the shutdown watch channel flips, so the process can drain
//! cleanly on Ctrl+C. Snapshotting holds the store lock only long
//! enough to clone a consistent point-in-time view.

use crate::adapters::persistence::StateStore;
use crate::core::reporting::pending_notifications;
use crate::core::store::RecordStore;
use crate::domain::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

/// Shared handle to the live record store
pub type SharedStore = Arc<Mutex<RecordStore>>;

/// Interval settings for the background loops
#[derive(Debug, Clone, Copy)]
pub struct RuntimeIntervals {
    pub autosave: Duration,
    pub notifications: Duration,
}

impl Default for RuntimeIntervals {
    fn default() -> Self {
        Self {
            autosave: Duration::from_secs(30),
            notifications: Duration::from_secs(60),
        }
    }
}

/// Background task driver
pub struct Runtime {
    store: SharedStore,
    state_store: Arc<dyn StateStore>,
    intervals: RuntimeIntervals,
}

impl Runtime {
    pub fn new(
        store: SharedStore,
        state_store: Arc<dyn StateStore>,
        intervals: RuntimeIntervals,
    ) -> Self {
        Self {
            store,
            state_store,
            intervals,
        }
    }

    /// Spawns both loops and returns their join handles
    ///
    /// Each loop ticks on its own interval and exits when `shutdown`
    /// observes `true`. The autosave loop writes a final snapshot on the
    /// way out so nothing recorded between the last tick and shutdown is
    /// lost.
    pub fn spawn(&self, shutdown: watch::Receiver<bool>) -> Vec<JoinHandle<()>> {
        let autosave = tokio::spawn(autosave_loop(
            Arc::clone(&self.store),
            Arc::clone(&self.state_store),
            self.intervals.autosave,
            shutdown.clone(),
        ));
        let notifications = tokio::spawn(notification_loop(
            Arc::clone(&self.store),
            self.intervals.notifications,
            shutdown,
        ));
        vec![autosave, notifications]
    }
}

/// Captures a snapshot under the lock and persists it
pub async fn save_state(store: &SharedStore, state_store: &Arc<dyn StateStore>) -> Result<()> {
    let snapshot = {
        let guard = store.lock().await;
        guard.snapshot()
    };
    state_store.save(&snapshot).await
}

async fn autosave_loop(
    store: SharedStore,
    state_store: Arc<dyn StateStore>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    // The first tick fires immediately; skip it so a fresh start doesn't
    // save before anything happened.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(e) = save_state(&store, &state_store).await {
                    tracing::error!(error = %e, "autosave failed");
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    if let Err(e) = save_state(&store, &state_store).await {
                        tracing::error!(error = %e, "final save on shutdown failed");
                    } else {
                        tracing::info!("final state snapshot saved");
                    }
                    break;
                }
            }
        }
    }
}

async fn notification_loop(
    store: SharedStore,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let pending = {
                    let guard = store.lock().await;
                    pending_notifications(&guard, Utc::now())
                };
                for notification in &pending {
                    tracing::warn!(
                        kind = %notification.kind,
                        count = notification.count,
                        "{}", notification.message
                    );
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    break;
                }
            }
        }
    }
}
