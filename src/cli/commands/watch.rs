//! Watch command implementation
//!
//! Keeps the process alive running the background autosave and
//! notification loops until a shutdown signal arrives.

use super::{load_command_config, load_store};
use crate::adapters::persistence::{FileStateStore, StateStore};
use crate::core::runtime::{Runtime, RuntimeIntervals, SharedStore};
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};

/// Arguments for the watch command
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seed demonstration data when the store is empty
    #[arg(long)]
    pub seed: bool,
}

impl WatchArgs {
    /// Execute the watch command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        let config = match load_command_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let mut record_store = load_store(&config).await?;
        if self.seed && record_store.is_empty() {
            record_store.seed_demo_data()?;
            println!("✅ Demonstration data seeded");
        }

        let store: SharedStore = Arc::new(Mutex::new(record_store));
        let state_store: Arc<dyn StateStore> =
            Arc::new(FileStateStore::new(&config.storage.state_path));

        let runtime = Runtime::new(
            Arc::clone(&store),
            state_store,
            RuntimeIntervals {
                autosave: Duration::from_secs(config.schedule.autosave_interval_secs),
                notifications: Duration::from_secs(config.schedule.notification_interval_secs),
            },
        );

        println!("👀 VidaPlus em execução (Ctrl+C para encerrar)");
        println!(
            "   Autosave a cada {}s, avisos a cada {}s",
            config.schedule.autosave_interval_secs, config.schedule.notification_interval_secs
        );

        let handles = runtime.spawn(shutdown);
        for handle in handles {
            handle.await?;
        }

        println!("✅ Encerrado, estado salvo");
        Ok(0)
    }
}
