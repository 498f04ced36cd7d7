//! Command implementations
//!
//! Each command is a clap `Args` struct with an async `execute` that
//! returns a process exit code. The helpers here hold the load/save
//! plumbing shared by every state-touching command.

pub mod backup;
pub mod export_audit;
pub mod init;
pub mod report;
pub mod restore;
pub mod seed;
pub mod status;
pub mod watch;

use crate::adapters::persistence::{FileStateStore, StateStore};
use crate::config::VidaplusConfig;
use crate::core::store::RecordStore;

/// Loads the record store from the configured state file
///
/// A missing state file yields a fresh empty store; a present but
/// unreadable one is an error.
pub(crate) async fn load_store(config: &VidaplusConfig) -> anyhow::Result<RecordStore> {
    let file_store = FileStateStore::new(&config.storage.state_path);
    let store = match file_store.load().await? {
        Some(snapshot) => RecordStore::hydrate(snapshot)?,
        None => RecordStore::new(),
    };
    Ok(store)
}

/// Persists the record store to the configured state file
pub(crate) async fn save_store(config: &VidaplusConfig, store: &RecordStore) -> anyhow::Result<()> {
    let file_store = FileStateStore::new(&config.storage.state_path);
    file_store.save(&store.snapshot()).await?;
    Ok(())
}

/// Loads configuration for a command, mapping failure to exit code 2
pub(crate) fn load_command_config(config_path: &str) -> Result<VidaplusConfig, i32> {
    match crate::config::load_config_or_default(config_path) {
        Ok(config) => Ok(config),
        Err(e) => {
            println!("❌ Failed to load configuration");
            println!("   Error: {e}");
            Err(2)
        }
    }
}
