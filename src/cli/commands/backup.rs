//! Backup command implementation
//!
//! Exports the current state as a standalone snapshot document.

use super::{load_command_config, load_store, save_store};
use crate::adapters::persistence::FileStateStore;
use crate::domain::AuditAction;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the backup command
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Backup file path (defaults to a timestamped file in the
    /// configured backup directory)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl BackupArgs {
    /// Execute the backup command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_command_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let mut store = load_store(&config).await?;

        let output: PathBuf = match &self.output {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&config.storage.backup_dir).join(format!(
                "vidaplus_backup_{}.json",
                Local::now().format("%Y%m%d_%H%M%S")
            )),
        };

        store.record_event(
            AuditAction::Backup,
            format!("Backup exportado: {}", output.display()),
        );
        let snapshot = store.snapshot();
        FileStateStore::export_to(&snapshot, &output).await?;
        save_store(&config, &store).await?;

        println!("✅ Backup criado: {}", output.display());
        println!(
            "   {} paciente(s), {} profissional(is), {} leito(s)",
            snapshot.patients.len(),
            snapshot.professionals.len(),
            snapshot.beds.len()
        );
        Ok(0)
    }
}
