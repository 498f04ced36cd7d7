//! Restore command implementation
//!
//! Replaces the current state from a backup file. The document is
//! validated before anything is overwritten; a bad backup leaves the
//! live state untouched.

use super::{load_command_config, load_store, save_store};
use crate::adapters::persistence::FileStateStore;
use clap::Args;

/// Arguments for the restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Backup file to restore from
    #[arg(short, long)]
    pub input: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

impl RestoreArgs {
    /// Execute the restore command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_command_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let snapshot = match FileStateStore::import_from(&self.input).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                println!("❌ Backup inválido: {e}");
                return Ok(2);
            }
        };

        if !self.yes {
            println!(
                "⚠️  Isso substituirá todos os dados atuais pelo backup de {}",
                snapshot.saved_at.format("%d/%m/%Y %H:%M:%S")
            );
            println!("   Use --yes para confirmar");
            return Ok(2);
        }

        let mut store = load_store(&config).await?;
        store.restore(snapshot)?;
        save_store(&config, &store).await?;

        println!("✅ Backup restaurado com sucesso");
        println!(
            "   {} paciente(s), {} profissional(is), {} leito(s)",
            store.patients().len(),
            store.professionals().len(),
            store.beds().len()
        );
        Ok(0)
    }
}
