//! Export-audit command implementation
//!
//! Writes the audit log as a CSV file.

use super::{load_command_config, load_store, save_store};
use crate::domain::AuditAction;
use chrono::Local;
use clap::Args;

/// Arguments for the export-audit command
#[derive(Args, Debug)]
pub struct ExportAuditArgs {
    /// CSV file path (defaults to a dated file in the current directory)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl ExportAuditArgs {
    /// Execute the export-audit command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_command_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let mut store = load_store(&config).await?;

        let output = self.output.clone().unwrap_or_else(|| {
            format!("vidaplus_audit_{}.csv", Local::now().format("%Y-%m-%d"))
        });

        let entries = store.audit().len();
        store.record_event(
            AuditAction::Export,
            format!("Logs exportados em CSV: {entries} registro(s)"),
        );
        tokio::fs::write(&output, store.audit().to_csv()).await?;
        save_store(&config, &store).await?;

        println!("✅ Auditoria exportada: {output}");
        println!("   {} registro(s)", store.audit().len());
        Ok(0)
    }
}
