//! CLI interface and argument parsing
//!
//! Operator command line for VidaPlus using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// VidaPlus - Hospital Management Core
#[derive(Parser, Debug)]
#[command(name = "vidaplus")]
#[command(version, about, long_about = None)]
#[command(author = "VidaPlus Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vidaplus.toml", env = "VIDAPLUS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VIDAPLUS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Seed demonstration records into an empty store
    Seed(commands::seed::SeedArgs),

    /// Show dashboard counters and system statistics
    Status(commands::status::StatusArgs),

    /// Generate occupancy or consultations reports
    Report(commands::report::ReportArgs),

    /// Export the current state to a backup file
    Backup(commands::backup::BackupArgs),

    /// Replace the current state from a backup file
    Restore(commands::restore::RestoreArgs),

    /// Export the audit log as CSV
    ExportAudit(commands::export_audit::ExportAuditArgs),

    /// Run the background autosave and notification loops
    Watch(commands::watch::WatchArgs),
}
