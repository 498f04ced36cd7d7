//! Configuration schema
//!
//! TOML-backed settings for the application, storage paths, background
//! schedule and logging. Every field has a sensible default so a bare
//! `[application]` table is already a valid file.

use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VidaplusConfig {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Display name used in logs and the CLI banner
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Storage paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the live state snapshot file
    #[serde(default = "default_state_path")]
    pub state_path: String,
    /// Directory for explicit backup exports
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,
}

/// Background loop schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Seconds between automatic state saves
    #[serde(default = "default_autosave_interval")]
    pub autosave_interval_secs: u64,
    /// Seconds between pending-notification scans
    #[serde(default = "default_notification_interval")]
    pub notification_interval_secs: u64,
}

/// Logging sinks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to also write logs to a rotating file
    #[serde(default)]
    pub file_enabled: bool,
    /// Directory for rotated log files
    #[serde(default = "default_log_dir")]
    pub file_dir: String,
}

fn default_app_name() -> String {
    "vidaplus".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_state_path() -> String {
    "data/vidaplus_state.json".to_string()
}

fn default_backup_dir() -> String {
    "backups".to_string()
}

fn default_autosave_interval() -> u64 {
    30
}

fn default_notification_interval() -> u64 {
    60
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            backup_dir: default_backup_dir(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: default_autosave_interval(),
            notification_interval_secs: default_notification_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_dir: default_log_dir(),
        }
    }
}

impl Default for VidaplusConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            storage: StorageConfig::default(),
            schedule: ScheduleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl VidaplusConfig {
    /// Validates cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> std::result::Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.application.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "invalid log_level '{}', expected one of {}",
                self.application.log_level,
                LEVELS.join(", ")
            ));
        }
        if self.storage.state_path.trim().is_empty() {
            return Err("storage.state_path must not be empty".to_string());
        }
        if self.schedule.autosave_interval_secs == 0 {
            return Err("schedule.autosave_interval_secs must be at least 1".to_string());
        }
        if self.schedule.notification_interval_secs == 0 {
            return Err("schedule.notification_interval_secs must be at least 1".to_string());
        }
        if self.logging.file_enabled && self.logging.file_dir.trim().is_empty() {
            return Err("logging.file_dir must not be empty when file_enabled".to_string());
        }
        Ok(())
    }
}

/// Template written by `vidaplus init`
pub fn default_toml() -> String {
    r#"# VidaPlus configuration

[application]
name = "vidaplus"
log_level = "info"

[storage]
state_path = "data/vidaplus_state.json"
backup_dir = "backups"

[schedule]
autosave_interval_secs = 30
notification_interval_secs = 60

[logging]
file_enabled = false
file_dir = "logs"
"#
    .to_string()
}
