//! Configuration management
//!
//! TOML file plus environment overrides, in two steps: `${VAR}`
//! substitution inside the file, then `VIDAPLUS_*` variables on top of
//! the parsed structure.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{
    default_toml, ApplicationConfig, LoggingConfig, ScheduleConfig, StorageConfig, VidaplusConfig,
};
