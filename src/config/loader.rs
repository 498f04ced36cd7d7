//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::VidaplusConfig;
use crate::domain::{HospitalError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into VidaplusConfig
/// 4. Applies environment variable overrides (VIDAPLUS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<VidaplusConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HospitalError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HospitalError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: VidaplusConfig = toml::from_str(&contents)
        .map_err(|e| HospitalError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        HospitalError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads the configuration file when present, defaults otherwise
///
/// # Errors
///
/// Returns an error only when the file exists but is invalid; absence
/// falls back to [`VidaplusConfig::default`].
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<VidaplusConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        Ok(VidaplusConfig::default())
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HospitalError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the VIDAPLUS_* prefix
///
/// Variables follow the pattern VIDAPLUS_<SECTION>_<KEY>, for example
/// VIDAPLUS_STORAGE_STATE_PATH or VIDAPLUS_APPLICATION_LOG_LEVEL.
fn apply_env_overrides(config: &mut VidaplusConfig) {
    if let Ok(val) = std::env::var("VIDAPLUS_APPLICATION_NAME") {
        config.application.name = val;
    }
    if let Ok(val) = std::env::var("VIDAPLUS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("VIDAPLUS_STORAGE_STATE_PATH") {
        config.storage.state_path = val;
    }
    if let Ok(val) = std::env::var("VIDAPLUS_STORAGE_BACKUP_DIR") {
        config.storage.backup_dir = val;
    }

    if let Ok(val) = std::env::var("VIDAPLUS_SCHEDULE_AUTOSAVE_INTERVAL_SECS") {
        if let Ok(secs) = val.parse() {
            config.schedule.autosave_interval_secs = secs;
        }
    }
    if let Ok(val) = std::env::var("VIDAPLUS_SCHEDULE_NOTIFICATION_INTERVAL_SECS") {
        if let Ok(secs) = val.parse() {
            config.schedule.notification_interval_secs = secs;
        }
    }

    if let Ok(val) = std::env::var("VIDAPLUS_LOGGING_FILE_ENABLED") {
        config.logging.file_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("VIDAPLUS_LOGGING_FILE_DIR") {
        config.logging.file_dir = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("VIDAPLUS_TEST_VAR", "data/custom.json");
        let input = "state_path = \"${VIDAPLUS_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "state_path = \"data/custom.json\"\n");
        std::env::remove_var("VIDAPLUS_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("VIDAPLUS_MISSING_VAR");
        let input = "state_path = \"${VIDAPLUS_MISSING_VAR}\"";
        assert!(substitute_env_vars(input).is_err());
    }

    #[test]
    fn test_comment_lines_are_not_substituted() {
        std::env::remove_var("VIDAPLUS_COMMENTED_VAR");
        let input = "# state_path = \"${VIDAPLUS_COMMENTED_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${VIDAPLUS_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent.toml").is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent.toml").unwrap();
        assert_eq!(config.schedule.autosave_interval_secs, 30);
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
name = "vidaplus"
log_level = "debug"

[storage]
state_path = "data/state.json"

[schedule]
autosave_interval_secs = 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.storage.state_path, "data/state.json");
        assert_eq!(config.schedule.autosave_interval_secs, 10);
        // Untouched sections keep their defaults.
        assert_eq!(config.schedule.notification_interval_secs, 60);
    }

    #[test]
    fn test_load_config_invalid_values_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[schedule]\nautosave_interval_secs = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }
}
