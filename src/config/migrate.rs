use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry.
const EXPECTED_KEYS: &[&str] = &[
    "database",
    "per_set_bonus_entry_creation",
    "per_set_bonus_summary",
    "work_record_set_bonus",
    "moes_hour_rate",
    "moes_set_bonus",
    "default_period",
    "currency_symbol",
];

/// Return the expected keys missing from the YAML document at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

    Ok(EXPECTED_KEYS
        .iter()
        .filter(|k| !map.contains_key(**k))
        .map(|k| k.to_string())
        .collect())
}

/// Print the result of [`missing_fields`].
pub fn check(path: &Path) -> AppResult<()> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        warning(format!("Missing fields: {}", missing.join(", ")));
        info("Run `hirebill config --migrate` to add them with default values.");
    }
    Ok(())
}

/// Add every missing key with its default value, leaving existing values
/// untouched. Returns true when the file was rewritten.
pub fn migrate(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration already up to date.");
        return Ok(false);
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let defaults = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    let defaults: &Mapping = defaults
        .as_mapping()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))?;

    if let Some(map) = yaml.as_mapping_mut() {
        for key in &missing {
            let k = Value::String(key.clone());
            if let Some(v) = defaults.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    let serialized = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized)?;

    success(format!("Configuration migrated: added {}", missing.join(", ")));
    Ok(true)
}
