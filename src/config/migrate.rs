use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Default configuration as a YAML mapping, the reference for key checks.
fn reference_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("Failed to serialize defaults: {e}")))?;

    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("defaults are not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::ConfigLoad(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::ConfigLoad(format!("{}: {}", path.display(), e))),
    }
}

/// Keys present in the current defaults but absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let reference = reference_mapping()?;
    let current = read_mapping(path)?;

    Ok(reference
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
///
/// Existing values and unknown keys are kept untouched.
/// Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        Config::default().save_to(path)?;
        success(format!("Created configuration file {}", path.display()));
        return Ok(Vec::new());
    }

    let reference = reference_mapping()?;
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in reference {
        if !current.contains_key(&key) {
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::ConfigSave(e.to_string()))?;
    fs::write(path, serialized)
        .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))?;

    success(format!(
        "Configuration migrated, added: {}",
        added.join(", ")
    ));

    Ok(added)
}
