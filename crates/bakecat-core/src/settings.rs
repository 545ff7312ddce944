use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::products::DEFAULT_PLEASE_NOTE;
use crate::ConfigError;

/// Operator-tunable description settings, read from YAML.
///
/// ```yaml
/// default_please_note: |
///   • Colours may vary.
/// extra_placeholders:
///   - "(Seasonal)"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptionSettings {
    /// Note used for products that have none yet.
    pub default_please_note: String,
    /// Template phrases stripped in addition to the built-in list.
    pub extra_placeholders: Vec<String>,
}

impl Default for DescriptionSettings {
    fn default() -> Self {
        Self {
            default_please_note: DEFAULT_PLEASE_NOTE.to_string(),
            extra_placeholders: Vec::new(),
        }
    }
}

/// Load and validate description settings from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_settings(path: &Path) -> Result<DescriptionSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SettingsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_settings(&content)
}

/// Like [`load_settings`], but a missing file yields the built-in defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, parsed, or
/// fails validation.
pub fn load_settings_or_default(path: &Path) -> Result<DescriptionSettings, ConfigError> {
    if path.exists() {
        load_settings(path)
    } else {
        Ok(DescriptionSettings::default())
    }
}

fn parse_settings(content: &str) -> Result<DescriptionSettings, ConfigError> {
    let mut settings: DescriptionSettings = serde_yaml::from_str(content)?;
    settings.default_please_note = settings.default_please_note.trim().to_string();
    validate_settings(&settings)?;
    Ok(settings)
}

fn validate_settings(settings: &DescriptionSettings) -> Result<(), ConfigError> {
    for line in settings.default_please_note.lines() {
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('•') {
            return Err(ConfigError::Validation(format!(
                "default_please_note line must start with '•': '{line}'"
            )));
        }
    }

    let mut seen = HashSet::new();
    for phrase in &settings.extra_placeholders {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Validation(
                "placeholder phrase must be non-empty".to_string(),
            ));
        }

        if !(trimmed.starts_with('(') && trimmed.ends_with(')')) {
            return Err(ConfigError::Validation(format!(
                "placeholder phrase '{trimmed}' must be wrapped in parentheses"
            )));
        }

        if !seen.insert(trimmed.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate placeholder phrase: '{trimmed}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
