use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default location of the description settings file.
pub const DEFAULT_SETTINGS_PATH: &str = "./config/description.yaml";

/// Upper bound for `BAKECAT_VARIANT_COUNT`.
const MAX_VARIANT_COUNT: u32 = 20;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env: Environment = or_default("BAKECAT_ENV", "development")
        .parse()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "BAKECAT_ENV".to_string(),
            reason,
        })?;
    let log_level = or_default("BAKECAT_LOG_LEVEL", "info");
    let settings_path = PathBuf::from(or_default("BAKECAT_SETTINGS_PATH", DEFAULT_SETTINGS_PATH));

    let variant_count = parse_u32("BAKECAT_VARIANT_COUNT", "3")?;
    if variant_count == 0 || variant_count > MAX_VARIANT_COUNT {
        return Err(ConfigError::InvalidEnvVar {
            var: "BAKECAT_VARIANT_COUNT".to_string(),
            reason: format!("must be between 1 and {MAX_VARIANT_COUNT}, got {variant_count}"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        settings_path,
        variant_count,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
