//! Configuration loading.
//!
//! Settings are read from a JSON document under the `"rest-client"` key,
//! merged over the defaults and validated. The resulting [`RestClientConfig`]
//! is handed to whoever needs it; nothing here is global.

pub mod schema;

pub use schema::RestClientConfig;

use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads configuration from a settings JSON value.
///
/// Settings that fail to deserialize are logged and replaced by defaults;
/// settings that deserialize but fail validation are an error.
///
/// # Example
///
/// ```
/// use rest_share::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "rest-client": {
///         "defaultLanguage": "go",
///         "routePrefix": "/rest"
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert_eq!(config.default_language, "go");
/// assert_eq!(config.default_content_type, "application/json");
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<RestClientConfig, String> {
    let mut config = RestClientConfig::default();

    if let Some(settings) = settings_json {
        if let Some(rest_client_settings) = settings.get("rest-client") {
            match serde_json::from_value::<RestClientConfig>(rest_client_settings.clone()) {
                Ok(user_config) => {
                    config = config.merge(&user_config);
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse rest-client settings: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    Ok(config)
}

/// Loads configuration from a JSON settings file.
///
/// The file may either hold the full settings document (with a
/// `"rest-client"` key) or the rest-client settings object itself.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<RestClientConfig, String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

    let document: Value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse config file {}: {}", path.display(), e))?;

    let settings = if document.get("rest-client").is_some() {
        document
    } else {
        serde_json::json!({ "rest-client": document })
    };

    log::debug!("Loading configuration from {}", path.display());
    load_config(Some(settings))
}
