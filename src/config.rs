//! Frontend Configuration
//!
//! Resolved once at startup, in priority order:
//! 1. `<meta name="lead-desk:api-url">` / `<meta name="lead-desk:log-level">`
//! 2. `window.__LEAD_DESK_CONFIG__ = { api_url, log_level }`
//! 3. Built-in defaults

use std::str::FromStr;

use log::Level;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Backend origin used when nothing is injected
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Global object the hosting page may define
const JS_CONFIG_KEY: &str = "__LEAD_DESK_CONFIG__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level `{0}`, using info")]
    UnknownLogLevel(String),
    #[error("ignoring window.__LEAD_DESK_CONFIG__: {0}")]
    InvalidJsConfig(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_url: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: Level::Info,
        }
    }
}

/// Shape of `window.__LEAD_DESK_CONFIG__`
#[derive(Debug, Default, Deserialize)]
struct JsConfig {
    api_url: Option<String>,
    log_level: Option<String>,
}

impl AppConfig {
    /// Load configuration. Problems are returned rather than logged, since
    /// the logger is configured from the result.
    pub fn load() -> (Self, Vec<ConfigError>) {
        let mut warnings = Vec::new();
        let document = web_sys::window().and_then(|w| w.document());

        let js_config = match read_js_config() {
            Ok(cfg) => cfg,
            Err(e) => {
                warnings.push(e);
                JsConfig::default()
            }
        };

        let meta = |name: &str| document.as_ref().and_then(|doc| meta_content(doc, name));
        let api_url = first_set(meta("lead-desk:api-url"), js_config.api_url);
        let log_level = first_set(meta("lead-desk:log-level"), js_config.log_level);

        let config = Self::resolve(api_url, log_level, &mut warnings);
        (config, warnings)
    }

    fn resolve(
        api_url: Option<String>,
        log_level: Option<String>,
        warnings: &mut Vec<ConfigError>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            config.api_url = normalize_api_url(&url);
        }
        if let Some(level) = log_level {
            match parse_log_level(&level) {
                Ok(level) => config.log_level = level,
                Err(e) => warnings.push(e),
            }
        }
        config
    }
}

fn normalize_api_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_log_level(level: &str) -> Result<Level, ConfigError> {
    Level::from_str(level.trim()).map_err(|_| ConfigError::UnknownLogLevel(level.to_string()))
}

/// Content of a `<meta name="...">` tag, if present
fn meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}

/// Meta value unless blank, else the JS value unless blank
fn first_set(meta: Option<String>, js: Option<String>) -> Option<String> {
    let set = |value: &Option<String>| value.as_ref().is_some_and(|v| !v.trim().is_empty());
    if set(&meta) {
        meta
    } else if set(&js) {
        js
    } else {
        None
    }
}

fn read_js_config() -> Result<JsConfig, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(JsConfig::default());
    };
    let value = js_sys::Reflect::get(&JsValue::from(window), &JsValue::from_str(JS_CONFIG_KEY))
        .map_err(|e| ConfigError::InvalidJsConfig(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(JsConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::InvalidJsConfig(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let mut warnings = Vec::new();
        let config = AppConfig::resolve(None, None, &mut warnings);
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.log_level, Level::Info);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_resolve_overrides() {
        let mut warnings = Vec::new();
        let config = AppConfig::resolve(
            Some(" https://crm.example.com/ ".to_string()),
            Some("debug".to_string()),
            &mut warnings,
        );
        assert_eq!(config.api_url, "https://crm.example.com");
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn test_blank_meta_falls_through_to_js_config() {
        let js = Some("https://js.example.com".to_string());
        assert_eq!(first_set(Some(String::new()), js.clone()), js);
        assert_eq!(first_set(Some("  ".to_string()), js.clone()), js);
        assert_eq!(first_set(None, js.clone()), js);
        assert_eq!(
            first_set(Some("https://meta.example.com".to_string()), js),
            Some("https://meta.example.com".to_string())
        );
        assert_eq!(first_set(Some(String::new()), Some(String::new())), None);

        let mut warnings = Vec::new();
        let config = AppConfig::resolve(
            first_set(Some(String::new()), Some("https://js.example.com/".to_string())),
            first_set(Some(String::new()), None),
            &mut warnings,
        );
        assert_eq!(config.api_url, "https://js.example.com");
        assert_eq!(config.log_level, Level::Info);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bad_log_level_warns() {
        let mut warnings = Vec::new();
        let config =
            AppConfig::resolve(Some("  ".to_string()), Some("loud".to_string()), &mut warnings);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, Level::Info);
        assert!(matches!(warnings.as_slice(), [ConfigError::UnknownLogLevel(l)] if l == "loud"));
    }
}
