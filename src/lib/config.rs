//! Build-time configuration for the backend endpoint and console logging, with
//! an optional runtime override. The runtime config is read from
//! `window.FACEAUTH_CONFIG` (if present) so static deployments can change the
//! backend without rebuilding. Configuration values are public; do not store
//! secrets here.

use url::Url;

/// Backend used when `FACEAUTH_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5001";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("FACEAUTH_API_URL"),
            option_env!("FACEAUTH_LOG_LEVEL"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = match api_base_url.and_then(normalize_runtime_value) {
            Some(value) => validate_base_url(&value).unwrap_or_else(|| {
                log::warn!("Ignoring invalid FACEAUTH_API_URL, using {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_string()
            }),
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let log_level = log_level
            .and_then(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            log_level,
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        match validate_base_url(&value) {
            Some(url) => config.api_base_url = url,
            None => log::warn!("Ignoring invalid runtime api_base_url"),
        }
    }
    if let Some(level) = runtime.log_level.as_deref().and_then(parse_log_level) {
        config.log_level = level;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("FACEAUTH_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Accepts absolute http(s) URLs and strips the trailing slash.
fn validate_base_url(value: &str) -> Option<String> {
    let parsed = Url::parse(value.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return None;
    }
    Some(value.trim().trim_end_matches('/').to_string())
}

fn parse_log_level(value: &str) -> Option<log::Level> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_API_BASE_URL, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value, validate_base_url,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  http://10.0.0.5:5001 "),
            Some("http://10.0.0.5:5001".to_string())
        );
    }

    #[test]
    fn build_env_defaults_to_loopback_backend() {
        let config = AppConfig::from_build_env(None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, log::Level::Info);

        let config = AppConfig::from_build_env(Some("  "), Some(""));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn build_env_rejects_invalid_urls() {
        let config = AppConfig::from_build_env(Some("not a url"), Some("debug"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, log::Level::Debug);

        let config = AppConfig::from_build_env(Some("ftp://faces.example"), None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn validate_base_url_strips_trailing_slash() {
        assert_eq!(
            validate_base_url("https://faces.example/api/"),
            Some("https://faces.example/api".to_string())
        );
        assert_eq!(validate_base_url("/relative"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig::from_build_env(Some("https://api.default"), None);
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            log_level: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::from_build_env(Some("https://api.default"), None);
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override/"),
            log_level: normalize_runtime_value("warn"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn apply_runtime_overrides_keeps_url_when_override_is_invalid() {
        let mut config = AppConfig::from_build_env(Some("https://api.default"), None);
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("javascript:alert(1)"),
            log_level: None,
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
    }
}
