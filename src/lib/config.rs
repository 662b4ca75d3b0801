//! Build-time configuration for the API base URL and the optional remote
//! sidebar catalog, with a runtime override read from
//! `window.HARIVARA_ADMIN_CONFIG` so static deployments can repoint endpoints
//! without rebuilding. Configuration values are public; do not store secrets
//! here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL for the back-office REST API. Empty means same-origin paths.
    pub api_base_url: String,
    /// Optional endpoint serving the sidebar menu catalog as JSON. Empty
    /// means the built-in catalog is used.
    pub sidebar_config_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime
    /// overrides when present.
    pub fn load() -> Self {
        let api_base_url = option_env!("HARIVARA_ADMIN_API_BASE_URL")
            .or(option_env!("HARIVARA_ADMIN_API_HOST"))
            .unwrap_or("");
        let sidebar_config_url = option_env!("HARIVARA_ADMIN_SIDEBAR_CONFIG_URL").unwrap_or("");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            sidebar_config_url: sidebar_config_url.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    sidebar_config_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.sidebar_config_url {
        config.sidebar_config_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("HARIVARA_ADMIN_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        sidebar_config_url: read_runtime_value(&object, "sidebar_config_url"),
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

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.harivara.app "),
            Some("https://api.harivara.app".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            sidebar_config_url: "https://api.default/sidebar-config".to_string(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            sidebar_config_url: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(
            config.sidebar_config_url,
            "https://api.default/sidebar-config"
        );
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            sidebar_config_url: String::new(),
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            sidebar_config_url: normalize_runtime_value("https://api.override/menus"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.sidebar_config_url, "https://api.override/menus");
    }
}
