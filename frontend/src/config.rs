use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// localStorage key holding the JWT issued by the authentication service.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const APP_LOCALE: &str = "id-ID";
pub const APP_TIME_ZONE: Tz = chrono_tz::Asia::Jakarta;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__PRESENSI_ENV (env.js) wins over window.__PRESENSI_CONFIG.
    read_global_key("__PRESENSI_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__PRESENSI_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals().as_deref().and_then(normalize_base_url) {
        return cache_base_url(existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .as_deref()
        .and_then(normalize_base_url)
    {
        return cache_base_url(url);
    }
    log::warn!(
        "No runtime API base URL configured, falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://hr.example.com/api/").as_deref(),
            Some("https://hr.example.com/api")
        );
    }

    #[test]
    fn normalize_base_url_rejects_blank() {
        assert!(normalize_base_url("   ").is_none());
        assert!(normalize_base_url("/").is_none());
    }

    #[test]
    fn runtime_config_deserializes_optional_url() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.api_base_url.is_none());
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"http://x/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://x/api"));
    }
}
