use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const STORAGE_KEY: &str = "insights-hub.config";

/// Client settings, persisted in browser `localStorage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the API. Empty means same origin.
    pub api_base: String,
    /// `EnvFilter` directive for console logging, e.g. "info" or "insights_hub=debug".
    pub log_level: String,
    /// Show the full access token after login. Debugging only.
    pub reveal_token: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: option_env!("INSIGHTS_API_BASE").unwrap_or("").to_string(),
            log_level: "info".to_string(),
            reveal_token: false,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Join an API path (starting with `/`) onto the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim().trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Load from `localStorage`, falling back to defaults when nothing is stored.
    pub fn load() -> Result<Self, ConfigError> {
        match local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(js_err)?
        {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        local_storage()?
            .set_item(STORAGE_KEY, &json)
            .map_err(js_err)
    }
}

fn local_storage() -> Result<web_sys::Storage, ConfigError> {
    web_sys::window()
        .ok_or_else(|| ConfigError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| ConfigError::Storage("localStorage disabled".to_string()))
}

fn js_err(e: wasm_bindgen::JsValue) -> ConfigError {
    ConfigError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

#[derive(Clone, Copy)]
pub struct ConfigContext {
    pub config: RwSignal<Config>,
}
