use serde_json::json;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::logging::{log_event, LogLevel};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WireError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

pub fn isolate<T>(
    config: &SiteConfig,
    component: &'static str,
    run: impl FnOnce() -> Result<T, WireError>,
) -> Option<T> {
    match run() {
        Ok(value) => Some(value),
        Err(WireError::MissingElement(element)) => {
            log_event(
                config.log_level,
                LogLevel::Debug,
                "component_skipped",
                json!({ "component": component, "missing": element }),
            );
            None
        }
        Err(error) => {
            log_event(
                config.log_level,
                LogLevel::Error,
                "component_failed",
                json!({ "component": component, "error": error.to_string() }),
            );
            None
        }
    }
}

pub fn initialize<T>(
    config: &SiteConfig,
    component: &'static str,
    setup: impl FnOnce() -> Result<T, WireError>,
) -> Option<T> {
    let ready = isolate(config, component, setup)?;
    log_event(
        config.log_level,
        LogLevel::Debug,
        "component_ready",
        json!({ "component": component }),
    );
    Some(ready)
}
