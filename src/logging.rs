use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Error => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Renders one event as a single JSON line. Extra `fields` must be an object;
/// anything else is ignored. Reserved keys win over same-named fields.
pub fn format_event(ts_millis: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> String {
    let mut payload = serde_json::Map::new();

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts_millis)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    serde_json::Value::Object(payload).to_string()
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < min_level {
        return;
    }

    emit(level, &format_event(now_unix_millis(), level, event, fields));
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}
