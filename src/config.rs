use crate::logging::LogLevel;

pub const DEFAULT_PRELOADER_DELAY_MS: u32 = 4_500;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 200;
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;
pub const DEFAULT_CAROUSEL_GAP: f64 = 24.0;
pub const DEFAULT_SHAKE_THRESHOLD: f64 = 25.0;
pub const DEFAULT_SHAKE_INTERVAL_MS: f64 = 1_000.0;
pub const DEFAULT_SHAKES_TO_TRIGGER: u32 = 3;
pub const DEFAULT_FEEDBACK_RECIPIENT: &str = "6282326744030";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PRELOADER_DELAY_MS_BOUNDS: (u32, u32) = (0, 60_000);
const RESIZE_DEBOUNCE_MS_BOUNDS: (u32, u32) = (16, 5_000);
const HEADER_OFFSET_BOUNDS: (f64, f64) = (0.0, 400.0);
const CAROUSEL_GAP_BOUNDS: (f64, f64) = (0.0, 200.0);
const SHAKE_THRESHOLD_BOUNDS: (f64, f64) = (5.0, 200.0);
const SHAKE_INTERVAL_MS_BOUNDS: (f64, f64) = (100.0, 10_000.0);
const SHAKES_TO_TRIGGER_BOUNDS: (u32, u32) = (1, 10);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub preloader_delay_ms: u32,
    pub resize_debounce_ms: u32,
    pub header_offset: f64,
    pub carousel_gap: f64,
    pub shake_threshold: f64,
    pub shake_interval_ms: f64,
    pub shakes_to_trigger: u32,
    pub feedback_recipient: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            preloader_delay_ms: DEFAULT_PRELOADER_DELAY_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            header_offset: DEFAULT_HEADER_OFFSET,
            carousel_gap: DEFAULT_CAROUSEL_GAP,
            shake_threshold: DEFAULT_SHAKE_THRESHOLD,
            shake_interval_ms: DEFAULT_SHAKE_INTERVAL_MS,
            shakes_to_trigger: DEFAULT_SHAKES_TO_TRIGGER,
            feedback_recipient: DEFAULT_FEEDBACK_RECIPIENT.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let preloader_delay_ms = parse_u32_with_bounds(
            lookup("data-preloader-delay-ms").as_deref(),
            DEFAULT_PRELOADER_DELAY_MS,
            PRELOADER_DELAY_MS_BOUNDS,
        );
        let resize_debounce_ms = parse_u32_with_bounds(
            lookup("data-resize-debounce-ms").as_deref(),
            DEFAULT_RESIZE_DEBOUNCE_MS,
            RESIZE_DEBOUNCE_MS_BOUNDS,
        );
        let header_offset = parse_f64_with_bounds(
            lookup("data-header-offset").as_deref(),
            DEFAULT_HEADER_OFFSET,
            HEADER_OFFSET_BOUNDS,
        );
        let carousel_gap = parse_f64_with_bounds(
            lookup("data-carousel-gap").as_deref(),
            DEFAULT_CAROUSEL_GAP,
            CAROUSEL_GAP_BOUNDS,
        );
        let shake_threshold = parse_f64_with_bounds(
            lookup("data-shake-threshold").as_deref(),
            DEFAULT_SHAKE_THRESHOLD,
            SHAKE_THRESHOLD_BOUNDS,
        );
        let shake_interval_ms = parse_f64_with_bounds(
            lookup("data-shake-interval-ms").as_deref(),
            DEFAULT_SHAKE_INTERVAL_MS,
            SHAKE_INTERVAL_MS_BOUNDS,
        );
        let shakes_to_trigger = parse_u32_with_bounds(
            lookup("data-shakes-to-trigger").as_deref(),
            DEFAULT_SHAKES_TO_TRIGGER,
            SHAKES_TO_TRIGGER_BOUNDS,
        );
        let feedback_recipient = parse_recipient(lookup("data-feedback-recipient").as_deref())
            .unwrap_or_else(|| DEFAULT_FEEDBACK_RECIPIENT.to_string());
        let log_level = lookup("data-log-level")
            .as_deref()
            .and_then(LogLevel::from_str)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            preloader_delay_ms,
            resize_debounce_ms,
            header_offset,
            carousel_gap,
            shake_threshold,
            shake_interval_ms,
            shakes_to_trigger,
            feedback_recipient,
            log_level,
        }
    }
}

fn parse_u32_with_bounds(raw: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(raw: Option<&str>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_recipient(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim().trim_start_matches('+');

    if !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit()) {
        Some(value.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let attributes: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| attributes.get(key).cloned())
    }

    #[test]
    fn missing_attributes_yield_defaults() {
        assert_eq!(config_from(&[]), SiteConfig::default());
    }

    #[test]
    fn in_range_values_are_accepted() {
        let config = config_from(&[
            ("data-preloader-delay-ms", " 1200 "),
            ("data-header-offset", "64.5"),
            ("data-shakes-to-trigger", "5"),
            ("data-log-level", "debug"),
        ]);

        assert_eq!(config.preloader_delay_ms, 1_200);
        assert_eq!(config.header_offset, 64.5);
        assert_eq!(config.shakes_to_trigger, 5);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_and_garbage_values_fall_back() {
        let config = config_from(&[
            ("data-resize-debounce-ms", "2"),
            ("data-shake-threshold", "NaN"),
            ("data-carousel-gap", "-4"),
            ("data-shakes-to-trigger", "eleven"),
            ("data-log-level", "verbose"),
        ]);

        assert_eq!(config.resize_debounce_ms, DEFAULT_RESIZE_DEBOUNCE_MS);
        assert_eq!(config.shake_threshold, DEFAULT_SHAKE_THRESHOLD);
        assert_eq!(config.carousel_gap, DEFAULT_CAROUSEL_GAP);
        assert_eq!(config.shakes_to_trigger, DEFAULT_SHAKES_TO_TRIGGER);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn recipient_must_be_digits() {
        assert_eq!(
            config_from(&[("data-feedback-recipient", "+15551234567")]).feedback_recipient,
            "15551234567"
        );
        assert_eq!(
            config_from(&[("data-feedback-recipient", "555-1234")]).feedback_recipient,
            DEFAULT_FEEDBACK_RECIPIENT
        );
    }
}
