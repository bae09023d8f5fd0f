//! Round configuration: duration and summary mode.
//!
//! Values are only read when a round starts; anything malformed falls back to
//! the defaults instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ROUND_SECONDS: f64 = 30.0;

/// Durations offered on the start screen (seconds).
pub const DURATION_CHOICES: [f64; 4] = [15.0, 30.0, 60.0, 90.0];

/// What the summary screen builds from the caught words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Cloud,
    #[default]
    Story,
}

impl Mode {
    /// `"story"` selects story mode; every other value selects cloud mode.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("story") {
            Mode::Story
        } else {
            Mode::Cloud
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Cloud => "Cloud",
            Mode::Story => "Story",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub duration_secs: f64,
    pub mode: Mode,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_ROUND_SECONDS,
            mode: Mode::default(),
        }
    }
}

impl RoundConfig {
    /// Parses a JSON config object field by field. A missing or unusable
    /// field takes its default without affecting the others; a document that
    /// is not a JSON object yields the full default config.
    pub fn from_json(raw: &str) -> Self {
        let mut cfg = RoundConfig::default();
        let doc = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(doc)) => doc,
            Ok(other) => {
                log::warn!("round config is not an object ({other}); using defaults");
                return cfg;
            }
            Err(e) => {
                log::warn!("round config rejected ({e}); using defaults");
                return cfg;
            }
        };
        match doc.get("duration_secs") {
            None => {}
            Some(Value::Number(n)) => {
                cfg.duration_secs = sanitize_duration(n.as_f64().unwrap_or(DEFAULT_ROUND_SECONDS));
            }
            Some(Value::String(s)) => cfg.duration_secs = parse_duration(s),
            Some(other) => {
                log::warn!("round duration {other} is not a number; using {DEFAULT_ROUND_SECONDS}s");
            }
        }
        match doc.get("mode") {
            None => {}
            Some(Value::String(s)) => cfg.mode = Mode::parse(s),
            Some(other) => log::warn!("round mode {other} is not a string; keeping {:?}", cfg.mode),
        }
        cfg
    }

    pub fn set_duration_str(&mut self, raw: &str) {
        self.duration_secs = parse_duration(raw);
    }

    pub fn set_mode_str(&mut self, raw: &str) {
        self.mode = Mode::parse(raw);
    }
}

/// Parses a duration in seconds, falling back to the default for non-numeric,
/// non-finite, or non-positive input.
pub fn parse_duration(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) => sanitize_duration(v),
        Err(_) => {
            log::warn!("round duration {raw:?} is not a number; using {DEFAULT_ROUND_SECONDS}s");
            DEFAULT_ROUND_SECONDS
        }
    }
}

fn sanitize_duration(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        DEFAULT_ROUND_SECONDS
    }
}
