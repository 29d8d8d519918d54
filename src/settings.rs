//! The settings record exchanged with the host's settings store.
//!
//! Serialization always emits every member (`file` is an explicit null when
//! unset). Deserialization is lenient: a missing or wrongly-typed member
//! falls back to its default rather than failing the whole record.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScoreSettings {
    pub restore_score: bool,
    pub score: i64,
    pub text_color: String,
    pub save_to_file: bool,
    pub file: Option<PathBuf>,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            restore_score: false,
            score: 0,
            text_color: "#FFF".to_string(),
            save_to_file: false,
            file: None,
        }
    }
}

impl ScoreSettings {
    /// Per-field lenient read of a settings object. Anything absent, null,
    /// or of the wrong type keeps its default.
    pub fn from_value(value: &Value) -> Self {
        let mut settings = Self::default();

        if let Some(v) = value.get("restore-score").and_then(Value::as_bool) {
            settings.restore_score = v;
        }
        if let Some(v) = value.get("score").and_then(Value::as_i64) {
            settings.score = v;
        }
        if let Some(v) = value.get("text-color").and_then(Value::as_str) {
            settings.text_color = v.to_string();
        }
        if let Some(v) = value.get("save-to-file").and_then(Value::as_bool) {
            settings.save_to_file = v;
        }
        if let Some(v) = value.get("file").and_then(Value::as_str) {
            settings.file = Some(PathBuf::from(v));
        }

        settings
    }

    pub fn to_value(&self) -> Value {
        // Serializing a plain struct of bools/ints/strings cannot fail.
        serde_json::to_value(self).unwrap_or_default()
    }
}
