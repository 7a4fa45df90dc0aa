//! Output formatting for answered questions
//!
//! The engine knows nothing about presentation; this is the single place that
//! turns [`Answer`]s into text or JSON.

use crate::questions::Answer;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Format type for output presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FormatType {
    /// Plain text format
    #[default]
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Output formatter for answers
pub struct OutputFormatter {
    format_type: FormatType,
}

impl OutputFormatter {
    pub fn new(format_type: FormatType) -> Self {
        Self { format_type }
    }

    /// Format a single answer
    pub fn format(&self, answer: &Answer) -> String {
        match self.format_type {
            FormatType::Text => answer.to_string(),
            FormatType::Json => json!(answer).to_string(),
            FormatType::JsonPretty => Self::pretty(json!(answer)),
        }
    }

    /// Format several answers; JSON output wraps them in an `answers` array
    pub fn format_all(&self, answers: &[Answer]) -> String {
        match self.format_type {
            FormatType::Text => answers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            FormatType::Json => json!({ "answers": answers }).to_string(),
            FormatType::JsonPretty => Self::pretty(json!({ "answers": answers })),
        }
    }

    fn pretty(value: serde_json::Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}
