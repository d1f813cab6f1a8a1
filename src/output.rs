//! Output formatting for human and JSON modes
//!
//! Results can be rendered either as human-readable text or
//! machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::error::CalcError;
use crate::parser::Span;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl OutputMode {
    /// Pick JSON when either the flag or the config asks for it
    #[must_use]
    pub const fn from_flags(json_flag: bool, json_config: bool) -> Self {
        if json_flag || json_config { Self::Json } else { Self::Human }
    }
}

/// Result of a successful `add`
#[derive(Debug, Serialize)]
pub struct SumResult {
    /// The input as the calculator saw it
    pub input: String,
    /// The sum
    pub sum: i64,
}

/// A failed `add`, ready for rendering
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Error kind: `format`, `negative_numbers` or `overflow`
    pub kind: String,
    /// Human-readable message
    pub message: String,
    /// Negative values, for `negative_numbers` errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub negatives: Vec<i64>,
    /// Byte offsets of the offending token in the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a ErrorReport,
}

impl SumResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.sum),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl From<&CalcError> for ErrorReport {
    fn from(err: &CalcError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
            negatives: err.negatives().map(<[i64]>::to_vec).unwrap_or_default(),
            span: err.span(),
        }
    }
}

impl ErrorReport {
    /// JSON body: `{"error": {...}}`
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope { error: self }).unwrap_or_default()
    }

    /// Render the report based on output mode
    ///
    /// Human mode writes to stderr; JSON goes to stdout so it can be piped.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => eprintln!("{} {}", "error:".red().bold(), self.message),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }
}
