//! Finding records emitted by rule predicates (spec.md §3, §6).

use serde::{Deserialize, Serialize};
use tsec_compiler::utils::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single observation produced by a rule against a block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub description: String,
    pub severity: Severity,
    pub message: String,
    pub range: Span,
    /// Narrower span highlighting the offending value, when the rule
    /// can point at something more specific than the whole attribute
    /// (spec.md §4.7's `NewResultWithValueAnnotation`-equivalent).
    pub value_range: Option<Span>,
    /// Populated by the driver when scanning more than one file
    /// (spec.md §4.8); `None` for a single in-memory `scan_source` call
    /// with no file identity.
    pub filename: Option<String>,
}

impl Finding {
    pub fn new(
        rule_id: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        range: Span,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            description: description.into(),
            severity,
            message: message.into(),
            range,
            value_range: None,
            filename: None,
        }
    }

    pub fn with_value_range(mut self, value_range: Span) -> Self {
        self.value_range = Some(value_range);
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}
