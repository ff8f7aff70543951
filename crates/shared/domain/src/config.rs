use crate::normalization::Normalization;
use serde::Deserialize;

/// Top-level configuration of the `check` tool.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub log: LogConfig,
    pub palindrome: PalindromeConfig,
}

/// Diagnostic output settings. Diagnostics always go to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub json: bool,
}

/// Palindrome predicate settings.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PalindromeConfig {
    /// Compare characters literally: no case folding, punctuation and spaces count.
    pub strict: bool,
}

impl PalindromeConfig {
    #[must_use]
    pub const fn normalization(&self) -> Normalization {
        if self.strict { Normalization::LITERAL } else { Normalization::STANDARD }
    }
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false }
    }
}
