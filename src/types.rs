//! Extraction result

use serde::{Deserialize, Serialize};
use std::fmt;

/// The body extracted from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Retained lines joined with the configured separator
    pub text: String,

    /// 1-based line number in the input where `text` begins
    pub start_line_no: usize,

    /// Number of lines in `text`
    pub line_count: usize,
}

impl ExtractionResult {
    /// Line numbers of the input covered by the body, inclusive
    #[must_use]
    pub const fn line_range(&self) -> std::ops::RangeInclusive<usize> {
        self.start_line_no..=(self.start_line_no + self.line_count.saturating_sub(1))
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
