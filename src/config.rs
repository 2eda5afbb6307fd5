//! Extractor configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Separator placed between retained lines of the extracted body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSeparator {
    /// `\n`, the marker input line endings are normalized to
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineSeparator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Bounds of the backward search for a divider-delimited signature block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureLimits {
    /// Non-blank lines to inspect before giving up when no divider has been seen
    pub first_divider_window: usize,
    /// Non-blank lines to inspect at most
    pub max_lines: usize,
    /// Stop after this many dividers
    pub max_dividers: usize,
}

impl Default for SignatureLimits {
    fn default() -> Self {
        Self {
            first_divider_window: 15,
            max_lines: 20,
            max_dividers: 3,
        }
    }
}

/// Tunables of an [`Extractor`](crate::Extractor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub line_separator: LineSeparator,
    /// First character marking a quoted line
    pub quote_marker: char,
    pub signature: SignatureLimits,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            line_separator: LineSeparator::default(),
            quote_marker: '>',
            signature: SignatureLimits::default(),
        }
    }
}

impl ExtractorConfig {
    /// Parse a configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
