//! Declarative line-matching rules

use crate::error::{ExtractError, Result};
use crate::lines::LineSequence;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Where a rule starts walking the line window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// From the first line downward
    Forward,
    /// From the last line upward
    Backward,
}

impl FromStr for ScanDirection {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            _ => Err(ExtractError::UnknownScanDirection(s.to_string())),
        }
    }
}

impl fmt::Display for ScanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Which end of the window a matching rule discards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutDirection {
    /// Discard everything up to and including the boundary line
    DropPrefix,
    /// Discard the boundary line and everything after it
    DropSuffix,
}

impl FromStr for CutDirection {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "prefix" | "drop_prefix" => Ok(Self::DropPrefix),
            "suffix" | "drop_suffix" => Ok(Self::DropSuffix),
            _ => Err(ExtractError::UnknownCutDirection(s.to_string())),
        }
    }
}

impl fmt::Display for CutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DropPrefix => write!(f, "prefix"),
            Self::DropSuffix => write!(f, "suffix"),
        }
    }
}

/// Auxiliary condition checked against a neighbouring non-blank line
#[derive(Debug, Clone)]
pub struct Condition {
    /// Signed distance in non-blank lines from the matched line
    pub offset: isize,
    pub pattern: Regex,
}

/// One entry of a rule set.
///
/// The primary pattern is tested against the trimmed candidate line. Each
/// auxiliary condition is tested, in order, against the raw text of the
/// non-blank line `offset` steps away; all of them must hold.
#[derive(Debug, Clone)]
pub struct Rule {
    pub scan: ScanDirection,
    pub pattern: Regex,
    pub conditions: Vec<Condition>,
    /// Non-blank distance from the matched line to the cut boundary
    pub cut_offset: isize,
    pub cut: CutDirection,
    /// Give up after this many non-matching non-blank lines
    pub line_limit: Option<usize>,
    /// Re-apply until the rule stops cutting
    pub repeatable: bool,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ExtractError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl Rule {
    /// Rule cutting at the matched line itself, without conditions or limit
    pub fn new(scan: ScanDirection, pattern: &str, cut: CutDirection) -> Result<Self> {
        Ok(Self {
            scan,
            pattern: compile(pattern)?,
            conditions: Vec::new(),
            cut_offset: 0,
            cut,
            line_limit: None,
            repeatable: false,
        })
    }

    /// Add an auxiliary condition on the line `offset` non-blank lines away
    pub fn when(mut self, offset: isize, pattern: &str) -> Result<Self> {
        self.conditions.push(Condition {
            offset,
            pattern: compile(pattern)?,
        });
        Ok(self)
    }

    #[must_use]
    pub const fn cut_at(mut self, offset: isize) -> Self {
        self.cut_offset = offset;
        self
    }

    #[must_use]
    pub const fn limit(mut self, lines: usize) -> Self {
        self.line_limit = Some(lines);
        self
    }

    #[must_use]
    pub const fn repeating(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Whether the rule holds at `idx` of `lines`
    #[must_use]
    pub fn matches(&self, lines: &LineSequence<'_>, idx: usize) -> bool {
        if !self.pattern.is_match(lines.get(idx).trim()) {
            return false;
        }
        self.conditions.iter().all(|condition| {
            lines
                .resolve(idx, condition.offset)
                .is_some_and(|target| condition.pattern.is_match(lines.get(target)))
        })
    }
}

/// Serialized form of a [`Condition`]
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionDef {
    pub offset: isize,
    pub pattern: String,
}

/// Serialized form of a [`Rule`], with directions spelled as strings.
///
/// ```json
/// { "scan": "forward", "pattern": "^iPhoneから送信$", "cut": "suffix" }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDef {
    pub scan: String,
    pub pattern: String,
    #[serde(default)]
    pub conditions: Vec<ConditionDef>,
    #[serde(default)]
    pub cut_offset: isize,
    pub cut: String,
    #[serde(default)]
    pub line_limit: Option<usize>,
    #[serde(default)]
    pub repeatable: bool,
}

impl TryFrom<RuleDef> for Rule {
    type Error = ExtractError;

    fn try_from(def: RuleDef) -> Result<Self> {
        let mut rule = Self::new(def.scan.parse()?, &def.pattern, def.cut.parse()?)?
            .cut_at(def.cut_offset);
        for condition in &def.conditions {
            rule = rule.when(condition.offset, &condition.pattern)?;
        }
        rule.line_limit = def.line_limit;
        rule.repeatable = def.repeatable;
        Ok(rule)
    }
}
