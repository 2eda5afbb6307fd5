//! Line normalization and the shrinking line window the scanners operate on

use std::borrow::Cow;

/// Replace every CRLF and every lone CR with a single LF.
#[must_use]
pub fn normalize_line_feeds(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// A line is blank when nothing but whitespace remains after trimming.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Ordered lines of a normalized text, viewed through a window that can
/// only shrink from either end.
///
/// All indices taken and returned by the methods below are relative to the
/// current window. Lines cut from the front are counted so the caller can
/// map the window back onto line numbers of the original input.
#[derive(Debug, Clone)]
pub struct LineSequence<'a> {
    lines: Vec<&'a str>,
    start: usize,
    end: usize,
}

impl<'a> LineSequence<'a> {
    /// Split already-normalized text on LF.
    ///
    /// The empty string yields a single empty line.
    #[must_use]
    pub fn new(normalized: &'a str) -> Self {
        let lines: Vec<&'a str> = normalized.split('\n').collect();
        let end = lines.len();
        Self {
            lines,
            start: 0,
            end,
        }
    }

    /// Number of lines in the window
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Line at `idx`, panicking when out of the window
    #[must_use]
    pub fn get(&self, idx: usize) -> &'a str {
        self.as_slice()[idx]
    }

    #[must_use]
    pub fn is_blank(&self, idx: usize) -> bool {
        is_blank(self.get(idx))
    }

    /// The lines currently retained
    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.lines[self.start..self.end]
    }

    /// How many lines have been cut from the front so far
    #[must_use]
    pub const fn dropped_front(&self) -> usize {
        self.start
    }

    /// Index of the `offset`-th non-blank line away from `idx`.
    ///
    /// Blank lines are stepped over without being counted. An offset of zero
    /// returns `idx` itself; `None` means the window edge was reached first.
    #[must_use]
    pub fn resolve(&self, idx: usize, offset: isize) -> Option<usize> {
        let mut remaining = offset.unsigned_abs();
        let mut pos = idx;
        while remaining > 0 {
            pos = if offset > 0 {
                pos + 1
            } else {
                pos.checked_sub(1)?
            };
            if pos >= self.len() {
                return None;
            }
            if !self.is_blank(pos) {
                remaining -= 1;
            }
        }
        Some(pos)
    }

    /// Discard every line up to and including `through`.
    ///
    /// Returns the number of lines discarded.
    pub fn drop_prefix(&mut self, through: usize) -> usize {
        let dropped = (through + 1).min(self.len());
        self.start += dropped;
        dropped
    }

    /// Discard every line from `from` onward, keeping strictly the lines
    /// before it.
    ///
    /// Returns the number of lines discarded.
    pub fn drop_suffix(&mut self, from: usize) -> usize {
        let keep = from.min(self.len());
        let dropped = self.len() - keep;
        self.end = self.start + keep;
        dropped
    }

    /// Remove leading and trailing blank lines.
    ///
    /// Leading lines count as dropped from the front. A window holding only
    /// blank lines becomes empty.
    pub fn trim_blank_edges(&mut self) {
        match self.as_slice().iter().position(|line| !is_blank(line)) {
            Some(first) => {
                self.start += first;
            }
            None => {
                self.end = self.start;
                return;
            }
        }
        if let Some(last) = self.as_slice().iter().rposition(|line| !is_blank(line)) {
            self.end = self.start + last + 1;
        }
    }

    /// Join the retained lines with `separator`
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.as_slice().join(separator)
    }
}
