//! Backward and forward scans that cut boilerplate off either end of a message

use crate::config::SignatureLimits;
use crate::lines::LineSequence;
use crate::rule::{CutDirection, Rule, ScanDirection};
use regex::Regex;
use tracing::debug;

/// Apply each rule of `rules` in order.
///
/// A rule walks the window from its scan origin, skipping blank lines, and
/// cuts at the first line it matches. A repeatable rule is run again on the
/// shortened window for as long as it keeps cutting.
pub fn apply_rule_set(lines: &mut LineSequence<'_>, rules: &[Rule], name: &str) {
    for (position, rule) in rules.iter().enumerate() {
        while apply_rule(lines, rule, name, position) && rule.repeatable {}
    }
}

/// Returns whether the rule cut anything.
fn apply_rule(lines: &mut LineSequence<'_>, rule: &Rule, name: &str, position: usize) -> bool {
    let len = lines.len();
    let mut inspected = 0;

    for step in 0..len {
        let idx = match rule.scan {
            ScanDirection::Forward => step,
            ScanDirection::Backward => len - 1 - step,
        };
        if lines.is_blank(idx) {
            continue;
        }

        if rule.matches(lines, idx) {
            let Some(boundary) = lines.resolve(idx, rule.cut_offset) else {
                return false;
            };
            let dropped = match rule.cut {
                CutDirection::DropPrefix => lines.drop_prefix(boundary),
                CutDirection::DropSuffix => lines.drop_suffix(boundary),
            };
            debug!(
                rule_set = name,
                rule = position,
                line = idx,
                cut = %rule.cut,
                dropped,
                "Rule matched"
            );
            return dropped > 0;
        }

        inspected += 1;
        if rule.line_limit.is_some_and(|limit| inspected >= limit) {
            break;
        }
    }

    false
}

/// Cut the unbroken run of quoted lines at the end of the window.
///
/// The window is left untouched when no unquoted non-blank line exists, so a
/// message consisting only of quotes survives.
pub fn strip_trailing_quote(lines: &mut LineSequence<'_>, marker: char) {
    for idx in (0..lines.len()).rev() {
        let line = lines.get(idx).trim();
        if line.is_empty() {
            continue;
        }
        if !line.starts_with(marker) {
            let dropped = lines.drop_suffix(idx + 1);
            if dropped > 0 {
                debug!(line = idx, dropped, "Stripped trailing quote");
            }
            return;
        }
    }
}

/// Cut a signature block introduced by a divider line.
///
/// Scans upward from the end. A closing salutation ends the scan at once.
/// Each divider found moves the cut boundary up to it, so the topmost divider
/// within reach wins.
pub fn strip_signature_block(
    lines: &mut LineSequence<'_>,
    salutations: &[Rule],
    divider: &Regex,
    limits: &SignatureLimits,
) {
    let mut inspected = 0;
    let mut boundary = None;
    let mut dividers = 0;

    for idx in (0..lines.len()).rev() {
        let compact: String = lines
            .get(idx)
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '\u{3000}'))
            .collect();
        if compact.is_empty() {
            continue;
        }

        if salutations.iter().any(|rule| rule.matches(lines, idx)) {
            break;
        }

        if divider.is_match(&compact) {
            boundary = Some(idx);
            dividers += 1;
            if dividers >= limits.max_dividers {
                break;
            }
        }

        inspected += 1;
        if dividers == 0 && inspected >= limits.first_divider_window {
            break;
        }
        if inspected >= limits.max_lines {
            break;
        }
    }

    if let Some(boundary) = boundary {
        let dropped = lines.drop_suffix(boundary);
        debug!(line = boundary, dividers, dropped, "Stripped signature block");
    }
}
