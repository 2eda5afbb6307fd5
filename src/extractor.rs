//! The extraction pipeline

use crate::catalog::Catalog;
use crate::config::ExtractorConfig;
use crate::lines::{LineSequence, normalize_line_feeds};
use crate::scanner::{apply_rule_set, strip_signature_block, strip_trailing_quote};
use crate::types::ExtractionResult;
use std::sync::LazyLock;
use tracing::{debug, trace};

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::new);

/// Extract the body of `text` with the built-in catalog and default settings
#[must_use]
pub fn extract(text: &str) -> ExtractionResult {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Strips quoted history, signatures, headers and greetings from message text.
///
/// Holds only immutable rules and settings; one instance can serve any
/// number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Extractor {
    catalog: Catalog,
    config: ExtractorConfig,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Extractor over the built-in catalog.
    ///
    /// Panics if a built-in pattern fails to compile.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Catalog::builtin().expect("built-in rule catalog must compile");
        Self::with_config(catalog, ExtractorConfig::default())
    }

    #[must_use]
    pub const fn with_config(catalog: Catalog, config: ExtractorConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the human-authored body of `text`.
    ///
    /// Never returns an empty body for input that has content: if every line
    /// would be removed, the normalized input is returned whole.
    #[must_use]
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let normalized = normalize_line_feeds(text);
        let mut lines = LineSequence::new(&normalized);
        let init_rows = lines.len();
        trace!(lines = init_rows, "Extracting body");

        self.remove_trailer(&mut lines);
        self.remove_header(&mut lines);
        lines.trim_blank_edges();

        let body = lines.join(self.config.line_separator.as_str());
        if body.is_empty() {
            debug!(lines = init_rows, "Nothing left after extraction, keeping input");
            return ExtractionResult {
                text: normalized.into_owned(),
                start_line_no: 1,
                line_count: init_rows,
            };
        }

        trace!(
            start = lines.dropped_front() + 1,
            lines = lines.len(),
            "Extracted body"
        );
        ExtractionResult {
            text: body,
            start_line_no: lines.dropped_front() + 1,
            line_count: lines.len(),
        }
    }

    fn remove_trailer(&self, lines: &mut LineSequence<'_>) {
        let catalog = &self.catalog;
        strip_trailing_quote(lines, self.config.quote_marker);
        apply_rule_set(lines, &catalog.quoted_history, "quoted_history");
        apply_rule_set(lines, &catalog.signature_delimiter, "signature_delimiter");
        strip_signature_block(
            lines,
            &catalog.closing_salutation,
            &catalog.divider,
            &self.config.signature,
        );
        apply_rule_set(lines, &catalog.closing_salutation, "closing_salutation");
    }

    fn remove_header(&self, lines: &mut LineSequence<'_>) {
        let catalog = &self.catalog;
        apply_rule_set(lines, &catalog.message_header, "message_header");
        apply_rule_set(lines, &catalog.addressee, "addressee");
        apply_rule_set(lines, &catalog.opening_salutation, "opening_salutation");
    }
}
