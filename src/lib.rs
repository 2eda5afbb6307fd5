// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Body Extractor
//!
//! Pulls the human-authored body out of plain-text email by cutting away
//! quoted reply chains, forwarded-message headers, signature blocks and
//! greeting boilerplate. The rules cover common English mail clients and
//! Japanese business-email conventions.
//!
//! All decisions are line-level pattern matches driven by a declarative
//! [`Catalog`] of [`Rule`]s; there is no language understanding involved.
//!
//! # Example
//!
//! ```rust
//! use email_body_extract::extract;
//!
//! let result = extract("Hello,\n\nBody text.\n\n-- \nJohn Doe");
//!
//! assert_eq!(result.text, "Hello,\n\nBody text.");
//! assert_eq!(result.start_line_no, 1);
//! assert_eq!(result.line_count, 3);
//! ```

mod catalog;
mod config;
mod error;
mod extractor;
mod lines;
mod message;
mod rule;
mod scanner;
mod types;

pub use catalog::{Catalog, CatalogDef, DIVIDER_PATTERN};
pub use config::{ExtractorConfig, LineSeparator, SignatureLimits};
pub use error::{ExtractError, Result};
pub use extractor::{Extractor, extract};
pub use lines::{LineSequence, is_blank, normalize_line_feeds};
pub use message::extract_message;
pub use rule::{Condition, ConditionDef, CutDirection, Rule, RuleDef, ScanDirection};
pub use scanner::{apply_rule_set, strip_signature_block, strip_trailing_quote};
pub use types::ExtractionResult;
