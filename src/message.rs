//! Body extraction straight from raw RFC 5322 message bytes

use crate::error::{ExtractError, Result};
use crate::extractor::{Extractor, extract};
use crate::types::ExtractionResult;
use tracing::debug;

/// Decode `raw` and extract the body of its text content
pub fn extract_message(raw: &[u8]) -> Result<ExtractionResult> {
    Ok(extract(&decode_text(raw)?))
}

impl Extractor {
    /// Decode `raw` and extract the body of its text content.
    ///
    /// The first `text/plain` part is used; messages without one fall back to
    /// the first `text/html` part with markup stripped.
    pub fn extract_message(&self, raw: &[u8]) -> Result<ExtractionResult> {
        Ok(self.extract(&decode_text(raw)?))
    }
}

fn decode_text(raw: &[u8]) -> Result<String> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ExtractError::Structure(e.to_string()))?;

    let mut text = None;
    let mut html = None;
    collect_text_parts(&parsed, &mut text, &mut html)?;

    match (text, html) {
        (Some(text), _) => Ok(text),
        (None, Some(html)) => {
            debug!("No text/plain part, using stripped text/html");
            Ok(strip_html(&html))
        }
        (None, None) => Ok(String::new()),
    }
}

fn collect_text_parts(
    part: &mailparse::ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) -> Result<()> {
    if !part.subparts.is_empty() {
        for sub in &part.subparts {
            collect_text_parts(sub, text, html)?;
        }
        return Ok(());
    }

    if is_attachment(part) {
        return Ok(());
    }

    let mimetype = part.ctype.mimetype.to_lowercase();
    let wanted = match mimetype.as_str() {
        "text/plain" => text.is_none(),
        "text/html" => html.is_none(),
        _ => false,
    };
    if !wanted {
        return Ok(());
    }

    let body = part
        .get_body()
        .map_err(|e| ExtractError::Decode(e.to_string()))?;
    if mimetype == "text/plain" {
        *text = Some(body);
    } else {
        *html = Some(body);
    }
    Ok(())
}

fn is_attachment(part: &mailparse::ParsedMail) -> bool {
    matches!(
        part.get_content_disposition().disposition,
        mailparse::DispositionType::Attachment
    )
}

fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut tag = String::new();
    let mut in_tag = false;
    let mut skipping = false;

    for c in html.chars() {
        if in_tag {
            if c == '>' {
                in_tag = false;
                let name = tag
                    .trim()
                    .trim_end_matches('/')
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_lowercase();
                match name.as_str() {
                    "script" | "style" => skipping = true,
                    "/script" | "/style" => skipping = false,
                    "br" | "/p" | "/div" | "/li" | "/tr" | "/h1" | "/h2" | "/h3" | "/h4"
                    | "/h5" | "/h6" => result.push('\n'),
                    _ => {}
                }
            } else {
                tag.push(c);
            }
        } else if c == '<' {
            in_tag = true;
            tag.clear();
        } else if !skipping {
            result.push(c);
        }
    }

    let decoded = result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    // Line structure matters to the extractor, so blank lines stay
    decoded
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
