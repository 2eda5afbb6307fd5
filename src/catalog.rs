//! Built-in boilerplate rules for English and Japanese business email

use crate::error::{ExtractError, Result};
use crate::rule::{CutDirection, Rule, RuleDef, ScanDirection};
use regex::Regex;
use serde::Deserialize;

/// Rule limit shared by the RFC 3676 delimiter and the signature heuristic
const SIGNATURE_LINE_LIMIT: usize = 20;

/// 15 or more symbols in a row, half-width and full-width alike.
///
/// ASCII punctuation, half-width katakana punctuation, full-width ASCII
/// punctuation, the general punctuation through miscellaneous symbols blocks,
/// and the kana voicing marks and middle dots.
pub const DIVIDER_PATTERN: &str = concat!(
    r"^[!-/:-@\[-`{-~",
    r"\x{FF61}-\x{FF65}\x{FF70}",
    r"\x{FF01}-\x{FF0F}\x{FF1A}-\x{FF20}\x{FF3B}-\x{FF40}\x{FF5B}-\x{FF65}\x{FF70}",
    r"\x{2010}-\x{2BFF}",
    r"\x{3099}-\x{309F}\x{30A0}\x{30FB}-\x{30FF}",
    r"]{15,}",
);

/// The rule sets applied by the extraction pipeline, in pipeline order
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Reply and forward headers; everything from the header down is dropped
    pub quoted_history: Vec<Rule>,
    /// RFC 3676 `-- ` signature delimiter
    pub signature_delimiter: Vec<Rule>,
    /// Closing salutations such as よろしくお願いします
    pub closing_salutation: Vec<Rule>,
    /// Leading To/Cc/添付/本文 block
    pub message_header: Vec<Rule>,
    /// Addressee lines such as 山田様
    pub addressee: Vec<Rule>,
    /// Opening salutations such as お世話になっております
    pub opening_salutation: Vec<Rule>,
    /// Divider line recognized by the signature heuristic
    pub divider: Regex,
}

fn suffix(pattern: &str) -> Result<Rule> {
    Rule::new(ScanDirection::Forward, pattern, CutDirection::DropSuffix)
}

fn trailing(pattern: &str, limit: usize) -> Result<Rule> {
    Ok(Rule::new(ScanDirection::Backward, pattern, CutDirection::DropSuffix)?.limit(limit))
}

fn leading(pattern: &str, limit: usize) -> Result<Rule> {
    Ok(Rule::new(ScanDirection::Forward, pattern, CutDirection::DropPrefix)?.limit(limit))
}

fn quoted_history() -> Result<Vec<Rule>> {
    Ok(vec![
        suffix(r"^-----[ ]?Original Message[ ]?----- From: .+$")?,
        suffix(r"^----------------------- Original Message -----------------------$")?
            .when(-1, r"^Forwarded by .+@.+\..+$")?
            .cut_at(-1),
        // ----- Original Message -----
        // -------- Forwarded Message --------
        // -----------------------転送元のメール-----------------------
        // ---------- 転送メッセージ ----------
        suffix(r"^-{5,}\s?((Original|Forwarded) Message|転送元のメール|転送メッセージ)\s?-{5,}$")?,
        // On 2016/12/13 16:45, foo bar wrote:
        suffix(r"^On \d{4}/\d{1,2}/\d{1,2}( |, at )?\d{1,2}:\d{1,2}, .+ wrote:$")?,
        // foo bar <foo@bar.baz> wrote on 2018/04/05 14:49:27:
        suffix(r"^.+@.+\..+ wrote on \d{4}/\d{1,2}/\d{1,2} \d{1,2}:\d{1,2}:\d{1,2}:$")?,
        // On Tue, 5 Jun 2018 10:11:12 +0900
        suffix(r"^On .+, \d+ .+ \d{4} \d{1,2}:\d{1,2}:\d{1,2} .\d{4}$")?,
        // 2018/06/05 10:11、foo@bar.bazのメール:
        suffix(r"^\d{4}.?\d{1,2}.?\d{1,2}.* \d{1,2}:\d{1,2}.*、.+@.+\..+の(メール|メッセージ):$")?,
        suffix(
            r"^---- On .+, \d{1,2} \d{1,2} \d{4} \d{1,2}:\d{1,2}:\d{1,2} .+@.+\..+ wrote ----$",
        )?,
        // 2016/08/23 午前9:57 foo bar <foo@bar.baz>:
        suffix(r"^\d{4}.\d{1,2}.\d{1,2}.? .*\d{1,2}:\d{1,2} .+@.+\..+:$")?,
        // 2018年5月15日(火) 18:36 foo bar <foo@bar.baz>:
        suffix(r"^\d{4}年\d{1,2}月\d{1,2}日\(.+\) \d{1,2}:\d{1,2} .+@.+\..+:$")?,
        suffix(r"^(From|差出人): .+@.+\..+$")?.when(1, r"^(Sent|送信日時): .+$")?,
        suffix(r"^送信元: .+@.+\..+$")?.when(1, r"^宛先: .+$")?,
        suffix(r"^iPhoneから送信$")?,
    ])
}

fn signature_delimiter() -> Result<Vec<Rule>> {
    // RFC 3676, tolerating a missing trailing space
    Ok(vec![trailing(r"^-- ?$", SIGNATURE_LINE_LIMIT)?])
}

fn closing_salutation() -> Result<Vec<Rule>> {
    Ok(vec![
        trailing(r"^(よろ|宜)しく.*お(願|ねが)い.*ます[。]?$", 2)?,
        trailing(
            r"^(以上|何卒|今後|どうぞ|お手数).*(よろ|宜)しく.*お(願|ねが)い.*ます[。]?$",
            2,
        )?,
        trailing(r"^以上(です)?[。]?$", 2)?,
        trailing(r"^以上、.*$", 2)?,
    ])
}

fn message_header() -> Result<Vec<Rule>> {
    Ok(vec![
        leading(r"^To:.*$", 4)?
            .when(1, r"^Cc:.*$")?
            .when(2, r"^添付:.*$")?
            .when(3, r"^本文:.*$")?
            .cut_at(3),
    ])
}

fn addressee() -> Result<Vec<Rule>> {
    Ok(vec![
        leading(r"^.+(様|さま|さん|社長|部長)[、。へ]?$", 3)?.repeating(),
        leading(r"^.*各位[、。へ]?$", 3)?,
    ])
}

fn opening_salutation() -> Result<Vec<Rule>> {
    Ok(vec![
        leading(r"^(いつも|毎々|大変)?、?お世話に.+す.+(です|ます)[、。！]?$", 3)?,
        leading(r"^(いつも|毎々|大変)?、?お世話に.+す[、。！]?$", 3)?
            .when(1, r"^.+(です|ます)[。]?$")?
            .cut_at(1),
        leading(r"^(いつも|毎々|大変)?、?お世話に.+す[、。！]?$", 3)?,
        leading(r"^(お|御)(疲|つか)れ(様|さま)です.+です[、。！]?$", 3)?,
        leading(r"^(お|御)(疲|つか)れ(様|さま)です[、。！]?$", 3)?
            .when(1, r"^.+です[。]?$")?
            .cut_at(1),
        leading(r"^(お|御)(疲|つか)れ(様|さま)です[、。！]?$", 3)?,
    ])
}

impl Catalog {
    /// The built-in rule catalog
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            quoted_history: quoted_history()?,
            signature_delimiter: signature_delimiter()?,
            closing_salutation: closing_salutation()?,
            message_header: message_header()?,
            addressee: addressee()?,
            opening_salutation: opening_salutation()?,
            divider: compile_divider(DIVIDER_PATTERN)?,
        })
    }

    /// Build a catalog from its serialized form.
    ///
    /// Rule sets left out of `def` keep their built-in rules.
    pub fn from_def(def: CatalogDef) -> Result<Self> {
        let builtin = Self::builtin()?;
        Ok(Self {
            quoted_history: rule_set(def.quoted_history, builtin.quoted_history)?,
            signature_delimiter: rule_set(def.signature_delimiter, builtin.signature_delimiter)?,
            closing_salutation: rule_set(def.closing_salutation, builtin.closing_salutation)?,
            message_header: rule_set(def.message_header, builtin.message_header)?,
            addressee: rule_set(def.addressee, builtin.addressee)?,
            opening_salutation: rule_set(def.opening_salutation, builtin.opening_salutation)?,
            divider: match def.divider {
                Some(pattern) => compile_divider(&pattern)?,
                None => builtin.divider,
            },
        })
    }

    /// Parse a JSON [`CatalogDef`] and build it
    pub fn from_json(json: &str) -> Result<Self> {
        let def: CatalogDef = serde_json::from_str(json)?;
        Self::from_def(def)
    }
}

fn rule_set(defs: Option<Vec<RuleDef>>, fallback: Vec<Rule>) -> Result<Vec<Rule>> {
    defs.map_or(Ok(fallback), |defs| {
        defs.into_iter().map(Rule::try_from).collect()
    })
}

fn compile_divider(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ExtractError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Serialized form of a [`Catalog`]; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogDef {
    pub quoted_history: Option<Vec<RuleDef>>,
    pub signature_delimiter: Option<Vec<RuleDef>>,
    pub closing_salutation: Option<Vec<RuleDef>>,
    pub message_header: Option<Vec<RuleDef>>,
    pub addressee: Option<Vec<RuleDef>>,
    pub opening_salutation: Option<Vec<RuleDef>>,
    pub divider: Option<String>,
}
