//! Decimal parsing for prices rendered in shop locales.
//!
//! German shops print `134,90 €`, sometimes with the euro sign mis-decoded
//! (`â‚¬`, or U+FFFD after lossy UTF-8 decoding). Everything that is not part
//! of the number is stripped and the comma separator becomes a dot.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ExtractError;

const CURRENCY_ARTIFACTS: &[&str] = &["â‚¬", "€", "EUR", "USD", "US$", "$", "£", "\u{FFFD}"];

/// Strips currency glyphs and whitespace and normalizes the decimal separator.
///
/// When both `,` and `.` occur, whichever comes last is the decimal separator
/// and the other one groups thousands.
pub fn normalize_decimal(text: &str) -> String {
    let mut cleaned = text.to_string();
    for artifact in CURRENCY_ARTIFACTS {
        cleaned = cleaned.replace(artifact, "");
    }
    let cleaned: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();

    match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned,
    }
}

pub fn parse_decimal(text: &str) -> Result<Decimal, ExtractError> {
    let normalized = normalize_decimal(text);
    Decimal::from_str(&normalized).map_err(|source| ExtractError::InvalidNumber {
        value: text.to_string(),
        source,
    })
}

/// Parses the first match of `pattern` in `text`, if any.
pub fn find_decimal(pattern: &Regex, text: &str) -> Result<Option<Decimal>, ExtractError> {
    pattern
        .find(text)
        .map(|m| parse_decimal(m.as_str()))
        .transpose()
}
