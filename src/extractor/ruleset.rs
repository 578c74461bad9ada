use std::fmt::{Debug, Formatter};

use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;
use url::Url;

use crate::error::ExtractError;
use crate::model::{Currency, Discount, Image};

pub type FieldFn<T> = fn(&Html) -> Result<T, ExtractError>;
pub type CurrencyFn = fn(&Url, &Html) -> Result<Currency, ExtractError>;
pub type DiscountFn = fn(Decimal, &Html) -> Result<Option<Discount>, ExtractError>;

/// Extraction rules for one shop.
///
/// A ruleset is a plain static value: the domains it owns plus one function
/// per product field. It holds no state and is shared freely between
/// concurrent parses.
#[derive(Clone, Copy)]
pub struct Ruleset {
    pub name: &'static str,
    /// Hostnames without a leading `www.`.
    pub domains: &'static [&'static str],
    pub external_id: FieldFn<String>,
    pub title: FieldFn<String>,
    pub description: FieldFn<String>,
    pub current_price: FieldFn<Decimal>,
    /// Receives the page URL as well, some shops only reveal the currency
    /// through their top-level domain.
    pub currency: CurrencyFn,
    /// Receives the already extracted current price. `Ok(None)` when the
    /// page shows no markdown.
    pub discount: DiscountFn,
    pub images: FieldFn<Vec<Image>>,
}

impl Ruleset {
    /// Exact match against the declared domains.
    pub fn matches(&self, domain: &str) -> bool {
        self.domains.contains(&domain)
    }
}

impl Debug for Ruleset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ruleset")
            .field("name", &self.name)
            .field("domains", &self.domains)
            .finish_non_exhaustive()
    }
}

/// Currency extractor for shops that only sell in euros.
pub fn euro_only(_url: &Url, _document: &Html) -> Result<Currency, ExtractError> {
    Ok(Currency::Eur)
}

/// Image extractor for shops without discoverable product images.
pub fn no_images(_document: &Html) -> Result<Vec<Image>, ExtractError> {
    Ok(Vec::new())
}

/// First two captures of `pattern` in an image URL, in capture order.
pub fn dimensions_in(pattern: &Regex, url: &str) -> Result<(u32, u32), ExtractError> {
    let captures = pattern
        .captures(url)
        .ok_or_else(|| ExtractError::MissingDimensions(url.to_string()))?;

    let number = |index: usize| {
        let value = captures.get(index).map_or("", |m| m.as_str());
        value
            .parse::<u32>()
            .map_err(|_| ExtractError::InvalidDimension(value.to_string()))
    };
    Ok((number(1)?, number(2)?))
}
