//! amazon.de and amazon.com
//!
//! The currency is not printed in a machine-readable way, it follows from the
//! marketplace. Discounts are taken verbatim from the savings row, and the
//! image gallery comes from a JSON literal embedded in an inline script.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;
use serde_json::Value;
use url::Url;

use crate::error::ExtractError;
use crate::extractor::locale::parse_decimal;
use crate::extractor::ruleset::Ruleset;
use crate::extractor::select::{require_attr, require_text, select_all, text};
use crate::model::{Currency, Discount, Image, ImageVariant};

/// Tried in order, the first one with text wins.
const PRICE_SELECTORS: [&str; 4] = [
    "span.a-size-medium.a-color-price.offer-price.a-text-normal",
    "span#priceblock_ourprice",
    "span#priceblock_saleprice",
    "span#priceblock_dealprice",
];

static PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+.\d+").unwrap());
static SAVINGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+,\d+).\((\d+)%\)").unwrap());
static COLOR_IMAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"'colorImages':\s*\{\s*'initial':\s*([\s\S]+?)\},\s+'colorToAsin'").unwrap()
});

pub static RULESET: Ruleset = Ruleset {
    name: "amazon",
    domains: &["amazon.de", "amazon.com"],
    external_id,
    title,
    description,
    current_price,
    currency,
    discount,
    images,
};

fn external_id(document: &Html) -> Result<String, ExtractError> {
    require_attr(document, "input#ASIN", "value")
}

fn title(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "span#productTitle")
}

fn description(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "div#productDescription > p:first-child")
}

fn current_price(document: &Html) -> Result<Decimal, ExtractError> {
    for css in PRICE_SELECTORS {
        let price = text(document, css)?;
        if !price.is_empty() {
            return price_from_text(&price);
        }
    }
    Err(ExtractError::NotFound(PRICE_SELECTORS.join(", ")))
}

fn currency(url: &Url, _document: &Html) -> Result<Currency, ExtractError> {
    let host = url.host_str().unwrap_or_default();

    if host.contains("amazon.de") {
        Ok(Currency::Eur)
    } else if host.contains("amazon.com") {
        Ok(Currency::Usd)
    } else {
        Err(ExtractError::UnknownCurrency(url.to_string()))
    }
}

fn discount(_current_price: Decimal, document: &Html) -> Result<Option<Discount>, ExtractError> {
    let savings = text(document, "tr#regularprice_savings > td.a-color-price")?;
    let Some(captures) = SAVINGS.captures(&savings) else {
        return Ok(None);
    };

    let old_price = price_from_text(&text(document, "div#price span.a-text-strike")?)?;
    let amount = parse_decimal(&captures[1])?;
    let percentage = parse_decimal(&captures[2])?;

    Ok(Some(Discount::scraped(old_price, amount, percentage)))
}

fn price_from_text(text: &str) -> Result<Decimal, ExtractError> {
    let found = PRICE
        .find(text)
        .ok_or_else(|| ExtractError::NotFound(format!("price in {text:?}")))?;
    parse_decimal(found.as_str())
}

fn images(document: &Html) -> Result<Vec<Image>, ExtractError> {
    let gallery = select_all(document, "script")?
        .into_iter()
        .find_map(|script| {
            let source: String = script.text().collect();
            COLOR_IMAGES
                .captures(&source)
                .map(|captures| captures[1].trim().to_string())
        });

    match gallery {
        Some(json) => images_from_json(&json),
        None => Ok(Vec::new()),
    }
}

/// Each entry's `main` object maps a rendition URL to `[height, width]`.
fn images_from_json(json: &str) -> Result<Vec<Image>, ExtractError> {
    let entries: Vec<Value> = serde_json::from_str(json)?;

    entries
        .iter()
        .map(|entry| -> Result<Image, ExtractError> {
            let mut image = Image::new();
            if let Some(main) = entry.get("main").and_then(Value::as_object) {
                for (url, size) in main {
                    let (height, width) = dimensions(size)?;
                    image.push_variant(ImageVariant::new(url.clone(), width, height));
                }
            }
            Ok(image)
        })
        .collect()
}

fn dimensions(size: &Value) -> Result<(u32, u32), ExtractError> {
    let number = |index: usize| {
        size.get(index)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ExtractError::InvalidDimension(size.to_string()))
    };
    Ok((number(0)?, number(1)?))
}
