//! cyberport.de
//!
//! The article number only shows up in the login form's return URL. The
//! shop publishes no product images in a usable form.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;

use crate::error::ExtractError;
use crate::extractor::cleaner::sanitize_markup;
use crate::extractor::locale::parse_decimal;
use crate::extractor::ruleset::{Ruleset, euro_only, no_images};
use crate::extractor::select::{inner_html, require_attr, require_text, text};
use crate::model::Discount;

const LOGIN_FORM: &str = "form#loginformleft";

static ARTICLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]|[0-9])+-([A-Z]|[0-9])+_([A-Z]|[0-9])+").unwrap());

pub static RULESET: Ruleset = Ruleset {
    name: "cyberport",
    domains: &["cyberport.de"],
    external_id,
    title,
    description,
    current_price,
    currency: euro_only,
    discount,
    images: no_images,
};

fn external_id(document: &Html) -> Result<String, ExtractError> {
    let action = require_attr(document, LOGIN_FORM, "action")?;

    ARTICLE_NUMBER
        .find(&action)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ExtractError::NotFound(format!("article number in {LOGIN_FORM} @action")))
}

fn title(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "h1 > span[itemprop='name']")
}

/// Kept as markup, with scripts and event handlers stripped.
fn description(document: &Html) -> Result<String, ExtractError> {
    Ok(sanitize_markup(&inner_html(document, "div.article > p")?))
}

fn current_price(document: &Html) -> Result<Decimal, ExtractError> {
    parse_decimal(&require_attr(document, "meta[itemprop='price']", "content")?)
}

fn discount(current_price: Decimal, document: &Html) -> Result<Option<Discount>, ExtractError> {
    let old_price = text(document, "div.old-price2 > div")?;
    if old_price.is_empty() {
        return Ok(None);
    }

    Ok(Some(Discount::from_prices(parse_decimal(&old_price)?, current_price)?))
}
