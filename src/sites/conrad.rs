//! conrad.de and conrad.it
//!
//! Each slideshow picture is served in several sizes that share a path and
//! differ only in their `?x=..&y=..` query. All renditions present anywhere
//! in the page are collected as variants of the same image.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;

use crate::error::ExtractError;
use crate::extractor::locale::parse_decimal;
use crate::extractor::ruleset::{Ruleset, dimensions_in, euro_only};
use crate::extractor::select::{own_text, require_attr, require_text, select_all, text};
use crate::model::{Discount, Image, ImageVariant};

const DESCRIPTION: &str = "div#description > section";
const SLIDESHOW_IMAGE: &str = "img.ccpProductDetailSlideshow__slider__wrapper__list__item__image";

static IMAGE_DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?x=(\d+)&y=(\d+)").unwrap());

pub static RULESET: Ruleset = Ruleset {
    name: "conrad",
    domains: &["conrad.de", "conrad.it"],
    external_id,
    title,
    description,
    current_price,
    currency: euro_only,
    discount,
    images,
};

fn external_id(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "span[itemprop='sku']")
}

fn title(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "h1.ccpProductDetail__title__text")
}

/// Direct text of the first description section, one line per text node.
/// Bullet lists and other nested markup are left out.
fn description(document: &Html) -> Result<String, ExtractError> {
    let section = select_all(document, DESCRIPTION)?
        .into_iter()
        .next()
        .ok_or_else(|| ExtractError::NotFound(DESCRIPTION.to_string()))?;

    Ok(own_text(section).join("\n").trim().to_string())
}

fn current_price(document: &Html) -> Result<Decimal, ExtractError> {
    parse_decimal(&require_attr(document, "meta[itemprop='price']", "content")?)
}

fn discount(current_price: Decimal, document: &Html) -> Result<Option<Discount>, ExtractError> {
    let old_price = text(document, "div.ccpProductDetailInfo__cell__price__old__value > span")?;
    if old_price.is_empty() {
        return Ok(None);
    }

    Ok(Some(Discount::from_prices(parse_decimal(&old_price)?, current_price)?))
}

fn images(document: &Html) -> Result<Vec<Image>, ExtractError> {
    let sources: Vec<&str> = select_all(document, "img")?
        .into_iter()
        .filter_map(|img| img.value().attr("src"))
        .collect();

    select_all(document, SLIDESHOW_IMAGE)?
        .into_iter()
        .map(|slide| -> Result<Image, ExtractError> {
            let src = slide.value().attr("src").unwrap_or_default();
            let base = src.split('?').next().unwrap_or_default();

            let mut seen = HashSet::new();
            let mut image = Image::new();
            for url in sources.iter().filter(|url| url.starts_with(base)) {
                if seen.insert(*url) {
                    let (width, height) = dimensions_in(&IMAGE_DIMENSIONS, url)?;
                    image.push_variant(ImageVariant::new(*url, width, height));
                }
            }
            Ok(image)
        })
        .collect()
}
