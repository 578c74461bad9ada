//! bonprix.de

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;

use crate::error::ExtractError;
use crate::extractor::locale::parse_decimal;
use crate::extractor::ruleset::{Ruleset, dimensions_in, euro_only};
use crate::extractor::select::{require_attr, require_text, select_all, text};
use crate::model::{Discount, Image, ImageVariant};

/// Carousel attributes holding one rendition each, in variant order.
const VARIANT_ATTRIBUTES: [&str; 3] = [
    "data-image-src",
    "data-zoom-image-src",
    "data-preview-image-src",
];

static IMAGE_DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d+)x(\d+)/").unwrap());

pub static RULESET: Ruleset = Ruleset {
    name: "bonprix",
    domains: &["bonprix.de"],
    external_id,
    title,
    description,
    current_price,
    currency: euro_only,
    discount,
    images,
};

fn external_id(document: &Html) -> Result<String, ExtractError> {
    require_attr(document, "div#product-page", "data-product-ordernumber")
}

fn title(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "h1.product-name")
}

fn description(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "p.product-information-full-description")
}

fn current_price(document: &Html) -> Result<Decimal, ExtractError> {
    parse_decimal(&require_attr(document, "div#offer > span.price", "content")?)
}

fn discount(current_price: Decimal, document: &Html) -> Result<Option<Discount>, ExtractError> {
    let former_price = text(document, "span.price.former-price")?;
    if former_price.is_empty() {
        return Ok(None);
    }

    let old_price = parse_decimal(&former_price)?;
    Ok(Some(Discount::from_prices(old_price, current_price)?))
}

fn images(document: &Html) -> Result<Vec<Image>, ExtractError> {
    select_all(document, "div#carousel_product_look div.image-wrapper")?
        .into_iter()
        .map(|wrapper| -> Result<Image, ExtractError> {
            let mut image = Image::new();
            for name in VARIANT_ATTRIBUTES {
                let src = wrapper.value().attr(name).unwrap_or_default().trim();
                image.push_variant(variant(src)?);
            }
            Ok(image)
        })
        .collect()
}

/// Sources are protocol-relative, e.g. `//image01.bonprix.de/assets/319x448/...`.
fn variant(src: &str) -> Result<ImageVariant, ExtractError> {
    let (width, height) = dimensions_in(&IMAGE_DIMENSIONS, src)?;
    Ok(ImageVariant::new(format!("https:{src}"), width, height))
}
