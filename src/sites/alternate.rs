//! alternate.de
//!
//! Product images are not linked from the page. They are derived from the
//! article id and the product title, one photograph per carousel entry, in
//! two fixed sizes.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use scraper::Html;

use crate::error::ExtractError;
use crate::extractor::locale::{find_decimal, parse_decimal};
use crate::extractor::ruleset::{Ruleset, euro_only};
use crate::extractor::select::{attr, require_attr, require_text, select_all, text};
use crate::model::{Discount, Image, ImageVariant};

const IMAGE_HOST: &str = "https://www.alternate.de";
const IMAGE_SIZES: [(u32, u32); 2] = [(230, 230), (50, 50)];

static STRUCK_PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+,\d+").unwrap());

pub static RULESET: Ruleset = Ruleset {
    name: "alternate",
    domains: &["alternate.de"],
    external_id,
    title,
    description,
    current_price,
    currency: euro_only,
    discount,
    images,
};

fn external_id(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "var#expressTickerProductId")
}

fn title(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "div.productNameContainer > h1 > span")
}

fn description(document: &Html) -> Result<String, ExtractError> {
    require_text(document, "div.description > p:first-child")
}

fn current_price(document: &Html) -> Result<Decimal, ExtractError> {
    parse_decimal(&require_attr(document, "div.price", "data-standard-price")?)
}

fn discount(current_price: Decimal, document: &Html) -> Result<Option<Discount>, ExtractError> {
    let struck = text(document, "div.productShort > span.strikedPrice")?;

    find_decimal(&STRUCK_PRICE, &struck)?
        .map(|old_price| Discount::from_prices(old_price, current_price))
        .transpose()
        .map_err(ExtractError::from)
}

fn images(document: &Html) -> Result<Vec<Image>, ExtractError> {
    let Some(article_id) = attr(document, "input[name='articleId']", "content")?
        .filter(|id| !id.is_empty())
        .map(|id| id.to_lowercase())
    else {
        return Ok(Vec::new());
    };

    let slug = image_slug(&text(document, "div.productNameContainer > h1 > span")?);

    // Without a carousel the page shows a single image
    let count = select_all(document, "ul.jsSlickCarousel > li")?.len().max(1);

    Ok((0..count)
        .map(|index| {
            let suffix = if index == 0 {
                String::new()
            } else {
                format!("_{index}")
            };

            IMAGE_SIZES
                .iter()
                .fold(Image::new(), |image, &(width, height)| {
                    image.with_variant(ImageVariant::new(
                        format!(
                            "{IMAGE_HOST}/p/{width}x{height}/h/{slug}@@{article_id}{suffix}.jpg"
                        ),
                        width,
                        height,
                    ))
                })
        })
        .collect())
}

/// `AMD Ryzen 5 1400 WRAITH, Prozessor` becomes `AMD_Ryzen_5_1400_WRAITH__Prozessor`.
fn image_slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
