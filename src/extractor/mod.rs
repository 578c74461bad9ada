pub mod cleaner;
pub mod decode;
pub mod locale;
pub mod ruleset;
pub mod select;

pub use decode::decode_utf8;
pub use ruleset::Ruleset;

use rust_decimal::Decimal;
use scraper::Html;
use tracing::{debug, instrument};
use url::Url;

use crate::dispatcher::parse_url;
use crate::error::{ExtractError, Field, ParseError};
use crate::model::{Price, Product};

/// Extracts a product from page source with the given ruleset.
///
/// Pure: the same `html` always yields the same product.
pub fn extract_product(ruleset: &Ruleset, url: &str, html: &str) -> Result<Product, ParseError> {
    let parsed_url = parse_url(url)?;
    let document = Html::parse_document(html);
    extract_document(ruleset, url, &parsed_url, &document)
}

/// Runs the ruleset's extractors over a parsed document.
///
/// Fields are extracted in a fixed order because currency needs the URL and
/// discount needs the current price. The first failing mandatory field aborts
/// the whole extraction.
#[instrument(skip_all, fields(ruleset = ruleset.name, url = %url))]
pub fn extract_document(
    ruleset: &Ruleset,
    url: &str,
    parsed_url: &Url,
    document: &Html,
) -> Result<Product, ParseError> {
    let external_id = required(Field::ExternalId, (ruleset.external_id)(document))?;
    let title = required(Field::Title, (ruleset.title)(document))?;
    let description = required(Field::Description, (ruleset.description)(document))?;

    let current_price = (ruleset.current_price)(document)
        .and_then(non_negative)
        .map_err(|e| ParseError::field(Field::CurrentPrice, e))?;
    let currency = (ruleset.currency)(parsed_url, document)
        .map_err(|e| ParseError::field(Field::Currency, e))?;
    let discount = (ruleset.discount)(current_price, document)
        .map_err(|e| ParseError::field(Field::Discount, e))?;
    let images = (ruleset.images)(document).map_err(|e| ParseError::field(Field::Images, e))?;

    debug!(
        external_id = %external_id,
        price = %current_price,
        currency = %currency,
        discounted = discount.is_some(),
        images = images.len(),
        "extracted product"
    );

    Ok(Product {
        url: url.to_string(),
        external_id,
        title,
        description,
        price: Price {
            current_price,
            currency,
            discount,
        },
        images,
    })
}

fn required(field: Field, value: Result<String, ExtractError>) -> Result<String, ParseError> {
    match value {
        Ok(value) if value.trim().is_empty() => Err(ParseError::field(field, ExtractError::Empty)),
        Ok(value) => Ok(value),
        Err(e) => Err(ParseError::field(field, e)),
    }
}

fn non_negative(price: Decimal) -> Result<Decimal, ExtractError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ExtractError::NegativePrice(price));
    }
    Ok(price)
}
