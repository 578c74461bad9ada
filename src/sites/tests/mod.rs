use rust_decimal::Decimal;
use std::fs;

use crate::error::{ExtractError, Field, ParseError};
use crate::extractor::{Ruleset, extract_product};
use crate::model::{Currency, Discount, ImageVariant, Product};
use crate::sites::{alternate, amazon, bonprix, conrad, cyberport};

const ALTERNATE_URL: &str = "https://www.alternate.de/AMD/Ryzen-5-1400-WRAITH-Prozessor/html/product/1340575";
const AMAZON_URL: &str = "https://www.amazon.de/gp/product/B002OLT9R8";
const BONPRIX_URL: &str = "https://www.bonprix.de/produkt/jeans-straight-blau-905358/";
const CONRAD_URL: &str =
    "https://www.conrad.de/de/holzduebel-wolfcraft-40-mm-10-mm-2910000-30-st-484626.html";
const CYBERPORT_URL: &str = "https://www.cyberport.de/apple-macbook-pro-13-3-retina-2017-i5-2-3-8-128-gb-iip640-space-grau-mpxq2d-a-1A09-0AY_8465.html";

fn fixture(path: &str) -> String {
    fs::read_to_string(format!("src/sites/tests/fixtures/{path}"))
        .expect("Failed to read test fixture")
}

fn parse(ruleset: &Ruleset, url: &str, path: &str) -> Product {
    extract_product(ruleset, url, &fixture(path)).expect("Failed to extract product")
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

fn assert_discount(actual: &Discount, old_price: &str, amount: &str, percentage: &str) {
    assert_eq!(actual.old_price, dec(old_price));
    assert_eq!(actual.amount, dec(amount));
    assert_eq!(actual.percentage, dec(percentage));
}

#[test]
fn test_alternate_regular() {
    let product = parse(&alternate::RULESET, ALTERNATE_URL, "alternate/sample_regular.html");

    assert_eq!(product.title, "AMD Ryzen 5 1400 WRAITH, Prozessor");
    assert_eq!(product.url, ALTERNATE_URL);
    assert_eq!(product.external_id, "1340575");
    assert!(product.description.starts_with("Der AMD Ryzen 5 1400 Processor"));
    assert_eq!(product.price.currency, Currency::Eur);
    assert!(product.price.discount.is_none());
}

#[test]
fn test_alternate_images() {
    let product = parse(&alternate::RULESET, ALTERNATE_URL, "alternate/sample_regular.html");

    assert_eq!(product.images.len(), 3);

    let first = &product.images[0].variants;
    assert_eq!(first.len(), 2);
    assert!(first.contains(&ImageVariant::new(
        "https://www.alternate.de/p/50x50/h/AMD_Ryzen_5_1400_WRAITH__Prozessor@@hr5a01.jpg",
        50,
        50
    )));
    assert!(first.contains(&ImageVariant::new(
        "https://www.alternate.de/p/230x230/h/AMD_Ryzen_5_1400_WRAITH__Prozessor@@hr5a01.jpg",
        230,
        230
    )));

    assert_eq!(
        product.images[2].variants[0].url,
        "https://www.alternate.de/p/230x230/h/AMD_Ryzen_5_1400_WRAITH__Prozessor@@hr5a01_2.jpg"
    );
}

#[test]
fn test_alternate_discounted() {
    let product = parse(&alternate::RULESET, ALTERNATE_URL, "alternate/sample_discounted.html");

    assert_eq!(product.title, "Crucial MX300 525 GB, Solid State Drive");
    assert_eq!(product.external_id, "1289011");
    assert_eq!(product.price.current_price, dec("132.90"));
    assert_discount(product.price.discount.as_ref().unwrap(), "134.90", "2.00", "1.48");

    // No carousel on this page
    assert_eq!(product.images.len(), 1);
}

#[test]
fn test_amazon_game_of_thrones() {
    let product = parse(&amazon::RULESET, AMAZON_URL, "amazon/sample_game_of_thrones_s7.html");

    assert_eq!(product.title, "Game of Thrones: Die komplette 7. Staffel [Blu-ray]");
    assert_eq!(product.url, AMAZON_URL);
    assert_eq!(product.external_id, "B0743DGBT8");

    assert_eq!(product.price.current_price, dec("29.99"));
    assert_eq!(product.price.currency, Currency::Eur);
    assert!(product.price.discount.is_none());

    assert_eq!(product.images.len(), 3);
    let first = &product.images[0].variants;
    assert_eq!(first.len(), 5);
    assert_eq!(
        first[0],
        ImageVariant::new(
            "https://images-na.ssl-images-amazon.com/images/I/81AizGC%2BCeL._SX342_.jpg",
            342,
            432
        )
    );
    assert_eq!(
        first[1],
        ImageVariant::new(
            "https://images-na.ssl-images-amazon.com/images/I/81AizGC%2BCeL._SX385_.jpg",
            385,
            486
        )
    );
}

#[test]
fn test_amazon_discounted() {
    let product = parse(&amazon::RULESET, AMAZON_URL, "amazon/sample_discounted.html");

    assert_eq!(product.price.current_price, dec("12.99"));
    assert_discount(product.price.discount.as_ref().unwrap(), "25.99", "13.00", "50");
    assert!(product.images.is_empty());
}

#[test]
fn test_amazon_currency_by_marketplace() {
    for (url, expected) in [
        ("https://amazon.de/123", Currency::Eur),
        ("http://amazon.com/123", Currency::Usd),
    ] {
        let product = parse(&amazon::RULESET, url, "amazon/sample_discounted.html");
        assert_eq!(product.price.currency, expected, "{url}");
    }
}

#[test]
fn test_amazon_unknown_marketplace() {
    let err = extract_product(
        &amazon::RULESET,
        "https://www.amazon.fr/dp/B0743DGBT8",
        &fixture("amazon/sample_discounted.html"),
    )
    .unwrap_err();

    assert!(matches!(err, ParseError::UnknownCurrency(_)));
}

#[test]
fn test_bonprix_regular() {
    let product = parse(&bonprix::RULESET, BONPRIX_URL, "bonprix/sample_regular.html");

    assert_eq!(product.title, "Jeans Regular Fit Straight");
    assert_eq!(product.external_id, "90535895");
    assert!(
        product
            .description
            .starts_with("Diese Herren Jeans Regular Fit von John Baner")
    );
    assert_eq!(product.price.current_price, dec("19.99"));
    assert!(product.price.discount.is_none());

    assert_eq!(product.images.len(), 7);
    assert_eq!(
        product.images[0].variants,
        vec![
            ImageVariant::new(
                "https://image01.bonprix.de/assets/319x448/1511338838/15045955-hDEd0CBM.jpg",
                319,
                448
            ),
            ImageVariant::new(
                "https://image01.bonprix.de/assets/957x1344/1511338838/15045955-hDEd0CBM.jpg",
                957,
                1344
            ),
            ImageVariant::new(
                "https://image01.bonprix.de/assets/31x44/1511338838/15045955-hDEd0CBM.jpg",
                31,
                44
            ),
        ]
    );
    assert!(product.images.iter().all(|image| image.variants.len() == 3));
}

#[test]
fn test_bonprix_discounted() {
    let product = parse(&bonprix::RULESET, BONPRIX_URL, "bonprix/sample_discounted.html");

    assert_eq!(product.price.current_price, dec("9.99"));
    assert_discount(product.price.discount.as_ref().unwrap(), "12.99", "3", "23.09");
}

#[test]
fn test_conrad_regular() {
    let product = parse(&conrad::RULESET, CONRAD_URL, "conrad/sample_regular.html");

    assert_eq!(product.title, "Raspberry Pi® 3 Model B Advanced-Set 1 GB");
    assert_eq!(product.url, CONRAD_URL);
    assert_eq!(product.external_id, "1419717");
    assert!(
        product
            .description
            .starts_with("Der Raspberry Pi® 3 ist die leistungsstarke Weiterentwicklung")
    );
    assert_eq!(product.price.current_price, dec("84.99"));
}

#[test]
fn test_conrad_images() {
    let product = parse(&conrad::RULESET, CONRAD_URL, "conrad/sample_regular.html");

    assert_eq!(product.images.len(), 4);

    let first = &product.images[0].variants;
    assert_eq!(first.len(), 2);
    assert!(first.contains(&ImageVariant::new(
        "https://asset.conrad.com/media10/isa/160267/c1/-/de/1419717_GB_01_FB/raspberry-pi-3-model-b-advanced-set-1-gb.jpg?x=520&y=520",
        520,
        520
    )));
    assert!(first.contains(&ImageVariant::new(
        "https://asset.conrad.com/media10/isa/160267/c1/-/de/1419717_GB_01_FB/raspberry-pi-3-model-b-advanced-set-1-gb.jpg?x=76&y=76",
        76,
        76
    )));
}

#[test]
fn test_conrad_discounted() {
    let product = parse(&conrad::RULESET, CONRAD_URL, "conrad/sample_discounted.html");

    assert_eq!(product.price.current_price, dec("40.99"));
    assert_discount(product.price.discount.as_ref().unwrap(), "54.99", "14", "25.46");
}

#[test]
fn test_cyberport_regular() {
    let product = parse(&cyberport::RULESET, CYBERPORT_URL, "cyberport/sample_regular.html");

    assert_eq!(
        product.title,
        "Apple MacBook Pro 13,3\" Retina 2017 i5 2,3/8/128 GB IIP640 Space Grau MPXQ2D/A"
    );
    assert_eq!(product.external_id, "1A09-0AY_8465");
    assert!(
        product
            .description
            .starts_with("Es ist schneller und leistungsstärker")
    );
    assert!(!product.description.contains("<script"));
    assert_eq!(product.price.current_price, dec("1333.00"));
    assert!(product.images.is_empty());
}

#[test]
fn test_cyberport_discounted() {
    let product = parse(&cyberport::RULESET, CYBERPORT_URL, "cyberport/sample_discounted.html");

    assert_eq!(product.price.current_price, dec("89.90"));
    assert_discount(product.price.discount.as_ref().unwrap(), "109.00", "19.10", "17.52");
}

#[test]
fn test_missing_title_fails_extraction() {
    let html = fixture("conrad/sample_regular.html").replace(
        "<h1 class=\"ccpProductDetail__title__text\">Raspberry Pi® 3 Model B Advanced-Set 1 GB</h1>",
        "",
    );

    let err = extract_product(&conrad::RULESET, CONRAD_URL, &html).unwrap_err();
    assert!(matches!(
        err,
        ParseError::FieldExtraction {
            field: Field::Title,
            cause: ExtractError::NotFound(_)
        }
    ));
}

#[test]
fn test_old_price_below_current_is_rejected() {
    let html = fixture("cyberport/sample_discounted.html").replace("109,00", "79,00");

    let err = extract_product(&cyberport::RULESET, CYBERPORT_URL, &html).unwrap_err();
    assert!(matches!(err, ParseError::InvalidDiscountInput { .. }));
}

#[test]
fn test_same_page_same_product() {
    let first = parse(&bonprix::RULESET, BONPRIX_URL, "bonprix/sample_regular.html");
    let second = parse(&bonprix::RULESET, BONPRIX_URL, "bonprix/sample_regular.html");
    assert_eq!(first, second);
}

#[test]
fn test_product_serializes_prices_as_strings() {
    let product = parse(&conrad::RULESET, CONRAD_URL, "conrad/sample_discounted.html");
    let json = serde_json::to_value(&product).unwrap();

    assert_eq!(json["price"]["current_price"], "40.99");
    assert_eq!(json["price"]["currency"], "EUR");
    assert_eq!(json["price"]["discount"]["percentage"], "25.46");
}
