use serde::{Deserialize, Serialize};

use crate::model::{image::Image, price::Price};

/// A product as extracted from one shop page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The URL exactly as it was requested.
    pub url: String,
    /// Shop-specific article number, SKU or ASIN.
    pub external_id: String,
    pub title: String,
    /// Plain text for most shops, light HTML markup for some.
    pub description: String,
    pub price: Price,
    pub images: Vec<Image>,
}

impl Product {
    pub fn is_discounted(&self) -> bool {
        self.price.discount.is_some()
    }
}
