use serde::{Deserialize, Serialize};

/// One rendition of a product photograph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageVariant {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// A single photograph of a product, in every resolution the shop offers.
///
/// Variants keep document order; there is no primary rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub variants: Vec<ImageVariant>,
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_variant(&mut self, variant: ImageVariant) -> &mut Self {
        self.variants.push(variant);
        self
    }

    pub fn with_variant(mut self, variant: ImageVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Largest rendition by pixel area.
    pub fn largest(&self) -> Option<&ImageVariant> {
        self.variants
            .iter()
            .max_by_key(|v| u64::from(v.width) * u64::from(v.height))
    }
}
