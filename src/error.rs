use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::fetcher::FetchError;
use crate::model::DiscountError;

/// Product fields, in the order the pipeline extracts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ExternalId,
    Title,
    Description,
    CurrentPrice,
    Currency,
    Discount,
    Images,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExternalId => "external_id",
            Self::Title => "title",
            Self::Description => "description",
            Self::CurrentPrice => "current_price",
            Self::Currency => "currency",
            Self::Discount => "discount",
            Self::Images => "images",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single extractor failed.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("nothing found for `{0}`")]
    NotFound(String),

    #[error("extracted value is empty")]
    Empty,

    #[error("negative price {0}")]
    NegativePrice(Decimal),

    #[error("invalid number {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("no dimensions in image url {0}")]
    MissingDimensions(String),

    #[error("invalid image dimension {0:?}")]
    InvalidDimension(String),

    #[error("malformed embedded json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown currency for {0}")]
    UnknownCurrency(String),

    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Terminal failure of a single parse call.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed url {url:?}: {reason}")]
    MalformedUrl { url: String, reason: String },

    #[error("no ruleset registered for host {host}")]
    UnsupportedSite { host: String },

    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("extracting {field} failed: {cause}")]
    FieldExtraction {
        field: Field,
        #[source]
        cause: ExtractError,
    },

    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("invalid discount input: old price {old_price}, new price {new_price}")]
    InvalidDiscountInput {
        old_price: Decimal,
        new_price: Decimal,
    },
}

impl ParseError {
    /// Attributes an extractor failure to `field`.
    ///
    /// Currency and discount-calculation failures have their own variants.
    pub fn field(field: Field, cause: ExtractError) -> Self {
        match cause {
            ExtractError::UnknownCurrency(source) => Self::UnknownCurrency(source),
            ExtractError::Discount(DiscountError::InvalidInput {
                old_price,
                new_price,
            }) => Self::InvalidDiscountInput {
                old_price,
                new_price,
            },
            cause => Self::FieldExtraction { field, cause },
        }
    }

    /// The field that failed, for extraction errors.
    pub fn failed_field(&self) -> Option<Field> {
        match self {
            Self::FieldExtraction { field, .. } => Some(*field),
            Self::UnknownCurrency(_) => Some(Field::Currency),
            Self::InvalidDiscountInput { .. } => Some(Field::Discount),
            _ => None,
        }
    }
}
