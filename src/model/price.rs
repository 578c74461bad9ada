use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies the supported shops sell in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
    Chf,
}

impl Currency {
    /// ISO 4217 code, e.g. `"EUR"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Chf => "CHF",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrencyCode(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            "CHF" => Ok(Self::Chf),
            other => Err(UnknownCurrencyCode(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscountError {
    #[error("old price {old_price} must be positive and above the new price {new_price}")]
    InvalidInput {
        old_price: Decimal,
        new_price: Decimal,
    },
}

/// A markdown from a former price to the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub old_price: Decimal,
    pub amount: Decimal,
    pub percentage: Decimal,
}

impl Discount {
    /// Derives amount and percentage from a former and a current price.
    ///
    /// The ratio is rounded half-up to four fractional digits before it is
    /// scaled to a percentage, which is then rounded half-up to two digits.
    pub fn from_prices(old_price: Decimal, new_price: Decimal) -> Result<Self, DiscountError> {
        if old_price <= Decimal::ZERO || old_price <= new_price {
            return Err(DiscountError::InvalidInput {
                old_price,
                new_price,
            });
        }

        let amount = old_price - new_price;
        let percentage = ((amount / old_price)
            .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
            * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Ok(Self {
            old_price,
            amount,
            percentage,
        })
    }

    /// Takes the values a page displays at face value.
    pub fn scraped(old_price: Decimal, amount: Decimal, percentage: Decimal) -> Self {
        Self {
            old_price,
            amount,
            percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub current_price: Decimal,
    pub currency: Currency,
    pub discount: Option<Discount>,
}
