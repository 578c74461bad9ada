pub mod image;
pub mod price;
pub mod product;

pub use image::{Image, ImageVariant};
pub use price::{Currency, Discount, DiscountError, Price, UnknownCurrencyCode};
pub use product::Product;
