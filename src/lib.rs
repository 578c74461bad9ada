pub mod config;
pub mod dispatcher;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod model;
pub mod parser;
pub mod sites;

pub use dispatcher::SiteDispatcher;
pub use error::{ExtractError, Field, ParseError};
pub use extractor::Ruleset;
pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
pub use model::{Currency, Discount, Image, ImageVariant, Price, Product};
pub use parser::ECommerceParser;
