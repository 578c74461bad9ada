use std::sync::Arc;

use tracing::{info, instrument};

use crate::dispatcher::{SiteDispatcher, parse_url};
use crate::error::ParseError;
use crate::extractor::{Ruleset, decode_utf8, extract_product};
use crate::fetcher::PageFetcher;
use crate::model::Product;

/// Turns product page URLs into [`Product`]s.
///
/// Cheap to clone; clones share the fetcher. One parse never blocks another,
/// so a single parser can serve many concurrent calls.
#[derive(Clone)]
pub struct ECommerceParser {
    dispatcher: SiteDispatcher,
    fetcher: Arc<dyn PageFetcher>,
}

impl ECommerceParser {
    /// Parser for every built-in shop.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::with_dispatcher(SiteDispatcher::new(), fetcher)
    }

    pub fn with_dispatcher(dispatcher: SiteDispatcher, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            dispatcher,
            fetcher,
        }
    }

    pub fn dispatcher(&self) -> &SiteDispatcher {
        &self.dispatcher
    }

    /// Selects the ruleset for `url`, then fetches and extracts the page.
    ///
    /// Unsupported hosts are rejected before any network traffic.
    #[instrument(skip(self), fields(ruleset = tracing::field::Empty))]
    pub async fn parse_link(&self, url: &str) -> Result<Product, ParseError> {
        let ruleset = self.dispatcher.select(url)?;
        tracing::Span::current().record("ruleset", ruleset.name);
        self.parse_with(ruleset, url).await
    }

    /// Fetches `url` and extracts it with an explicit ruleset, bypassing
    /// domain selection.
    pub async fn parse_with(&self, ruleset: &Ruleset, url: &str) -> Result<Product, ParseError> {
        parse_url(url)?;

        let body = self.fetcher.fetch(url).await?;
        let html = decode_utf8(&body);

        let product = extract_product(ruleset, url, &html)?;
        info!(
            external_id = %product.external_id,
            images = product.images.len(),
            "parsed product"
        );
        Ok(product)
    }
}
