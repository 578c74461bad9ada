use tracing::debug;
use url::Url;

use crate::error::ParseError;
use crate::extractor::Ruleset;
use crate::sites;

/// Parses an absolute URL, rejecting anything without a host.
pub fn parse_url(url: &str) -> Result<Url, ParseError> {
    let parsed = Url::parse(url).map_err(|e| ParseError::MalformedUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ParseError::MalformedUrl {
            url: url.to_string(),
            reason: "url has no host".to_string(),
        });
    }

    Ok(parsed)
}

/// Host of `url` with a single leading `www.` label removed.
pub fn normalized_host(url: &Url) -> Option<&str> {
    url.host_str()
        .map(|host| host.strip_prefix("www.").unwrap_or(host))
}

/// Ordered table of rulesets, looked up by domain.
#[derive(Debug, Clone)]
pub struct SiteDispatcher {
    rulesets: Vec<&'static Ruleset>,
}

impl SiteDispatcher {
    /// Dispatcher with every built-in shop registered.
    pub fn new() -> Self {
        Self {
            rulesets: sites::ALL.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self {
            rulesets: Vec::new(),
        }
    }

    /// Appends a ruleset. Earlier registrations win when domains overlap.
    pub fn register(&mut self, ruleset: &'static Ruleset) -> &mut Self {
        self.rulesets.push(ruleset);
        self
    }

    /// Selects the ruleset owning the URL's host.
    pub fn select(&self, url: &str) -> Result<&'static Ruleset, ParseError> {
        let parsed = parse_url(url)?;
        self.select_for(&parsed)
    }

    pub fn select_for(&self, url: &Url) -> Result<&'static Ruleset, ParseError> {
        let host = normalized_host(url).ok_or_else(|| ParseError::MalformedUrl {
            url: url.to_string(),
            reason: "url has no host".to_string(),
        })?;

        let ruleset = self
            .rulesets
            .iter()
            .copied()
            .find(|ruleset| ruleset.matches(host))
            .ok_or_else(|| ParseError::UnsupportedSite {
                host: host.to_string(),
            })?;

        debug!(host, ruleset = ruleset.name, "selected ruleset");
        Ok(ruleset)
    }

    pub fn rulesets(&self) -> &[&'static Ruleset] {
        &self.rulesets
    }

    /// Every domain across all registered rulesets, in registration order.
    pub fn registered_domains(&self) -> Vec<&'static str> {
        self.rulesets
            .iter()
            .flat_map(|ruleset| ruleset.domains.iter().copied())
            .collect()
    }
}

impl Default for SiteDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
