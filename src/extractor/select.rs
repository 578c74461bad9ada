//! Selector helpers shared by the site rulesets.
//!
//! Text helpers collapse whitespace the way a browser renders it, and join
//! multiple matches with a single space. Helpers prefixed with `require_`
//! turn an empty result into [`ExtractError::NotFound`].

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

pub fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css.to_string(),
        reason: format!("{e:?}"),
    })
}

pub fn select_all<'a>(document: &'a Html, css: &str) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    let selector = selector(css)?;
    Ok(document.select(&selector).collect())
}

/// Whitespace-normalized text of one element and its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Text of every match, joined by a space. Empty when nothing matches.
pub fn text(document: &Html, css: &str) -> Result<String, ExtractError> {
    let parts: Vec<String> = select_all(document, css)?
        .into_iter()
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();
    Ok(parts.join(" "))
}

pub fn require_text(document: &Html, css: &str) -> Result<String, ExtractError> {
    let text = text(document, css)?;
    if text.is_empty() {
        return Err(ExtractError::NotFound(css.to_string()));
    }
    Ok(text)
}

/// Value of `name` on the first match that carries the attribute.
pub fn attr(document: &Html, css: &str, name: &str) -> Result<Option<String>, ExtractError> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .find_map(|element| element.value().attr(name))
        .map(|value| value.trim().to_string()))
}

pub fn require_attr(document: &Html, css: &str, name: &str) -> Result<String, ExtractError> {
    match attr(document, css, name)? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ExtractError::NotFound(format!("{css} @{name}"))),
    }
}

/// Direct text children of `element`, skipping blank ones, untrimmed.
pub fn own_text(element: ElementRef<'_>) -> Vec<&str> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .filter(|text| !text.trim().is_empty())
        .collect()
}

/// Inner HTML of every match, joined by newlines.
pub fn inner_html(document: &Html, css: &str) -> Result<String, ExtractError> {
    Ok(select_all(document, css)?
        .into_iter()
        .map(|element| element.inner_html())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
