use ammonia::Builder;

/// Cleans description markup taken verbatim from a shop page.
///
/// Scripts, styles, event handlers and unknown tags are removed; basic
/// formatting (`<b>`, `<br>`, lists, links) survives.
pub fn sanitize_markup(html: &str) -> String {
    Builder::default().clean(html).to_string().trim().to_string()
}
