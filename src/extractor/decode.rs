use tracing::warn;

/// Decodes a fetched page as UTF-8.
///
/// A byte order mark is dropped and malformed sequences become U+FFFD, so a
/// page with a stray Latin-1 byte still parses.
pub fn decode_utf8(body: &[u8]) -> String {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(body);
    if had_errors {
        warn!(bytes = body.len(), "page is not valid utf-8, replaced malformed sequences");
    }
    text.into_owned()
}
