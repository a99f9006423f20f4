//! Percent-encoding for free-form names used as route segments.
//!
//! Category names are free-form: spaces, accents, `%`, `?` and `/` are all
//! legal, so they must be encoded on the way into a URL and decoded on the
//! way out before any comparison.

#[cfg(test)]
#[path = "uri_test.rs"]
mod uri_test;

use std::borrow::Cow;

/// Encode a free-form name as a single path segment.
pub fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Decode a percent-encoded path segment. Input that does not decode to
/// valid UTF-8 is returned as-is.
pub fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), Cow::into_owned)
}
