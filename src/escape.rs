use std::borrow::Cow;

use crate::error::MatchError;

/// Drops every trailing `/`. Applied to templates and paths alike.
pub fn trim_trailing_slashes(s: &str) -> &str {
    s.trim_end_matches('/')
}

/// Escapes literal template text for embedding in a pattern.
///
/// `regex::escape` covers `-` too, so literal text never forms a class range.
pub fn escape_literal(text: &str) -> String {
    regex::escape(text)
}

/// Percent-decodes a captured value.
///
/// `+` is left as is. A `%` not followed by two hex digits, or escapes that
/// decode to invalid UTF-8, are reported as [`MatchError::MalformedValue`].
pub fn decode_value(name: &str, raw: &str) -> Result<String, MatchError> {
    let malformed = || MatchError::MalformedValue {
        name: name.to_owned(),
        value: raw.to_owned(),
    };

    if !has_valid_escapes(raw) {
        return Err(malformed());
    }

    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .map_err(|_| malformed())
}

// urlencoding passes stray `%` through untouched, so check them up front.
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1..i + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => return false,
        }
    }
    true
}
