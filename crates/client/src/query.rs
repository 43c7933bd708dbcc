//! Query-string encoding.
//!
//! Options types produce `(key, value)` pairs with unset fields already
//! omitted; this module only percent-encodes and joins them.

use std::borrow::Cow;

/// Encodes `pairs` as a query string, `?` included.
///
/// Returns an empty string when there is nothing to encode, so callers can
/// append the result to a path unconditionally.
pub fn encode_pairs<'a, K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: Into<Cow<'a, str>>,
    V: AsRef<str>,
{
    let encoded: Vec<String> = pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key.into(), urlencoding::encode(value.as_ref())))
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}
