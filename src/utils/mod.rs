use std::sync::LazyLock;

use regex::Regex;
use url::form_urlencoded;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Loose sanity check: something@domain.tld, no whitespace
pub fn is_valid_email(input: &str) -> bool {
    EMAIL
        .as_ref()
        .is_some_and(|re| re.is_match(input.trim()))
}

/// Percent-encode a mailto header value (spaces as %20, not '+')
pub fn encode_mailto_component(value: &str) -> String {
    // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
