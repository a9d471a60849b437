//! Security-oriented default headers.

use std::collections::BTreeMap;

/// Headers merged into every request when `use_default_headers` is enabled.
///
/// These override LLM-supplied headers of the same name.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("Strict-Transport-Security", "max-age=31536000; includeSubDomains"),
    ("X-Frame-Options", "DENY"),
    ("X-Content-Type-Options", "nosniff"),
    ("X-XSS-Protection", "1; mode=block"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
    ("Content-Security-Policy", "default-src 'self'"),
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
    ("Access-Control-Allow-Origin", "http://localhost"),
    ("Access-Control-Allow-Methods", "*"),
    ("Access-Control-Allow-Headers", "*"),
];

/// Merge [`DEFAULT_HEADERS`] into `headers`.
///
/// Header names compare case-insensitively, so an LLM-supplied `accept`
/// is replaced by the default `Accept` rather than sent alongside it.
pub fn merge_default_headers(headers: &mut BTreeMap<String, String>) {
    for (name, value) in DEFAULT_HEADERS {
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        headers.insert((*name).to_string(), (*value).to_string());
    }
}

/// Whether `headers` already carries `name`, ignoring case.
pub(crate) fn has_header(headers: &BTreeMap<String, String>, name: &str) -> bool {
    headers.keys().any(|existing| existing.eq_ignore_ascii_case(name))
}
