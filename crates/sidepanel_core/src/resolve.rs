use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of every search-fallback URL.
pub const SEARCH_URL_PREFIX: &str = "https://www.google.com/search?q=";

const HTTP: &str = "http://";
const HTTPS: &str = "https://";

/// An absolute URL that begins with `http://` or `https://`.
///
/// Only [`resolve`] and [`ResolvedUrl::parse`] construct values, so anything
/// handed to the viewport through this type carries a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResolvedUrl(String);

impl ResolvedUrl {
    /// Accepts `raw` only if it already has an http(s) scheme.
    pub fn parse(raw: &str) -> Option<Self> {
        has_http_scheme(raw).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ResolvedUrl> for String {
    fn from(url: ResolvedUrl) -> Self {
        url.0
    }
}

impl TryFrom<String> for ResolvedUrl {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if has_http_scheme(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!("not an absolute http(s) url: {raw}"))
        }
    }
}

/// Turns address-bar input into a URL the viewport can load.
///
/// Input that already carries an http(s) scheme passes through unchanged.
/// Domain-shaped input gets `https://` prepended. Anything else becomes a
/// search query. Never fails: every string maps to some [`ResolvedUrl`].
pub fn resolve(input: &str) -> ResolvedUrl {
    if has_http_scheme(input) {
        return ResolvedUrl(input.to_string());
    }
    if looks_like_domain(input) {
        return ResolvedUrl(format!("{HTTPS}{input}"));
    }
    ResolvedUrl(format!("{SEARCH_URL_PREFIX}{}", urlencoding::encode(input)))
}

/// Scheme check, ASCII case-insensitive on the scheme token.
pub fn has_http_scheme(input: &str) -> bool {
    starts_with_ignore_case(input, HTTPS) || starts_with_ignore_case(input, HTTP)
}

pub(crate) fn starts_with_ignore_case(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Matches `([a-z0-9]+(-[a-z0-9]+)*\.)+[a-z]{2,}`, case-insensitively.
///
/// Every label before the last is alphanumeric with single inner hyphens;
/// the final label is at least two letters.
pub fn looks_like_domain(input: &str) -> bool {
    let Some((labels, tld)) = input.rsplit_once('.') else {
        return false;
    };
    if tld.len() < 2 || !tld.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    labels.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    // Hyphen-separated runs must all be non-empty: no leading, trailing or doubled hyphens.
    !label.is_empty()
        && label
            .split('-')
            .all(|run| !run.is_empty() && run.bytes().all(|b| b.is_ascii_alphanumeric()))
}
