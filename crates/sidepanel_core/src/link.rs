use url::Url;

use crate::resolve::starts_with_ignore_case;

/// What to do with a clicked anchor inside the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Cancel the new-context open and load this absolute URL in the same viewport.
    Redirect(String),
    /// Let the host's default handling proceed.
    Ignore,
}

/// Decides whether a clicked anchor should be pulled into the viewport.
///
/// A single-pane browser has nowhere to put a second context, so every
/// new-context intent with a followable href is redirected in place.
/// Relative hrefs are joined against `base`, the page they were clicked on.
/// Absolute hrefs are kept as written.
pub fn intercept(href: &str, opens_new_context: bool, base: &str) -> LinkAction {
    if !opens_new_context || !is_followable_href(href) {
        return LinkAction::Ignore;
    }
    match absolute_href(href.trim(), base) {
        Some(url) => LinkAction::Redirect(url),
        None => LinkAction::Ignore,
    }
}

/// Rejects empty hrefs, the bare `#` placeholder, and `javascript:` links.
pub fn is_followable_href(href: &str) -> bool {
    let href = href.trim();
    !href.is_empty() && href != "#" && !starts_with_ignore_case(href, "javascript:")
}

fn absolute_href(href: &str, base: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => is_http(&url).then(|| href.to_string()),
        Err(_) => {
            let joined = Url::parse(base).ok()?.join(href).ok()?;
            is_http(&joined).then(|| joined.to_string())
        }
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
