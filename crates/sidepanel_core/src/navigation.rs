//! Address bar and viewport URL tracking.
//!
//! `address_bar_text` follows keystrokes; `active_url` is what the viewport
//! was last told to show (or reported showing). Every operation that returns
//! a URL expects the caller to hand that URL to the viewport host.

use panel_logging::{panel_debug, panel_trace};

use crate::link::{self, LinkAction};
use crate::resolve::{resolve, ResolvedUrl};

/// Location reported by a viewport that has nothing loaded.
pub const BLANK_PAGE: &str = "about:blank";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    address_bar_text: String,
    active_url: String,
    loading: bool,
}

impl NavigationState {
    /// Starts showing `homepage`, with a load in flight.
    pub fn new(homepage: impl Into<String>) -> Self {
        let homepage = homepage.into();
        Self {
            address_bar_text: homepage.clone(),
            active_url: homepage,
            loading: true,
        }
    }

    pub fn address_bar_text(&self) -> &str {
        &self.address_bar_text
    }

    pub fn active_url(&self) -> &str {
        &self.active_url
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Keystroke in the address bar. Does not navigate.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.address_bar_text = text.into();
    }

    /// Resolves the typed text and targets the viewport at it.
    ///
    /// The address bar keeps the typed text until the viewport reports the
    /// effective URL.
    pub fn submit(&mut self) -> ResolvedUrl {
        let resolved = resolve(&self.address_bar_text);
        panel_debug!(
            "address bar submit: {:?} -> {}",
            self.address_bar_text,
            resolved
        );
        self.active_url = resolved.as_str().to_string();
        self.loading = true;
        resolved
    }

    /// Navigation from bookmarks, settings, or startup.
    ///
    /// The URL is taken as-is: stored bookmarks and homepages are expected to
    /// be absolute already, and no scheme is added here.
    pub fn navigate_external(&mut self, url: impl Into<String>) -> String {
        let url = url.into();
        panel_debug!("external navigation to {}", url);
        self.address_bar_text = url.clone();
        self.active_url = url.clone();
        self.loading = true;
        url
    }

    /// Load-complete report from the viewport host.
    ///
    /// Returns `false` when the report was the blank sentinel and nothing
    /// changed. Reports for superseded loads are still applied.
    pub fn viewport_loaded(&mut self, effective_url: &str) -> bool {
        if effective_url == BLANK_PAGE {
            panel_trace!("ignoring blank page load report");
            return false;
        }
        self.address_bar_text = effective_url.to_string();
        self.active_url = effective_url.to_string();
        self.loading = false;
        true
    }

    /// New-context link click inside the viewport.
    ///
    /// Relative hrefs are resolved against the active URL. A redirect leaves
    /// the state exactly as [`Self::navigate_external`] would; the returned
    /// action carries the URL to load.
    pub fn intercept_link(&mut self, href: &str, opens_new_context: bool) -> LinkAction {
        let action = link::intercept(href, opens_new_context, &self.active_url);
        if let LinkAction::Redirect(url) = &action {
            panel_debug!("redirecting new-context link into viewport: {}", url);
            self.navigate_external(url.as_str());
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_leaves_active_url_alone() {
        let mut nav = NavigationState::new("https://home.example");
        nav.edit("partial");
        assert_eq!(nav.address_bar_text(), "partial");
        assert_eq!(nav.active_url(), "https://home.example");
    }

    #[test]
    fn submit_keeps_typed_text() {
        let mut nav = NavigationState::new("https://home.example");
        nav.edit("rust.org");
        let url = nav.submit();
        assert_eq!(url.as_str(), "https://rust.org");
        assert_eq!(nav.active_url(), "https://rust.org");
        assert_eq!(nav.address_bar_text(), "rust.org");
        assert!(nav.is_loading());
    }

    #[test]
    fn load_report_clears_loading() {
        let mut nav = NavigationState::new("https://home.example");
        assert!(nav.viewport_loaded("https://home.example/"));
        assert!(!nav.is_loading());
    }

    #[test]
    fn blank_report_keeps_loading_flag() {
        let mut nav = NavigationState::new("https://home.example");
        assert!(!nav.viewport_loaded(BLANK_PAGE));
        assert!(nav.is_loading());
    }
}
