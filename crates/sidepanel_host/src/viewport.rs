use thiserror::Error;

/// Why the loaded page could not be inspected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageAccessError {
    /// The page belongs to another origin than the embedding surface.
    #[error("page content belongs to another origin")]
    CrossOrigin,
}

/// Embeddable page-rendering surface (an iframe, a webview, ...).
pub trait ViewportHost {
    /// Start loading `url`, abandoning any load in flight.
    fn load(&mut self, url: &str);

    /// Title of the displayed page.
    fn page_title(&self) -> Result<String, PageAccessError>;
}

/// Notifications a viewport host delivers back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportEvent {
    LoadComplete { effective_url: String },
    AnchorClicked { href: String, opens_new_context: bool },
}
