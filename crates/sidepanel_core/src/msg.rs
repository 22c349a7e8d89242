#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the address bar.
    AddressInputChanged(String),
    /// User submitted the address bar.
    NavigationSubmitted,
    /// Programmatic "open this URL"; no resolution is applied.
    OpenUrl(String),
    /// Viewport finished loading. `title` is `None` when unreadable.
    ViewportLoaded {
        effective_url: String,
        title: Option<String>,
    },
    /// Anchor click inside the viewport.
    AnchorClicked {
        href: String,
        opens_new_context: bool,
    },
    /// Settings store replied to a load request.
    SettingsLoaded {
        default_homepage: Option<String>,
        bookmarks: Option<Vec<crate::Bookmark>>,
        theme: Option<crate::Theme>,
    },
    BookmarkDrawerOpened,
    BookmarkDrawerClosed,
    /// Bookmark source replied with the native tree.
    NativeBookmarksLoaded(Vec<crate::BookmarkNode>),
    /// Bookmark the active page. `page_title` is `None` when the page
    /// could not be read (e.g. cross-origin).
    AddCurrentPageBookmark {
        id: String,
        page_title: Option<String>,
    },
    RemoveBookmark {
        id: String,
    },
    OpenBookmark {
        url: String,
    },
    SettingsOpened,
    SettingsClosed,
    HomepageDraftChanged(String),
    SettingsSaved,
    ThemeToggled,
}
