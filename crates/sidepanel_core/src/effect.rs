use crate::{Bookmark, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Point the viewport host at `url`.
    LoadViewport { url: String },
    /// Read `bookmarks`, `defaultHomepage` and `theme` from the settings store.
    LoadSettings,
    /// Ask the host browser for its bookmark tree.
    LoadNativeBookmarks,
    PersistBookmarks(Vec<Bookmark>),
    PersistHomepage(String),
    PersistTheme(Theme),
    /// Non-blocking toast.
    Notify { level: NoticeLevel, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}
