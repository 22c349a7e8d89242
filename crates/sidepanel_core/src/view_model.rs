use crate::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub address_bar_text: String,
    pub active_url: String,
    pub loading: bool,
    pub page_title: Option<String>,
    pub bookmarks: Vec<BookmarkView>,
    pub bookmark_drawer_open: bool,
    pub native_bookmarks_loading: bool,
    pub settings: SettingsView,
    pub theme: Theme,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkView {
    pub id: String,
    pub label: String,
    pub url: String,
    pub favicon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsView {
    pub open: bool,
    pub default_homepage: String,
    pub homepage_draft: String,
}
