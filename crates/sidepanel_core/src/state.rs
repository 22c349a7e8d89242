use serde::{Deserialize, Serialize};

use crate::view_model::{AppViewModel, BookmarkView, SettingsView};
use crate::{Bookmark, BookmarkNode, Effect, NavigationState};

/// Homepage used until the settings store says otherwise.
pub const DEFAULT_HOMEPAGE: &str = "https://www.google.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Theme::System => Theme::Light,
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SettingsPanel {
    pub(crate) open: bool,
    pub(crate) homepage_draft: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct BookmarkDrawer {
    pub(crate) open: bool,
    pub(crate) loading_native: bool,
    pub(crate) native: Vec<BookmarkNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) navigation: NavigationState,
    pub(crate) page_title: Option<String>,
    pub(crate) default_homepage: String,
    pub(crate) bookmarks: Vec<Bookmark>,
    pub(crate) drawer: BookmarkDrawer,
    pub(crate) settings: SettingsPanel,
    pub(crate) theme: Theme,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_HOMEPAGE)
    }
}

impl AppState {
    pub fn new(initial_homepage: impl Into<String>) -> Self {
        let homepage = initial_homepage.into();
        Self {
            navigation: NavigationState::new(homepage.clone()),
            page_title: None,
            default_homepage: homepage,
            bookmarks: Vec::new(),
            drawer: BookmarkDrawer::default(),
            settings: SettingsPanel::default(),
            theme: Theme::default(),
            dirty: true,
        }
    }

    /// Effects a front-end runs once before dispatching any message.
    pub fn startup(&self) -> Vec<Effect> {
        vec![
            Effect::LoadViewport {
                url: self.navigation.active_url().to_string(),
            },
            Effect::LoadSettings,
        ]
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn native_bookmarks(&self) -> &[BookmarkNode] {
        &self.drawer.native
    }

    pub fn default_homepage(&self) -> &str {
        &self.default_homepage
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            address_bar_text: self.navigation.address_bar_text().to_string(),
            active_url: self.navigation.active_url().to_string(),
            loading: self.navigation.is_loading(),
            page_title: self.page_title.clone(),
            bookmarks: self
                .bookmarks
                .iter()
                .map(|b| BookmarkView {
                    id: b.id.clone(),
                    label: b.label().to_string(),
                    url: b.url.clone(),
                    favicon: b.favicon.clone(),
                })
                .collect(),
            bookmark_drawer_open: self.drawer.open,
            native_bookmarks_loading: self.drawer.loading_native,
            settings: SettingsView {
                open: self.settings.open,
                default_homepage: self.default_homepage.clone(),
                homepage_draft: self.settings.homepage_draft.clone(),
            },
            theme: self.theme,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Reports whether anything changed since the last call, then clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
