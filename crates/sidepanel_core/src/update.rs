use panel_logging::{panel_debug, panel_info};

use crate::{AppState, Bookmark, Effect, LinkAction, Msg, NoticeLevel};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AddressInputChanged(text) => {
            if text != state.navigation.address_bar_text() {
                state.navigation.edit(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NavigationSubmitted => {
            let url = state.navigation.submit();
            state.page_title = None;
            state.mark_dirty();
            vec![Effect::LoadViewport {
                url: url.into_string(),
            }]
        }
        Msg::OpenUrl(url) => open_external(&mut state, url),
        Msg::ViewportLoaded {
            effective_url,
            title,
        } => {
            if state.navigation.viewport_loaded(&effective_url) {
                state.page_title = title;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AnchorClicked {
            href,
            opens_new_context,
        } => match state.navigation.intercept_link(&href, opens_new_context) {
            LinkAction::Redirect(url) => {
                state.page_title = None;
                state.mark_dirty();
                vec![Effect::LoadViewport { url }]
            }
            LinkAction::Ignore => Vec::new(),
        },
        Msg::SettingsLoaded {
            default_homepage,
            bookmarks,
            theme,
        } => apply_loaded_settings(&mut state, default_homepage, bookmarks, theme),
        Msg::BookmarkDrawerOpened => {
            if state.drawer.open {
                Vec::new()
            } else {
                state.drawer.open = true;
                state.drawer.loading_native = true;
                state.mark_dirty();
                vec![Effect::LoadNativeBookmarks]
            }
        }
        Msg::BookmarkDrawerClosed => {
            if state.drawer.open {
                state.drawer.open = false;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NativeBookmarksLoaded(forest) => {
            state.drawer.native = forest;
            state.drawer.loading_native = false;
            state.mark_dirty();
            Vec::new()
        }
        Msg::AddCurrentPageBookmark { id, page_title } => add_bookmark(&mut state, id, page_title),
        Msg::RemoveBookmark { id } => {
            let before = state.bookmarks.len();
            state.bookmarks.retain(|b| b.id != id);
            if state.bookmarks.len() == before {
                panel_debug!("remove ignored, no bookmark with id {}", id);
                Vec::new()
            } else {
                state.mark_dirty();
                vec![
                    Effect::PersistBookmarks(state.bookmarks.clone()),
                    notice(NoticeLevel::Info, "Bookmark removed"),
                ]
            }
        }
        Msg::OpenBookmark { url } => {
            state.drawer.open = false;
            open_external(&mut state, url)
        }
        Msg::SettingsOpened => {
            state.settings.homepage_draft = state.default_homepage.clone();
            state.settings.open = true;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SettingsClosed => {
            if state.settings.open {
                state.settings.open = false;
                state.settings.homepage_draft.clear();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HomepageDraftChanged(text) => {
            if text != state.settings.homepage_draft {
                state.settings.homepage_draft = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SettingsSaved => {
            if !state.settings.open {
                return (state, Vec::new());
            }
            let homepage = std::mem::take(&mut state.settings.homepage_draft);
            state.settings.open = false;
            state.default_homepage = homepage.clone();
            panel_info!("default homepage set to {}", homepage);
            let mut effects = open_external(&mut state, homepage.clone());
            effects.push(Effect::PersistHomepage(homepage));
            effects.push(notice(NoticeLevel::Success, "Settings saved"));
            effects
        }
        Msg::ThemeToggled => {
            state.theme = state.theme.next();
            state.mark_dirty();
            vec![Effect::PersistTheme(state.theme)]
        }
    };

    (state, effects)
}

fn open_external(state: &mut AppState, url: String) -> Vec<Effect> {
    let url = state.navigation.navigate_external(url);
    state.page_title = None;
    state.mark_dirty();
    vec![Effect::LoadViewport { url }]
}

fn apply_loaded_settings(
    state: &mut AppState,
    default_homepage: Option<String>,
    bookmarks: Option<Vec<Bookmark>>,
    theme: Option<crate::Theme>,
) -> Vec<Effect> {
    if let Some(bookmarks) = bookmarks {
        panel_debug!("restored {} bookmarks", bookmarks.len());
        state.bookmarks = bookmarks;
        state.mark_dirty();
    }
    if let Some(theme) = theme {
        state.theme = theme;
        state.mark_dirty();
    }
    match default_homepage {
        Some(homepage) if !homepage.is_empty() && homepage != state.default_homepage => {
            state.default_homepage = homepage.clone();
            open_external(state, homepage)
        }
        _ => Vec::new(),
    }
}

fn add_bookmark(state: &mut AppState, id: String, page_title: Option<String>) -> Vec<Effect> {
    let url = state.navigation.active_url().to_string();
    let title = page_title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| url.clone());
    let id = unique_id(&state.bookmarks, id);
    let bookmark = Bookmark::new(id, title, url);
    if bookmark.favicon.is_none() {
        panel_debug!("no host in {}, bookmark stored without favicon", bookmark.url);
    }
    state.bookmarks.push(bookmark);
    state.mark_dirty();
    vec![
        Effect::PersistBookmarks(state.bookmarks.clone()),
        notice(NoticeLevel::Success, "Bookmark added"),
    ]
}

fn unique_id(existing: &[Bookmark], id: String) -> String {
    let taken = |candidate: &str| existing.iter().any(|b| b.id == candidate);
    if !taken(&id) {
        return id;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{id}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn notice(level: NoticeLevel, message: &str) -> Effect {
    Effect::Notify {
        level,
        message: message.to_string(),
    }
}
