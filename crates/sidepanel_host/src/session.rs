use std::collections::VecDeque;
use std::sync::Arc;

use chrono::Utc;
use panel_logging::{panel_debug, panel_error, panel_info, panel_warn};
use sidepanel_core::{update, AppState, AppViewModel, Effect, Msg, NoticeLevel};

use crate::source::BookmarkSource;
use crate::store::{
    decode_settings, encode_setting, SettingKey, SettingsMap, SettingsStore, StoreError,
};
use crate::viewport::{ViewportEvent, ViewportHost};

/// Toast surfaced to the user; never blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub type IdSource = Arc<dyn Fn() -> String + Send + Sync>;

/// Owns the application state and its collaborators, and runs effects.
///
/// Store and source replies are queued as messages and processed after the
/// message that requested them, so every dispatch runs to quiescence.
pub struct Session<H, S, B> {
    state: AppState,
    viewport: H,
    store: S,
    source: B,
    inbox: VecDeque<Msg>,
    notices: Vec<Notice>,
    id_source: IdSource,
}

impl<H, S, B> Session<H, S, B>
where
    H: ViewportHost,
    S: SettingsStore,
    B: BookmarkSource,
{
    pub fn new(state: AppState, viewport: H, store: S, source: B) -> Self {
        Self {
            state,
            viewport,
            store,
            source,
            inbox: VecDeque::new(),
            notices: Vec::new(),
            id_source: Arc::new(|| Utc::now().timestamp_millis().to_string()),
        }
    }

    /// Replaces the bookmark id generator (wall-clock millis by default).
    pub fn with_id_source(mut self, id_source: IdSource) -> Self {
        self.id_source = id_source;
        self
    }

    /// Loads the homepage and requests stored settings.
    pub fn start(&mut self) {
        let effects = self.state.startup();
        panel_info!(
            "session starting at {}",
            self.state.navigation().active_url()
        );
        self.run_effects(effects);
        self.drain_inbox();
    }

    pub fn dispatch(&mut self, msg: Msg) {
        self.inbox.push_back(msg);
        self.drain_inbox();
    }

    pub fn viewport_event(&mut self, event: ViewportEvent) {
        let msg = match event {
            ViewportEvent::LoadComplete { effective_url } => Msg::ViewportLoaded {
                effective_url,
                title: self.readable_title(),
            },
            ViewportEvent::AnchorClicked {
                href,
                opens_new_context,
            } => Msg::AnchorClicked {
                href,
                opens_new_context,
            },
        };
        self.dispatch(msg);
    }

    /// Bookmarks the page currently shown, using its title when readable.
    pub fn add_current_page_bookmark(&mut self) {
        let page_title = self.readable_title();
        let id = (self.id_source)();
        self.dispatch(Msg::AddCurrentPageBookmark { id, page_title });
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn viewport(&self) -> &H {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut H {
        &mut self.viewport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn readable_title(&self) -> Option<String> {
        match self.viewport.page_title() {
            Ok(title) => Some(title),
            Err(err) => {
                panel_debug!("page title unavailable: {}", err);
                None
            }
        }
    }

    fn drain_inbox(&mut self) {
        while let Some(msg) = self.inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            self.run_effects(effects);
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        let mut write_failed = false;
        for effect in effects {
            match effect {
                Effect::Notify {
                    level: NoticeLevel::Success,
                    message,
                } if write_failed => {
                    panel_debug!("dropping notice {:?} after failed write", message);
                }
                effect => write_failed |= !self.run_effect(effect),
            }
        }
    }

    /// Returns `false` when a settings write failed.
    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::LoadViewport { url } => {
                panel_info!("LoadViewport url={}", url);
                self.viewport.load(&url);
                true
            }
            Effect::LoadSettings => {
                match self.store.get(&SettingKey::ALL) {
                    Ok(values) => self.inbox.push_back(decode_settings(values)),
                    Err(err) => panel_warn!("Failed to load settings: {}", err),
                }
                true
            }
            Effect::LoadNativeBookmarks => {
                let forest = self.source.get_tree().unwrap_or_else(|err| {
                    panel_warn!("Failed to read browser bookmarks: {}", err);
                    Vec::new()
                });
                self.inbox.push_back(Msg::NativeBookmarksLoaded(forest));
                true
            }
            Effect::PersistBookmarks(bookmarks) => {
                let result = encode_setting(SettingKey::Bookmarks, &bookmarks);
                self.persist(result, "Could not save bookmarks")
            }
            Effect::PersistHomepage(homepage) => {
                let result = encode_setting(SettingKey::DefaultHomepage, &homepage);
                self.persist(result, "Could not save settings")
            }
            Effect::PersistTheme(theme) => {
                let result = encode_setting(SettingKey::Theme, &theme);
                self.persist(result, "Could not save theme")
            }
            Effect::Notify { level, message } => {
                panel_info!("notice {:?}: {}", level, message);
                self.notices.push(Notice { level, message });
                true
            }
        }
    }

    /// Best-effort write; in-memory state is never rolled back.
    fn persist(
        &mut self,
        values: Result<SettingsMap, StoreError>,
        failure_message: &str,
    ) -> bool {
        match values.and_then(|values| self.store.set(values)) {
            Ok(()) => true,
            Err(err) => {
                panel_error!("{}: {}", failure_message, err);
                self.notices.push(Notice {
                    level: NoticeLevel::Error,
                    message: failure_message.to_string(),
                });
                false
            }
        }
    }
}
