//! Side panel core: URL resolution, link interception, and the pure
//! application state machine.
mod bookmark;
mod effect;
mod link;
mod msg;
mod navigation;
mod resolve;
mod state;
mod update;
mod view_model;

pub use bookmark::{
    favicon_url, hostname, rows, Bookmark, BookmarkNode, BookmarkRow, NodeKind, Rows,
};
pub use effect::{Effect, NoticeLevel};
pub use link::{intercept, is_followable_href, LinkAction};
pub use msg::Msg;
pub use navigation::{NavigationState, BLANK_PAGE};
pub use resolve::{has_http_scheme, looks_like_domain, resolve, ResolvedUrl, SEARCH_URL_PREFIX};
pub use state::{AppState, Theme, DEFAULT_HOMEPAGE};
pub use update::update;
pub use view_model::{AppViewModel, BookmarkView, SettingsView};
