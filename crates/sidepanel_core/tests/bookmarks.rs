use pretty_assertions::assert_eq;
use sidepanel_core::{
    rows, update, AppState, Bookmark, BookmarkNode, Effect, Msg, NodeKind, NoticeLevel,
};

fn loaded_at(url: &str) -> AppState {
    let (state, _) = update(
        AppState::default(),
        Msg::ViewportLoaded {
            effective_url: url.to_string(),
            title: None,
        },
    );
    state
}

fn add(state: AppState, id: &str, title: Option<&str>) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::AddCurrentPageBookmark {
            id: id.to_string(),
            page_title: title.map(ToOwned::to_owned),
        },
    )
}

#[test]
fn add_uses_page_title_and_persists() {
    let (state, effects) = add(loaded_at("https://docs.rs/serde"), "100", Some("serde - Docs.rs"));

    let expected = Bookmark {
        id: "100".to_string(),
        title: "serde - Docs.rs".to_string(),
        url: "https://docs.rs/serde".to_string(),
        favicon: Some("https://www.google.com/s2/favicons?domain=docs.rs".to_string()),
    };
    assert_eq!(state.bookmarks(), &[expected.clone()]);
    assert_eq!(
        effects,
        vec![
            Effect::PersistBookmarks(vec![expected]),
            Effect::Notify {
                level: NoticeLevel::Success,
                message: "Bookmark added".to_string(),
            },
        ]
    );
}

#[test]
fn unreadable_or_blank_title_falls_back_to_url() {
    let (state, _) = add(loaded_at("https://cross.origin/page"), "1", None);
    let (state, _) = add(state, "2", Some("   "));

    let titles: Vec<_> = state.bookmarks().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["https://cross.origin/page", "https://cross.origin/page"]);
}

#[test]
fn colliding_ids_are_suffixed() {
    let (state, _) = add(loaded_at("https://a.io"), "7", None);
    let (state, _) = add(state, "7", None);
    let (state, _) = add(state, "7", None);

    let ids: Vec<_> = state.bookmarks().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "7-1", "7-2"]);
}

#[test]
fn hostless_url_is_bookmarked_without_favicon() {
    let (state, _) = update(AppState::default(), Msg::OpenUrl("example.com".to_string()));
    let (state, _) = add(state, "1", None);

    assert_eq!(state.bookmarks()[0].url, "example.com");
    assert_eq!(state.bookmarks()[0].favicon, None);
}

#[test]
fn remove_filters_by_id() {
    let (state, _) = add(loaded_at("https://a.io"), "1", Some("A"));
    let (state, _) = add(state, "2", Some("B"));

    let (state, effects) = update(state, Msg::RemoveBookmark { id: "1".to_string() });

    assert_eq!(state.bookmarks().len(), 1);
    assert_eq!(state.bookmarks()[0].title, "B");
    assert_eq!(
        effects,
        vec![
            Effect::PersistBookmarks(state.bookmarks().to_vec()),
            Effect::Notify {
                level: NoticeLevel::Info,
                message: "Bookmark removed".to_string(),
            },
        ]
    );
}

#[test]
fn remove_unknown_id_is_noop() {
    let (mut state, _) = add(loaded_at("https://a.io"), "1", Some("A"));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::RemoveBookmark { id: "nope".to_string() });

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.bookmarks().len(), 1);
}

#[test]
fn opening_bookmark_navigates_and_closes_drawer() {
    let (state, effects) = update(AppState::default(), Msg::BookmarkDrawerOpened);
    assert_eq!(effects, vec![Effect::LoadNativeBookmarks]);
    assert!(state.view().bookmark_drawer_open);
    assert!(state.view().native_bookmarks_loading);

    let (state, effects) = update(
        state,
        Msg::OpenBookmark {
            url: "https://saved.example/".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::LoadViewport {
            url: "https://saved.example/".to_string()
        }]
    );
    let view = state.view();
    assert!(!view.bookmark_drawer_open);
    assert_eq!(view.active_url, "https://saved.example/");
    assert_eq!(view.address_bar_text, "https://saved.example/");
}

#[test]
fn drawer_reopen_reloads_native_tree() {
    let (state, _) = update(AppState::default(), Msg::BookmarkDrawerOpened);
    let (state, effects) = update(state, Msg::BookmarkDrawerOpened);
    assert!(effects.is_empty());

    let tree = vec![BookmarkNode::leaf("1", "Rust", "https://rust-lang.org")];
    let (state, _) = update(state, Msg::NativeBookmarksLoaded(tree.clone()));
    assert_eq!(state.native_bookmarks(), tree.as_slice());
    assert!(!state.view().native_bookmarks_loading);

    let (state, _) = update(state, Msg::BookmarkDrawerClosed);
    let (_state, effects) = update(state, Msg::BookmarkDrawerOpened);
    assert_eq!(effects, vec![Effect::LoadNativeBookmarks]);
}

#[test]
fn tree_rows_walk_depth_first() {
    let forest = vec![BookmarkNode::folder(
        "0",
        "",
        vec![
            BookmarkNode::folder(
                "1",
                "Bookmarks bar",
                vec![
                    BookmarkNode::leaf("3", "Rust", "https://rust-lang.org"),
                    BookmarkNode::folder("4", "Empty", Vec::new()),
                ],
            ),
            BookmarkNode::leaf("2", "", "https://untitled.example"),
        ],
    )];

    let flat: Vec<_> = rows(&forest)
        .map(|row| (row.depth, row.kind, row.id, row.label, row.url))
        .collect();

    assert_eq!(
        flat,
        vec![
            (0, NodeKind::Folder, "0", "Bookmark".to_string(), None),
            (1, NodeKind::Folder, "1", "Bookmarks bar".to_string(), None),
            (2, NodeKind::Leaf, "3", "Rust".to_string(), Some("https://rust-lang.org")),
            (2, NodeKind::EmptyFolder, "4", "Empty (empty)".to_string(), None),
            (1, NodeKind::Leaf, "2", "Bookmark".to_string(), Some("https://untitled.example")),
        ]
    );
}

#[test]
fn tree_rows_are_lazy() {
    let forest: Vec<_> = (0..1000)
        .map(|i| BookmarkNode::leaf(i.to_string(), format!("n{i}"), "https://a.io"))
        .collect();

    let first_two: Vec<_> = rows(&forest).take(2).map(|row| row.id).collect();
    assert_eq!(first_two, vec!["0", "1"]);
}
