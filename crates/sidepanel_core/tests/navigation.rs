use std::sync::Once;

use pretty_assertions::assert_eq;
use sidepanel_core::{update, AppState, Effect, Msg, BLANK_PAGE};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::AddressInputChanged(input.to_string()));
    update(state, Msg::NavigationSubmitted)
}

fn load(url: &str) -> Effect {
    Effect::LoadViewport {
        url: url.to_string(),
    }
}

#[test]
fn startup_loads_homepage_then_reads_settings() {
    init_logging();
    let state = AppState::new("https://start.example");
    let view = state.view();

    assert_eq!(view.active_url, "https://start.example");
    assert_eq!(view.address_bar_text, "https://start.example");
    assert!(view.loading);
    assert_eq!(
        state.startup(),
        vec![load("https://start.example"), Effect::LoadSettings]
    );
}

#[test]
fn default_state_uses_google_homepage() {
    assert_eq!(AppState::default().view().active_url, "https://www.google.com");
}

#[test]
fn submit_resolves_and_keeps_typed_text() {
    init_logging();
    let (state, effects) = submit(AppState::default(), "hello world");
    let view = state.view();

    assert_eq!(
        effects,
        vec![load("https://www.google.com/search?q=hello%20world")]
    );
    assert_eq!(view.active_url, "https://www.google.com/search?q=hello%20world");
    assert_eq!(view.address_bar_text, "hello world");
    assert!(view.loading);
}

#[test]
fn viewport_report_resyncs_address_bar() {
    init_logging();
    let (state, _) = submit(AppState::default(), "example.com");
    let (state, effects) = update(
        state,
        Msg::ViewportLoaded {
            effective_url: "https://www.example.com/".to_string(),
            title: Some("Example Domain".to_string()),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.active_url, "https://www.example.com/");
    assert_eq!(view.address_bar_text, "https://www.example.com/");
    assert_eq!(view.page_title.as_deref(), Some("Example Domain"));
    assert!(!view.loading);
}

#[test]
fn blank_page_report_changes_nothing() {
    init_logging();
    let (mut state, _) = submit(AppState::default(), "example.com");
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(
        state,
        Msg::ViewportLoaded {
            effective_url: BLANK_PAGE.to_string(),
            title: None,
        },
    );

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn late_report_for_superseded_load_is_applied() {
    init_logging();
    let (state, _) = submit(AppState::default(), "first.example");
    let (state, _) = submit(state, "second.example");
    let (state, _) = update(
        state,
        Msg::ViewportLoaded {
            effective_url: "https://first.example/".to_string(),
            title: None,
        },
    );

    assert_eq!(state.view().active_url, "https://first.example/");
    assert_eq!(state.view().address_bar_text, "https://first.example/");
}

#[test]
fn open_url_skips_resolution() {
    init_logging();
    let (state, effects) = update(AppState::default(), Msg::OpenUrl("example.com".to_string()));

    assert_eq!(effects, vec![load("example.com")]);
    assert_eq!(state.view().active_url, "example.com");
    assert_eq!(state.view().address_bar_text, "example.com");
}

#[test]
fn new_context_link_matches_external_navigation() {
    init_logging();
    let base = AppState::new("https://start.example");

    let (via_link, link_effects) = update(
        base.clone(),
        Msg::AnchorClicked {
            href: "https://x.com".to_string(),
            opens_new_context: true,
        },
    );
    let (via_open, open_effects) = update(base, Msg::OpenUrl("https://x.com".to_string()));

    assert_eq!(via_link, via_open);
    assert_eq!(link_effects, open_effects);
    assert_eq!(link_effects, vec![load("https://x.com")]);
}

#[test]
fn guarded_links_do_nothing() {
    init_logging();
    for (href, opens_new_context) in [
        ("#", true),
        ("", true),
        ("javascript:void(0)", true),
        (" javascript:alert(1)", true),
        ("mailto:someone@start.example", true),
        ("https://x.com", false),
    ] {
        let mut state = AppState::new("https://start.example");
        assert!(state.consume_dirty());
        let before = state.clone();

        let (mut next, effects) = update(
            state,
            Msg::AnchorClicked {
                href: href.to_string(),
                opens_new_context,
            },
        );

        assert!(effects.is_empty(), "href {href:?}");
        assert!(!next.consume_dirty(), "href {href:?}");
        assert_eq!(next, before, "href {href:?}");
    }
}

#[test]
fn typing_only_changes_address_bar() {
    init_logging();
    let mut state = AppState::new("https://start.example");
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::AddressInputChanged("rus".to_string()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.view().address_bar_text, "rus");
    assert_eq!(state.view().active_url, "https://start.example");

    let (mut state, _) = update(state, Msg::AddressInputChanged("rus".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn relative_links_load_as_absolute_urls() {
    init_logging();
    let state = AppState::new("https://docs.example/guide/");

    let (state, effects) = update(
        state,
        Msg::AnchorClicked {
            href: "/api".to_string(),
            opens_new_context: true,
        },
    );
    assert_eq!(effects, vec![load("https://docs.example/api")]);
    assert_eq!(state.view().active_url, "https://docs.example/api");
    assert_eq!(state.view().address_bar_text, "https://docs.example/api");

    let (state, effects) = update(
        state,
        Msg::AnchorClicked {
            href: " reference.html ".to_string(),
            opens_new_context: true,
        },
    );
    assert_eq!(effects, vec![load("https://docs.example/reference.html")]);
    assert_eq!(state.view().active_url, "https://docs.example/reference.html");
}
