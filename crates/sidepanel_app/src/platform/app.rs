use std::io::{self, BufRead, Stdout, Write};
use std::path::PathBuf;

use anyhow::Context;
use panel_logging::{panel_info, panel_warn};
use sidepanel_core::{AppState, BookmarkNode};
use sidepanel_host::{
    ensure_data_dir, BookmarkSource, ChromiumBookmarksFile, FileSettingsStore, Session,
    SourceError, StaticBookmarkSource, ViewportEvent,
};

use super::commands::{self, Command, HELP};
use super::config::{AppConfig, DEFAULT_CONFIG_PATH};
use super::logging;
use super::terminal::{self, TerminalViewport};

type AppSession = Session<TerminalViewport<Stdout>, FileSettingsStore, NativeBookmarks>;

/// Browser bookmarks, from a Chromium profile when configured.
enum NativeBookmarks {
    Profile(ChromiumBookmarksFile),
    Empty(StaticBookmarkSource),
}

impl BookmarkSource for NativeBookmarks {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>, SourceError> {
        match self {
            NativeBookmarks::Profile(file) => file.get_tree(),
            NativeBookmarks::Empty(source) => source.get_tree(),
        }
    }
}

pub fn run_app(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = AppConfig::load(&config_path)?;
    logging::initialize(
        config.log_destination,
        panel_logging::parse_level(&config.log_level),
    );
    panel_info!("sidepanel_app starting with config {:?}", config_path);

    ensure_data_dir(&config.data_dir)
        .with_context(|| format!("preparing data dir {}", config.data_dir.display()))?;

    let native = match &config.native_bookmarks {
        Some(path) => NativeBookmarks::Profile(ChromiumBookmarksFile::new(path)),
        None => NativeBookmarks::Empty(StaticBookmarkSource::default()),
    };
    let mut session: AppSession = Session::new(
        AppState::new(config.initial_homepage.clone()),
        TerminalViewport::new(io::stdout()),
        FileSettingsStore::new(&config.data_dir),
        native,
    );
    session.start();

    let mut out = io::stdout();
    flush_session_output(&mut session, &mut out)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading command")?;
        match commands::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => handle_command(&mut session, command, &mut out)?,
            Err(message) => writeln!(out, "{message}")?,
        }
        flush_session_output(&mut session, &mut out)?;
    }

    panel_info!("sidepanel_app exiting");
    Ok(())
}

fn handle_command(
    session: &mut AppSession,
    command: Command,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        Command::Dispatch(msg) => session.dispatch(msg),
        Command::Viewport(event) => session.viewport_event(event),
        Command::Loaded { url, title } => {
            session.viewport_mut().set_title(title);
            session.viewport_event(ViewportEvent::LoadComplete { effective_url: url });
        }
        Command::AddBookmark => session.add_current_page_bookmark(),
        Command::ListBookmarks => terminal::render_bookmarks(out, &session.view())?,
        Command::PrintTree => {
            let forest = session.state().native_bookmarks();
            if forest.is_empty() {
                panel_warn!("bookmark tree requested before the drawer loaded it");
                writeln!(out, "no browser bookmarks loaded, try `drawer open`")?;
            } else {
                terminal::render_tree(out, forest)?;
            }
        }
        Command::PrintState => terminal::render_state(out, &session.view())?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

fn flush_session_output(session: &mut AppSession, out: &mut impl Write) -> io::Result<()> {
    terminal::render_notices(out, &session.take_notices())?;
    if session.consume_dirty() {
        let view = session.view();
        let loading = if view.loading { " ..." } else { "" };
        writeln!(out, "> {}{loading}", view.address_bar_text)?;
    }
    out.flush()
}
