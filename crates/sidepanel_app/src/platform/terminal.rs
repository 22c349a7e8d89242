use std::io::Write;

use panel_logging::panel_warn;
use sidepanel_core::{rows, AppViewModel, BookmarkNode, NodeKind, NoticeLevel};
use sidepanel_host::{Notice, PageAccessError, ViewportHost};

/// Viewport that prints load commands instead of rendering pages.
///
/// Page titles are whatever the last `loaded` command said; without one the
/// page is treated as cross-origin and unreadable.
pub struct TerminalViewport<W: Write> {
    out: W,
    title: Option<String>,
}

impl<W: Write> TerminalViewport<W> {
    pub fn new(out: W) -> Self {
        Self { out, title: None }
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }
}

impl<W: Write> ViewportHost for TerminalViewport<W> {
    fn load(&mut self, url: &str) {
        self.title = None;
        if let Err(err) = writeln!(self.out, "load {url}") {
            panel_warn!("failed to write load command: {}", err);
        }
    }

    fn page_title(&self) -> Result<String, PageAccessError> {
        self.title.clone().ok_or(PageAccessError::CrossOrigin)
    }
}

pub fn render_state(out: &mut impl Write, view: &AppViewModel) -> std::io::Result<()> {
    writeln!(out, "address: {}", view.address_bar_text)?;
    writeln!(
        out,
        "active:  {}{}",
        view.active_url,
        if view.loading { " (loading)" } else { "" }
    )?;
    if let Some(title) = &view.page_title {
        writeln!(out, "title:   {title}")?;
    }
    writeln!(out, "homepage: {}", view.settings.default_homepage)?;
    if view.settings.open {
        writeln!(out, "settings open, draft: {}", view.settings.homepage_draft)?;
    }
    writeln!(
        out,
        "drawer: {}, theme: {:?}, bookmarks: {}",
        if view.bookmark_drawer_open { "open" } else { "closed" },
        view.theme,
        view.bookmarks.len()
    )
}

pub fn render_bookmarks(out: &mut impl Write, view: &AppViewModel) -> std::io::Result<()> {
    if view.bookmarks.is_empty() {
        return writeln!(out, "no saved bookmarks");
    }
    for bookmark in &view.bookmarks {
        writeln!(out, "[{}] {} <{}>", bookmark.id, bookmark.label, bookmark.url)?;
    }
    Ok(())
}

pub fn render_tree(out: &mut impl Write, forest: &[BookmarkNode]) -> std::io::Result<()> {
    for row in rows(forest) {
        let indent = "  ".repeat(row.depth);
        match (row.kind, row.url) {
            (NodeKind::Leaf, Some(url)) => writeln!(out, "{indent}* {} <{url}>", row.label)?,
            (NodeKind::Folder, _) => writeln!(out, "{indent}+ {}", row.label)?,
            _ => writeln!(out, "{indent}- {}", row.label)?,
        }
    }
    Ok(())
}

pub fn render_notices(out: &mut impl Write, notices: &[Notice]) -> std::io::Result<()> {
    for notice in notices {
        let tag = match notice.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        writeln!(out, "[{tag}] {}", notice.message)?;
    }
    Ok(())
}
