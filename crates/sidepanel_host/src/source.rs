use std::fs;
use std::io;
use std::path::PathBuf;

use panel_logging::panel_info;
use serde::Deserialize;
use sidepanel_core::BookmarkNode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("bookmarks file {path:?} could not be read: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("bookmarks file {path:?} is malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view of the host browser's bookmark tree.
pub trait BookmarkSource {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>, SourceError>;
}

/// Fixed tree, for tests and hosts that hand over bookmarks up front.
#[derive(Debug, Clone, Default)]
pub struct StaticBookmarkSource {
    forest: Vec<BookmarkNode>,
}

impl StaticBookmarkSource {
    pub fn new(forest: Vec<BookmarkNode>) -> Self {
        Self { forest }
    }
}

impl BookmarkSource for StaticBookmarkSource {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>, SourceError> {
        Ok(self.forest.clone())
    }
}

/// Chromium profile `Bookmarks` file.
///
/// The roots are wrapped in a single untitled node with id `"0"`, the same
/// shape the extension bookmarks API returns from `getTree`.
#[derive(Debug, Clone)]
pub struct ChromiumBookmarksFile {
    path: PathBuf,
}

impl ChromiumBookmarksFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct ChromiumDocument {
    roots: ChromiumRoots,
}

#[derive(Debug, Deserialize)]
struct ChromiumRoots {
    bookmark_bar: Option<ChromiumNode>,
    other: Option<ChromiumNode>,
    synced: Option<ChromiumNode>,
}

#[derive(Debug, Deserialize)]
struct ChromiumNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    url: Option<String>,
    #[serde(default)]
    children: Vec<ChromiumNode>,
}

impl From<ChromiumNode> for BookmarkNode {
    fn from(node: ChromiumNode) -> Self {
        let url = if node.kind == "url" { node.url } else { None };
        BookmarkNode {
            id: node.id,
            title: node.name,
            url,
            children: node.children.into_iter().map(BookmarkNode::from).collect(),
        }
    }
}

impl BookmarkSource for ChromiumBookmarksFile {
    fn get_tree(&self) -> Result<Vec<BookmarkNode>, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        let document: ChromiumDocument =
            serde_json::from_str(&text).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let roots = document.roots;
        let children: Vec<BookmarkNode> = [roots.bookmark_bar, roots.other, roots.synced]
            .into_iter()
            .flatten()
            .map(BookmarkNode::from)
            .collect();
        panel_info!(
            "loaded {} bookmark roots from {:?}",
            children.len(),
            self.path
        );
        Ok(vec![BookmarkNode::folder("0", "", children)])
    }
}
