use serde::{Deserialize, Serialize};
use url::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons?domain=";
const UNTITLED_LABEL: &str = "Bookmark";

/// Entry in the user-managed bookmark list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl Bookmark {
    /// Builds a bookmark, deriving the favicon from the URL's host.
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let favicon = favicon_url(&url);
        Self {
            id: id.into(),
            title: title.into(),
            url,
            favicon,
        }
    }

    /// Title for display; falls back to the URL when untitled.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Host portion of `url`, if it parses and has one.
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(ToOwned::to_owned)
}

/// Favicon service URL for the host of `url`.
pub fn favicon_url(url: &str) -> Option<String> {
    hostname(url).map(|host| format!("{FAVICON_SERVICE}{host}"))
}

/// Node of the host browser's native bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookmarkNode {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BookmarkNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Folder,
    EmptyFolder,
}

impl BookmarkNode {
    pub fn leaf(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: Some(url.into()),
            children: Vec::new(),
        }
    }

    pub fn folder(id: impl Into<String>, title: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: None,
            children,
        }
    }

    /// A node with a URL is a leaf even if it also has children.
    pub fn kind(&self) -> NodeKind {
        if self.url.is_some() {
            NodeKind::Leaf
        } else if !self.children.is_empty() {
            NodeKind::Folder
        } else {
            NodeKind::EmptyFolder
        }
    }
}

/// Flattened, display-ready line of the native bookmark tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRow<'a> {
    pub depth: usize,
    pub kind: NodeKind,
    pub id: &'a str,
    pub label: String,
    pub url: Option<&'a str>,
}

/// Lazily walks `forest` depth-first, yielding one row per node.
///
/// Leaves are not descended into.
pub fn rows(forest: &[BookmarkNode]) -> Rows<'_> {
    Rows {
        stack: vec![(0, forest.iter())],
    }
}

pub struct Rows<'a> {
    stack: Vec<(usize, std::slice::Iter<'a, BookmarkNode>)>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = BookmarkRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, iter) = self.stack.last_mut()?;
            let depth = *depth;
            let Some(node) = iter.next() else {
                self.stack.pop();
                continue;
            };
            let kind = node.kind();
            if kind == NodeKind::Folder {
                self.stack.push((depth + 1, node.children.iter()));
            }
            return Some(BookmarkRow {
                depth,
                kind,
                id: &node.id,
                label: row_label(node, kind),
                url: node.url.as_deref(),
            });
        }
    }
}

fn row_label(node: &BookmarkNode, kind: NodeKind) -> String {
    match kind {
        NodeKind::EmptyFolder => format!("{} (empty)", node.title),
        NodeKind::Leaf | NodeKind::Folder if node.title.is_empty() => UNTITLED_LABEL.to_string(),
        NodeKind::Leaf | NodeKind::Folder => node.title.clone(),
    }
}
