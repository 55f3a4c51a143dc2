use serde::{Deserialize, Serialize};

/// A single entry of a bookmark tree
///
/// The variant is fixed when the node is built; a node never changes kind.
/// Serialized as an object tagged by `"type"` (`"bookmark"` or `"directory"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "bookmark")]
    Bookmark(Bookmark),
    #[serde(rename = "directory", alias = "folder")]
    Folder(Folder),
}

/// A saved link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub title: String,
    /// Link target, empty when the source entry had none
    pub url: String,
    pub add_date: Option<String>,
    pub last_modified: Option<String>,
    /// Favicon as exported (usually a data URI)
    pub icon: Option<String>,
}

/// A named group of bookmarks and folders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub title: String,
    pub add_date: Option<String>,
    pub last_modified: Option<String>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Bookmark {
    /// Create a bookmark without timestamps or icon
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            add_date: None,
            last_modified: None,
            icon: None,
        }
    }
}

impl Folder {
    /// Create a folder without timestamps
    pub fn new(title: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            title: title.into(),
            add_date: None,
            last_modified: None,
            children,
        }
    }
}

impl Node {
    pub fn title(&self) -> &str {
        match self {
            Node::Bookmark(bookmark) => &bookmark.title,
            Node::Folder(folder) => &folder.title,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::Bookmark(_) => None,
        }
    }

    pub fn as_bookmark(&self) -> Option<&Bookmark> {
        match self {
            Node::Bookmark(bookmark) => Some(bookmark),
            Node::Folder(_) => None,
        }
    }
}

impl From<Bookmark> for Node {
    fn from(bookmark: Bookmark) -> Self {
        Node::Bookmark(bookmark)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Node::Folder(folder)
    }
}
