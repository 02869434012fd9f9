/// Data structures for Bookmark Shelf
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a rendered row. Never persisted.
pub type RowId = Uuid;

/// A user-named reference to a URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Bookmark {
        Bookmark {
            name: name.into(),
            url: url.into(),
        }
    }

    /// URL to use as the link target. Stored data is not re-validated on
    /// load, so anything without a web scheme is not linked.
    pub fn link_href(&self) -> Option<&str> {
        crate::validation::has_web_scheme(&self.url).then_some(self.url.as_str())
    }

    /// Host part of the URL for display, if it parses
    pub fn host(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
    }
}

/// A bookmark as it appears in the list
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkRow {
    pub id: RowId,
    pub bookmark: Bookmark,
}

impl BookmarkRow {
    pub fn new(bookmark: Bookmark) -> BookmarkRow {
        BookmarkRow {
            id: Uuid::new_v4(),
            bookmark,
        }
    }
}
