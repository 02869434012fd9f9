/// Bookmark operations: load, add, remove

use crate::bookmark_data::{Bookmark, BookmarkRow, RowId};
use crate::error::BookmarkError;
use crate::storage::{KeyValueStore, load_bookmarks, save_bookmarks};
use crate::validation::validate_bookmark;

/// Owns the store handle and the rows currently shown on the page
///
/// Rows are kept in the same order as the persisted list. If a write fails
/// the in-memory change is undone, so the rows always match the store.
#[derive(Debug, Clone)]
pub struct BookmarkManager<S: KeyValueStore> {
    store: S,
    rows: Vec<BookmarkRow>,
}

impl<S: KeyValueStore> BookmarkManager<S> {
    pub fn new(store: S) -> Self {
        BookmarkManager {
            store,
            rows: Vec::new(),
        }
    }

    /// Replace the rows with whatever the store holds
    pub fn initialize(&mut self) {
        self.rows = load_bookmarks(&self.store)
            .into_iter()
            .map(BookmarkRow::new)
            .collect();
        log::info!("Loaded {} bookmarks", self.rows.len());
    }

    /// Validate the raw field values, append a row and persist the list
    pub fn add_bookmark(&mut self, name: &str, url: &str) -> Result<RowId, BookmarkError> {
        let bookmark = validate_bookmark(name, url).inspect_err(|e| {
            log::warn!("Rejected bookmark input: {:?}", e);
        })?;

        let row = BookmarkRow::new(bookmark);
        let id = row.id;
        self.rows.push(row);

        if let Err(e) = self.persist() {
            self.rows.pop();
            return Err(e.into());
        }

        log::debug!("Added bookmark {}", id);
        Ok(id)
    }

    /// Remove the row with the given id and persist the list
    pub fn remove_bookmark(&mut self, id: RowId) -> Result<Bookmark, BookmarkError> {
        let position = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(BookmarkError::RowNotFound(id))?;

        let row = self.rows.remove(position);

        if let Err(e) = self.persist() {
            self.rows.insert(position, row);
            return Err(e.into());
        }

        log::debug!("Removed bookmark {} at position {}", id, position);
        Ok(row.bookmark)
    }

    pub fn rows(&self) -> &[BookmarkRow] {
        &self.rows
    }

    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.rows.iter().map(|row| row.bookmark.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn persist(&self) -> Result<(), crate::error::StorageError> {
        save_bookmarks(&self.store, &self.bookmarks()).inspect_err(|e| {
            log::error!("Failed to save bookmarks: {}", e);
        })
    }
}
