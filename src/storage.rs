/// Storage access for the persisted bookmark list
///
/// The whole list lives under a single key as a JSON array and is rewritten
/// on every change.

use crate::bookmark_data::Bookmark;
use crate::error::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Key the bookmark list is stored under
pub const STORAGE_KEY: &str = "bookmarks";

/// A synchronous string key-value store
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// The browser's `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;

        Ok(LocalStorage { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set_item` fail, as a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the stored bookmark list
///
/// A missing key, a failed read, or content that does not parse as a list of
/// `{name, url}` objects all yield an empty list.
pub fn load_bookmarks<S: KeyValueStore>(store: &S) -> Vec<Bookmark> {
    let raw = match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Could not read bookmarks, starting empty: {}", e);
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Ignoring unparsable bookmark data: {}", e);
        Vec::new()
    })
}

/// Overwrite the stored bookmark list
pub fn save_bookmarks<S: KeyValueStore>(store: &S, bookmarks: &[Bookmark]) -> Result<(), StorageError> {
    let json = serde_json::to_string(bookmarks)
        .map_err(|e| StorageError::Serialize(e.to_string()))?;

    store.set_item(STORAGE_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key() {
        let store = MemoryStore::new();

        assert!(load_bookmarks(&store).is_empty());
    }

    #[test]
    fn test_load_corrupt_content() {
        let store = MemoryStore::new();

        for raw in ["not json", "{\"name\":\"A\"}", "[{\"title\":\"A\"}]", "[1, 2]", ""] {
            store.set_item(STORAGE_KEY, raw).unwrap();
            assert!(load_bookmarks(&store).is_empty(), "expected empty for {:?}", raw);
        }
    }

    #[test]
    fn test_load_does_not_revalidate() {
        let store = MemoryStore::new();
        store
            .set_item(STORAGE_KEY, r#"[{"name":"Old","url":"ftp://old.example"}]"#)
            .unwrap();

        let loaded = load_bookmarks(&store);

        assert_eq!(loaded, vec![Bookmark::new("Old", "ftp://old.example")]);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let bookmarks = vec![
            Bookmark::new("A", "https://a.com"),
            Bookmark::new("B", "http://b.com"),
            Bookmark::new("A", "https://a.com"),
        ];

        save_bookmarks(&store, &bookmarks).unwrap();

        assert_eq!(load_bookmarks(&store), bookmarks);
    }

    #[test]
    fn test_save_uses_bookmarks_key() {
        let store = MemoryStore::new();

        save_bookmarks(&store, &[Bookmark::new("Example", "https://example.com")]).unwrap();

        assert_eq!(
            store.get_item("bookmarks").unwrap(),
            Some(r#"[{"name":"Example","url":"https://example.com"}]"#.to_string())
        );
    }

    #[test]
    fn test_save_write_failure() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);

        let result = save_bookmarks(&store, &[Bookmark::new("A", "https://a.com")]);

        assert!(matches!(result, Err(StorageError::Write(_))));
        assert_eq!(store.get_item(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_shared_dyn_store() {
        let memory = MemoryStore::new();
        let store: Rc<dyn KeyValueStore> = Rc::new(memory.clone());

        save_bookmarks(&store, &[Bookmark::new("A", "https://a.com")]).unwrap();

        assert_eq!(load_bookmarks(&memory), vec![Bookmark::new("A", "https://a.com")]);
    }

    #[test]
    fn test_memory_store_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("k", "v").unwrap();

        assert_eq!(other.get_item("k").unwrap(), Some("v".to_string()));
    }
}
