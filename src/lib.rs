/// Bookmark Shelf - save named links in the browser
/// Built with Rust + WASM + Yew

mod bookmark_data;
mod error;
mod operations;
mod storage;
mod validation;
pub mod ui;

pub use bookmark_data::{Bookmark, BookmarkRow, RowId};
pub use error::{BookmarkError, StorageError, ValidationError};
pub use operations::BookmarkManager;
pub use storage::{KeyValueStore, LocalStorage, MemoryStore, STORAGE_KEY, load_bookmarks, save_bookmarks};
pub use validation::validate_bookmark;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Scheme check used by the add form, for JavaScript callers
#[wasm_bindgen]
pub fn is_valid_bookmark_url(url: &str) -> bool {
    validation::has_web_scheme(url.trim())
}

// Current contents of localStorage as a JS array
#[wasm_bindgen]
pub fn stored_bookmarks() -> Result<JsValue, JsValue> {
    let store = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&load_bookmarks(&store)).map_err(JsValue::from)
}

// Start the Yew app for the bookmark page
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
