/// Bookmark page

use crate::bookmark_data::RowId;
use crate::error::BookmarkError;
use crate::operations::BookmarkManager;
use crate::storage::{KeyValueStore, LocalStorage, MemoryStore};
use crate::ui::components::{BookmarkItem, StorageNotice, bookmark_count_label};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

type PageManager = BookmarkManager<Rc<dyn KeyValueStore>>;

/// What the form should do after an add attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Saved; empty both inputs
    Cleared,
    /// Rejected input; blocking alert, inputs kept
    Alert(String),
    /// Save failed; non-blocking notice, inputs kept
    Notice(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let manager = use_state(|| None::<PageManager>);
    let name = use_state(String::new);
    let url = use_state(String::new);
    let notice = use_state(|| None::<String>);
    let store_warning = use_state(|| None::<String>);

    // Open storage and load bookmarks on mount
    {
        let manager = manager.clone();
        let store_warning = store_warning.clone();

        use_effect_with((), move |_| {
            let store: Rc<dyn KeyValueStore> = match LocalStorage::open() {
                Ok(storage) => Rc::new(storage),
                Err(e) => {
                    log::error!("localStorage unavailable, bookmarks will not persist: {}", e);
                    store_warning.set(Some(format!(
                        "Bookmarks cannot be saved in this browser ({}). They will be lost when the page closes.",
                        e
                    )));
                    Rc::new(MemoryStore::new())
                }
            };

            let mut loaded = BookmarkManager::new(store);
            loaded.initialize();
            manager.set(Some(loaded));
            log::info!("Application initialized");
            || ()
        });
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                url.set(input.value());
            }
        })
    };

    // Add bookmark handler
    let on_add = {
        let manager = manager.clone();
        let name = name.clone();
        let url = url.clone();
        let notice = notice.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(mut next) = (*manager).clone() else {
                return;
            };

            match submit(&mut next, &name, &url) {
                AddOutcome::Cleared => {
                    manager.set(Some(next));
                    name.set(String::new());
                    url.set(String::new());
                    notice.set(None);
                }
                AddOutcome::Alert(message) => show_alert(&message),
                AddOutcome::Notice(message) => notice.set(Some(message)),
            }
        })
    };

    // Remove bookmark handler
    let on_remove = {
        let manager = manager.clone();
        let notice = notice.clone();

        Callback::from(move |row_id: RowId| {
            let Some(mut next) = (*manager).clone() else {
                return;
            };

            match next.remove_bookmark(row_id) {
                Ok(_) => {
                    manager.set(Some(next));
                    notice.set(None);
                }
                Err(BookmarkError::RowNotFound(id)) => {
                    log::warn!("Remove requested for unknown row {}", id);
                }
                Err(e) => notice.set(Some(save_failed_message(&e))),
            }
        })
    };

    let rows = (*manager)
        .as_ref()
        .map(|m| m.rows().to_vec())
        .unwrap_or_default();

    html! {
        <div class="padding-20">
            <h1 class="page-title">{"Bookmarks"}</h1>

            if let Some(warning) = (*store_warning).clone() {
                <StorageNotice message={warning} />
            }
            if let Some(message) = (*notice).clone() {
                <StorageNotice message={message} />
            }

            <div class="bookmark-form">
                <input
                    id="bookmark-name"
                    type="text"
                    placeholder="Bookmark name"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    class="bookmark-input"
                />
                <input
                    id="bookmark-url"
                    type="text"
                    placeholder="https://example.com"
                    value={(*url).clone()}
                    oninput={on_url_input}
                    class="bookmark-input"
                />
                <button id="add-bookmark" class="pf-v5-c-button pf-m-primary" onclick={on_add}>
                    {"Add Bookmark"}
                </button>
            </div>

            <ul id="bookmark-list" class="bookmark-list">
                {for rows.iter().map(|row| html! {
                    <BookmarkItem
                        key={row.id.to_string()}
                        row={row.clone()}
                        on_remove={on_remove.clone()}
                    />
                })}
            </ul>

            if rows.is_empty() {
                <p class="empty-state">{"No bookmarks yet."}</p>
            }

            <p class="footer">{bookmark_count_label(rows.len())}</p>
        </div>
    }
}

// Helper functions

/// Add a bookmark from the raw field values and decide how the form reacts
pub fn submit<S: KeyValueStore>(manager: &mut BookmarkManager<S>, name: &str, url: &str) -> AddOutcome {
    match manager.add_bookmark(name, url) {
        Ok(_) => AddOutcome::Cleared,
        Err(BookmarkError::Validation(e)) => AddOutcome::Alert(e.to_string()),
        Err(e) => AddOutcome::Notice(save_failed_message(&e)),
    }
}

/// Blocking browser alert
fn show_alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("Could not show alert {:?}: {:?}", message, e);
            }
        }
        None => log::warn!("No window to show alert: {}", message),
    }
}

fn save_failed_message(err: &BookmarkError) -> String {
    format!("Could not save bookmarks: {}. Please try again.", err)
}
