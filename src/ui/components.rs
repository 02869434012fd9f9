/// Reusable UI components

use crate::bookmark_data::{BookmarkRow, RowId};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookmarkItemProps {
    pub row: BookmarkRow,
    pub on_remove: Callback<RowId>,
}

/// One list entry: the link, its host, and a remove control
#[function_component(BookmarkItem)]
pub fn bookmark_item(props: &BookmarkItemProps) -> Html {
    let bookmark = &props.row.bookmark;
    let row_id = props.row.id;

    html! {
        <li class="bookmark-item">
            if let Some(href) = bookmark.link_href() {
                <a
                    href={href.to_string()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="bookmark-link"
                >
                    {&bookmark.name}
                </a>
            } else {
                <span class="bookmark-link" title={bookmark.url.clone()}>{&bookmark.name}</span>
            }
            if let Some(host) = bookmark.host() {
                <span class="bookmark-host">{host}</span>
            }
            <Button
                onclick={props.on_remove.reform(move |_| row_id)}
                variant={ButtonVariant::Danger}
            >
                {"Remove"}
            </Button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct StorageNoticeProps {
    pub message: String,
}

/// Non-blocking warning shown when bookmarks could not be saved
#[function_component(StorageNotice)]
pub fn storage_notice(props: &StorageNoticeProps) -> Html {
    html! {
        <div class="message-top-margin">
            <Alert r#type={AlertType::Warning} title={props.message.clone()} inline={true}>
            </Alert>
        </div>
    }
}

pub fn bookmark_count_label(count: usize) -> String {
    match count {
        1 => "1 bookmark".to_string(),
        n => format!("{} bookmarks", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_count_label() {
        assert_eq!(bookmark_count_label(0), "0 bookmarks");
        assert_eq!(bookmark_count_label(1), "1 bookmark");
        assert_eq!(bookmark_count_label(12), "12 bookmarks");
    }
}
