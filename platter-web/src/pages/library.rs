//! Library page

use crate::Route;
use dioxus::prelude::*;
use platter_common::catalog;
use platter_ui::LibraryView;

#[component]
pub fn Library() -> Element {
    let albums = catalog().albums().to_vec();

    rsx! {
        LibraryView {
            albums,
            on_album_click: move |slug: String| {
                navigator().push(Route::AlbumDetail { slug });
            },
        }
    }
}
