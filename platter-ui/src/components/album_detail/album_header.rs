//! Album header - cover art and release metadata

use dioxus::prelude::*;
use platter_common::Album;

/// Cover art, title, artist, and release info for one album.
#[component]
pub fn AlbumHeader(album: Album) -> Element {
    rsx! {
        section { class: "flex flex-col sm:flex-row items-center sm:items-end gap-6 mb-8",
            img {
                class: "w-48 h-48 rounded-lg shadow-lg object-cover bg-gray-700",
                src: "{album.cover_url}",
                alt: "Album cover for {album.title}",
            }
            div { class: "text-center sm:text-left",
                h1 { class: "text-3xl font-bold text-white", "{album.title}" }
                h2 { class: "text-xl text-gray-300 mt-1", "{album.artist}" }
                div { class: "text-sm text-gray-500 mt-2", "{album.release_info}" }
            }
        }
    }
}
