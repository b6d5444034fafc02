//! Album card component - pure view with callbacks

use dioxus::prelude::*;
use platter_common::Album;

/// Individual album card component
///
/// Pure view component - displays cover, title, artist, and song count.
/// Navigation is handled via on_click callback, not direct router calls.
#[component]
pub fn AlbumCard(album: Album, on_click: EventHandler<String>) -> Element {
    let slug = album.slug.clone();
    let song_count = album.songs.len();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer group",
            onclick: move |_| on_click.call(slug.clone()),
            div { class: "aspect-square bg-gray-700",
                img {
                    src: "{album.cover_url}",
                    alt: "Album cover for {album.title}",
                    class: "w-full h-full object-cover",
                }
            }
            div { class: "p-4",
                h3 {
                    class: "font-bold text-white text-lg mb-1 truncate",
                    title: "{album.title}",
                    "{album.title}"
                }
                p {
                    class: "text-gray-400 text-sm truncate",
                    title: "{album.artist}",
                    "{album.artist}"
                }
                p { class: "text-gray-500 text-xs mt-1", "{song_count} songs" }
            }
        }
    }
}
