//! Library view component - pure rendering, no data fetching

use crate::components::album_card::AlbumCard;
use dioxus::prelude::*;
use platter_common::Album;

/// Library view component - pure rendering, no data fetching
///
/// One card per catalog album; clicking a card reports the album's slug
/// so the app can navigate.
#[component]
pub fn LibraryView(albums: Vec<Album>, on_album_click: EventHandler<String>) -> Element {
    rsx! {
        div { class: "flex-grow overflow-y-auto flex flex-col py-10",
            div { class: "container mx-auto flex flex-col",
                h1 { class: "text-3xl font-bold text-white mb-6", "Music Library" }
                div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-6",
                    for album in albums {
                        AlbumCard {
                            key: "{album.slug}",
                            album,
                            on_click: on_album_click,
                        }
                    }
                }
            }
        }
    }
}
