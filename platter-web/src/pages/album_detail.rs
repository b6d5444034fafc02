//! Album page - resolves a slug and hosts the playback session

use crate::playback::WebPlayback;
use crate::Route;
use dioxus::prelude::*;
use platter_common::{catalog, Album, PlaybackSession, RowAffordance};
use platter_ui::{AlbumHeader, BackButton, ErrorDisplay, PlayerBar, TrackList};

/// Resolve the routed slug. An unknown slug renders a visible not-found
/// view instead of crashing on a missing album.
#[component]
pub fn AlbumDetail(slug: String) -> Element {
    match catalog().album_by_slug(&slug) {
        Some(album) => rsx! {
            AlbumSession { album: album.clone() }
        },
        None => rsx! {
            div { class: "container mx-auto py-10 px-4",
                BackButton {
                    on_click: move |_| {
                        navigator().push(Route::Library {});
                    },
                }
                ErrorDisplay { message: format!("No album found for \"{slug}\"") }
                p { class: "text-sm mt-2 text-gray-400",
                    "The address may be out of date. Head back to the library to browse what's here."
                }
            }
        },
    }
}

/// One album's view plus its playback session. The session signal and
/// the audio engine live exactly as long as this component: dropping
/// `WebPlayback` on unmount detaches the engine and unsubscribes its
/// listeners.
#[component]
fn AlbumSession(album: Album) -> Element {
    let session = use_signal({
        let album = album.clone();
        move || PlaybackSession::for_album(&album)
    });
    let mut playback = use_signal(|| WebPlayback::new(session));

    let snapshot = session.read();
    let songs = snapshot.songs().to_vec();
    let affordances: Vec<RowAffordance> = (0..songs.len())
        .map(|index| snapshot.row_affordance(index))
        .collect();
    let current_index = snapshot.current_index();
    let current_song = snapshot.current_song().cloned();
    let status = snapshot.status();
    let position = snapshot.position();
    let duration = snapshot.duration();
    let volume = snapshot.volume();
    drop(snapshot);

    rsx! {
        div { class: "container mx-auto py-10 pb-32 px-4",
            BackButton {
                on_click: move |_| {
                    navigator().push(Route::Library {});
                },
            }
            AlbumHeader { album: album.clone() }
            TrackList {
                songs,
                affordances,
                current_index,
                on_row_click: move |index| playback.write().song_click(Some(index)),
                on_row_hover: move |index| playback.write().hover(index),
            }
        }
        PlayerBar {
            current_song,
            status,
            position,
            duration,
            volume,
            on_toggle_play: move |_| playback.write().toggle_play(),
            on_previous: move |_| playback.write().prev(),
            on_next: move |_| playback.write().next(),
            on_seek: move |fraction| playback.write().seek(fraction),
            on_volume: move |level| playback.write().set_volume(level),
        }
    }
}
