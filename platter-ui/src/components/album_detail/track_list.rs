//! Track list - the album's songs in play order

use super::track_row::TrackRow;
use dioxus::prelude::*;
use platter_common::{RowAffordance, Song};

/// Track list for one album.
///
/// `affordances` carries one entry per song, precomputed by the session,
/// so this stays a pure view over (songs, playback state).
#[component]
pub fn TrackList(
    songs: Vec<Song>,
    affordances: Vec<RowAffordance>,
    current_index: Option<usize>,
    on_row_click: EventHandler<usize>,
    on_row_hover: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-1",
            for (index , song) in songs.into_iter().enumerate() {
                TrackRow {
                    key: "{index}",
                    index,
                    song,
                    affordance: affordances.get(index).copied().unwrap_or(RowAffordance::Number(index + 1)),
                    is_current: current_index == Some(index),
                    on_click: on_row_click,
                    on_hover: on_row_hover,
                }
            }
        }
    }
}
