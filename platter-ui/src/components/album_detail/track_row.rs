//! Track row component - displays a single track in the tracklist

use crate::components::icons::{PauseIcon, PlayIcon};
use crate::components::utils::format_time;
use dioxus::prelude::*;
use platter_common::{RowAffordance, Song};

/// Individual track row component
///
/// The leading cell shows the track number by default, a play glyph on
/// hover or for the paused current song, and a pause glyph for the
/// playing current song. Hover enter/leave both report the row index;
/// the session tracks the toggle.
#[component]
pub fn TrackRow(
    index: usize,
    song: Song,
    affordance: RowAffordance,
    is_current: bool,
    on_click: EventHandler<usize>,
    on_hover: EventHandler<usize>,
) -> Element {
    let row_class = if is_current {
        "flex items-center py-2 px-4 rounded-lg group bg-blue-500/10 hover:bg-blue-500/15 transition-colors cursor-pointer"
    } else {
        "flex items-center py-2 px-4 rounded-lg group hover:bg-gray-700/50 transition-colors cursor-pointer"
    };

    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| on_click.call(index),
            onmouseenter: move |_| on_hover.call(index),
            onmouseleave: move |_| on_hover.call(index),

            div { class: "w-8 flex items-center justify-center text-blue-400",
                {match affordance {
                    RowAffordance::Number(n) => rsx! {
                        span { class: "text-sm font-mono text-gray-500", "{n}" }
                    },
                    RowAffordance::Play => rsx! {
                        PlayIcon { class: "w-4 h-4" }
                    },
                    RowAffordance::Pause => rsx! {
                        PauseIcon { class: "w-4 h-4" }
                    },
                }}
            }

            h3 {
                class: "flex-1 min-w-0 ml-4 font-medium truncate transition-colors",
                class: if is_current { "text-blue-300" } else { "text-white group-hover:text-blue-300" },
                "{song.title}"
            }

            div { class: "text-sm font-mono text-gray-400 ml-4",
                {format_time(song.duration)}
            }
        }
    }
}
