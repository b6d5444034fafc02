//! Player bar view component
//!
//! Pure, props-based transport bar for one playback session.

use crate::components::icons::{PauseIcon, PlayIcon, SkipBackIcon, SkipForwardIcon, VolumeIcon};
use crate::components::utils::format_time;
use dioxus::prelude::*;
use platter_common::{PlaybackStatus, Song};

/// Transport bar: previous / play-pause / next, seek slider with elapsed
/// and total time, and a volume slider. All callbacks are required.
///
/// The seek slider reports a 0..1 fraction of the duration; the volume
/// slider reports a 0..1 level.
#[component]
pub fn PlayerBar(
    current_song: Option<Song>,
    status: PlaybackStatus,
    position: f64,
    duration: Option<f64>,
    volume: f64,
    on_toggle_play: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_seek: EventHandler<f64>,
    on_volume: EventHandler<f64>,
) -> Element {
    let is_playing = status == PlaybackStatus::Playing;

    let position_text = format_time(position);
    // format_time renders the placeholder while the engine has not
    // reported a duration yet.
    let duration_text = format_time(duration.unwrap_or(f64::NAN));
    let seek_fraction = match duration {
        Some(d) if d > 0.0 => position / d,
        _ => 0.0,
    };

    rsx! {
        div { class: "fixed bottom-0 left-0 right-0 bg-gray-800 text-white p-4 border-t border-gray-700",
            div { class: "container mx-auto flex items-center gap-4",
                TransportButtons {
                    is_playing,
                    on_toggle_play,
                    on_previous,
                    on_next,
                }

                div { class: "flex-1 min-w-0",
                    if let Some(ref song) = current_song {
                        div { class: "font-semibold truncate", "{song.title}" }
                    } else {
                        div { class: "font-semibold text-gray-400", "No track playing" }
                    }
                }

                div { class: "flex items-center gap-2 text-sm text-gray-400",
                    span { class: "w-12 text-right", "{position_text}" }
                    input {
                        r#type: "range",
                        class: "w-64 h-2 bg-gray-700 rounded-lg appearance-none cursor-pointer",
                        min: "0",
                        max: "1",
                        step: "0.001",
                        value: "{seek_fraction}",
                        oninput: move |evt| {
                            if let Ok(fraction) = evt.value().parse::<f64>() {
                                on_seek.call(fraction);
                            }
                        },
                    }
                    span { class: "w-12", "{duration_text}" }
                }

                div { class: "flex items-center gap-2",
                    VolumeIcon { class: "w-4 h-4 text-gray-400" }
                    input {
                        r#type: "range",
                        class: "w-24 h-2 bg-gray-700 rounded-lg appearance-none cursor-pointer",
                        min: "0",
                        max: "1",
                        step: "0.01",
                        value: "{volume}",
                        oninput: move |evt| {
                            if let Ok(level) = evt.value().parse::<f64>() {
                                on_volume.call(level);
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TransportButtons(
    is_playing: bool,
    on_toggle_play: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-2",
            button {
                class: "px-3 py-2 bg-gray-700 rounded hover:bg-gray-600",
                aria_label: "Previous track",
                onclick: move |_| on_previous.call(()),
                SkipBackIcon {}
            }
            if is_playing {
                button {
                    class: "w-10 h-10 rounded flex items-center justify-center bg-blue-600 hover:bg-blue-500",
                    aria_label: "Pause",
                    onclick: move |_| on_toggle_play.call(()),
                    PauseIcon {}
                }
            } else {
                button {
                    class: "w-10 h-10 rounded flex items-center justify-center bg-green-600 hover:bg-green-500",
                    aria_label: "Play",
                    onclick: move |_| on_toggle_play.call(()),
                    PlayIcon {}
                }
            }
            button {
                class: "px-3 py-2 bg-gray-700 rounded hover:bg-gray-600",
                aria_label: "Next track",
                onclick: move |_| on_next.call(()),
                SkipForwardIcon {}
            }
        }
    }
}
