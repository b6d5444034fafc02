//! Playback components

mod player_bar;

pub use player_bar::PlayerBar;
