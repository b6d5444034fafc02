//! Shared UI components

pub mod album_card;
pub mod album_detail;
pub mod helpers;
pub mod icons;
pub mod library;
pub mod playback;
pub mod utils;

pub use album_card::AlbumCard;
pub use album_detail::{AlbumHeader, TrackList, TrackRow};
pub use helpers::{BackButton, ErrorDisplay};
pub use icons::{
    DiscIcon, PauseIcon, PlayIcon, SkipBackIcon, SkipForwardIcon, VolumeIcon,
};
pub use library::LibraryView;
pub use playback::PlayerBar;
pub use utils::format_time;
