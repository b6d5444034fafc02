//! platter-common - Catalog data model and playback session logic
//!
//! Pure domain logic shared by the UI components and the web app.
//! Nothing in this crate touches the DOM or the audio engine.

pub mod catalog;
pub mod session;

pub use catalog::{catalog, Album, Catalog, Song};
pub use session::{EngineCommand, PlaybackSession, PlaybackStatus, RowAffordance};
