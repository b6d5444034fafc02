//! Static album catalog, embedded in the binary.
//!
//! The catalog is a fixed, ordered set of albums compiled in as a JSON
//! fixture and parsed once on first access. Consumers only ever read it.

use serde::Deserialize;
use std::sync::OnceLock;

/// One playable track on an album.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Song {
    pub title: String,
    /// Length in seconds, as reported by the source material.
    pub duration: f64,
    /// URL the audio engine attaches when this song is selected.
    pub audio_src: String,
}

/// An album entry in the catalog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Album {
    /// Unique, human-readable identifier used for routing.
    pub slug: String,
    pub title: String,
    pub artist: String,
    pub release_info: String,
    pub cover_url: String,
    /// Order is significant: it defines track numbering.
    pub songs: Vec<Song>,
}

/// The full set of albums the application presents.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    albums: Vec<Album>,
}

impl Catalog {
    /// Albums in catalog order.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Look up an album by its routing slug.
    pub fn album_by_slug(&self, slug: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.slug == slug)
    }
}

/// Embedded fixture data (compiled into the binary)
const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The application catalog, parsed lazily from the embedded fixture.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        serde_json::from_str(CATALOG_JSON).expect("Failed to parse catalog fixture JSON")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_not_empty() {
        assert!(!catalog().albums().is_empty());
    }

    #[test]
    fn every_album_has_songs() {
        for album in catalog().albums() {
            assert!(!album.songs.is_empty(), "album {} has no songs", album.slug);
        }
    }

    #[test]
    fn slugs_are_unique() {
        let albums = catalog().albums();
        for (i, album) in albums.iter().enumerate() {
            for other in &albums[i + 1..] {
                assert_ne!(album.slug, other.slug);
            }
        }
    }

    #[test]
    fn every_valid_slug_resolves_to_exactly_that_album() {
        for album in catalog().albums() {
            let found = catalog().album_by_slug(&album.slug);
            assert_eq!(found.map(|a| &a.title), Some(&album.title));
        }
    }

    #[test]
    fn unknown_slug_resolves_to_none() {
        assert!(catalog().album_by_slug("no-such-album").is_none());
    }

    #[test]
    fn song_durations_are_finite_and_positive() {
        for album in catalog().albums() {
            for song in &album.songs {
                assert!(song.duration.is_finite() && song.duration > 0.0);
            }
        }
    }
}
