//! Playback session state machine.
//!
//! One `PlaybackSession` backs one album view. Transition methods mutate
//! the session and return [`EngineCommand`]s for the caller to apply to
//! the audio engine, so the whole state machine is testable without a
//! rendering environment or a real `<audio>` element.

use crate::catalog::{Album, Song};

/// Volume a fresh session asks the engine for.
pub const DEFAULT_VOLUME: f64 = 0.8;

/// An instruction for the audio engine, produced by a session transition.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCommand {
    /// Replace the engine's source with a new one.
    Attach { source: String },
    Play,
    Pause,
    SeekTo { seconds: f64 },
    SetVolume { level: f64 },
}

/// Session states: no song loaded, or a loaded song paused/playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Paused,
    Playing,
}

/// What a track row shows in its leading cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAffordance {
    /// 1-based track number.
    Number(usize),
    Play,
    Pause,
}

/// Mutable playback state for one album view.
///
/// Lives from view mount to view unmount. The current index, when set,
/// always addresses `songs`; volume stays within [0, 1]; duration is
/// `None` until the engine reports a finite value.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackSession {
    songs: Vec<Song>,
    current: Option<usize>,
    playing: bool,
    position: f64,
    duration: Option<f64>,
    volume: f64,
    hovered: Option<usize>,
}

impl PlaybackSession {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            songs,
            current: None,
            playing: false,
            position: 0.0,
            duration: None,
            volume: DEFAULT_VOLUME,
            hovered: None,
        }
    }

    pub fn for_album(album: &Album) -> Self {
        Self::new(album.songs.clone())
    }

    // Accessors

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|i| self.songs.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn status(&self) -> PlaybackStatus {
        match (self.current, self.playing) {
            (None, _) => PlaybackStatus::Idle,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    // Transport transitions

    /// Make the song at `index` current, attaching its source.
    ///
    /// Re-selecting the already-current song is a no-op so the engine
    /// never re-buffers a source it already holds. Position resets and
    /// the old duration is forgotten until the engine reports the new one.
    pub fn set_song(&mut self, index: usize) -> Option<EngineCommand> {
        if self.current == Some(index) {
            return None;
        }
        let song = self.songs.get(index)?;
        self.current = Some(index);
        self.position = 0.0;
        self.duration = None;
        Some(EngineCommand::Attach {
            source: song.audio_src.clone(),
        })
    }

    /// Start playback. Requires a current song: with nothing loaded this
    /// is a caller error and returns `None` instead of leaving the engine
    /// with an undefined source.
    pub fn play(&mut self) -> Option<EngineCommand> {
        self.current?;
        self.playing = true;
        Some(EngineCommand::Play)
    }

    pub fn pause(&mut self) -> EngineCommand {
        self.playing = false;
        EngineCommand::Pause
    }

    /// Primary click entry point for track rows and the transport toggle.
    ///
    /// Toggle semantics: `None` pauses; the current playing song pauses;
    /// the current paused song resumes; a different song attaches and
    /// plays, discarding the previous song's position.
    pub fn song_click(&mut self, index: Option<usize>) -> Vec<EngineCommand> {
        let Some(index) = index else {
            return vec![self.pause()];
        };
        let is_same_song = self.current == Some(index);
        if self.playing && is_same_song {
            return vec![self.pause()];
        }
        let mut commands = Vec::new();
        if !is_same_song {
            commands.extend(self.set_song(index));
        }
        commands.extend(self.play());
        commands
    }

    /// Move to the previous track, clamped at the first. From the idle
    /// state this selects the first track.
    pub fn prev_click(&mut self) -> Vec<EngineCommand> {
        let target = match self.current {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.switch_to(target)
    }

    /// Move to the next track, clamped at the last. From the idle state
    /// this selects the first track.
    pub fn next_click(&mut self) -> Vec<EngineCommand> {
        let Some(last) = self.songs.len().checked_sub(1) else {
            return Vec::new();
        };
        let target = match self.current {
            Some(index) => (index + 1).min(last),
            None => 0,
        };
        self.switch_to(target)
    }

    fn switch_to(&mut self, index: usize) -> Vec<EngineCommand> {
        if self.songs.is_empty() {
            return Vec::new();
        }
        let mut commands = Vec::new();
        commands.extend(self.set_song(index));
        commands.extend(self.play());
        commands
    }

    /// Seek to `duration * fraction`. With the duration still unknown
    /// there is no seek target, so position resets to zero instead.
    pub fn seek_fraction(&mut self, fraction: f64) -> Option<EngineCommand> {
        let Some(duration) = self.duration else {
            self.position = 0.0;
            return None;
        };
        let seconds = duration * fraction.clamp(0.0, 1.0);
        self.position = seconds;
        Some(EngineCommand::SeekTo { seconds })
    }

    /// Set the engine volume, clamped to [0, 1].
    pub fn set_volume(&mut self, level: f64) -> EngineCommand {
        let level = level.clamp(0.0, 1.0);
        self.volume = level;
        EngineCommand::SetVolume { level }
    }

    // Engine notifications

    pub fn position_changed(&mut self, seconds: f64) {
        self.position = seconds;
    }

    pub fn duration_changed(&mut self, seconds: f64) {
        self.duration = seconds.is_finite().then_some(seconds);
    }

    pub fn volume_changed(&mut self, level: f64) {
        self.volume = level;
    }

    // Row presentation

    /// Toggle the hovered row: entering and leaving fire the same event,
    /// so a repeat of the tracked index clears it.
    pub fn toggle_hover(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        } else {
            self.hovered = Some(index);
        }
    }

    /// Leading-cell glyph for a track row: pause for the playing current
    /// song, play for the paused current song or a hovered row, and the
    /// track number otherwise.
    pub fn row_affordance(&self, index: usize) -> RowAffordance {
        if self.current == Some(index) {
            if self.playing {
                RowAffordance::Pause
            } else {
                RowAffordance::Play
            }
        } else if self.hovered == Some(index) {
            RowAffordance::Play
        } else {
            RowAffordance::Number(index + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str) -> Song {
        Song {
            title: title.into(),
            duration: 200.0,
            audio_src: format!("/audio/{}.mp3", title),
        }
    }

    fn session(count: usize) -> PlaybackSession {
        let songs = (0..count).map(|i| song(&format!("track-{}", i))).collect();
        PlaybackSession::new(songs)
    }

    #[test]
    fn new_session_is_idle() {
        let s = session(3);
        assert_eq!(s.status(), PlaybackStatus::Idle);
        assert_eq!(s.current_index(), None);
        assert_eq!(s.duration(), None);
        assert_eq!(s.volume(), DEFAULT_VOLUME);
    }

    #[test]
    fn set_song_attaches_source() {
        let mut s = session(3);
        let cmd = s.set_song(1);
        assert_eq!(
            cmd,
            Some(EngineCommand::Attach {
                source: "/audio/track-1.mp3".into()
            })
        );
        assert_eq!(s.current_index(), Some(1));
    }

    #[test]
    fn set_song_same_index_is_noop() {
        let mut s = session(3);
        s.set_song(1);
        assert_eq!(s.set_song(1), None);
        assert_eq!(s.current_index(), Some(1));
    }

    #[test]
    fn set_song_out_of_bounds_is_noop() {
        let mut s = session(3);
        assert_eq!(s.set_song(7), None);
        assert_eq!(s.current_index(), None);
    }

    #[test]
    fn set_song_resets_position_and_duration() {
        let mut s = session(3);
        s.set_song(0);
        s.duration_changed(200.0);
        s.position_changed(42.0);
        s.set_song(1);
        assert_eq!(s.position(), 0.0);
        assert_eq!(s.duration(), None);
    }

    #[test]
    fn play_without_song_is_guarded() {
        let mut s = session(3);
        assert_eq!(s.play(), None);
        assert_eq!(s.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn play_then_pause_mirrors_state() {
        let mut s = session(3);
        s.set_song(0);
        assert_eq!(s.play(), Some(EngineCommand::Play));
        assert_eq!(s.status(), PlaybackStatus::Playing);
        assert_eq!(s.pause(), EngineCommand::Pause);
        assert_eq!(s.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn click_with_no_song_pauses() {
        let mut s = session(3);
        s.song_click(Some(0));
        let cmds = s.song_click(None);
        assert_eq!(cmds, vec![EngineCommand::Pause]);
        assert_eq!(s.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn click_idle_song_attaches_and_plays() {
        let mut s = session(3);
        let cmds = s.song_click(Some(2));
        assert_eq!(
            cmds,
            vec![
                EngineCommand::Attach {
                    source: "/audio/track-2.mp3".into()
                },
                EngineCommand::Play,
            ]
        );
        assert_eq!(s.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn click_current_playing_song_pauses_without_switching() {
        let mut s = session(3);
        s.song_click(Some(1));
        s.position_changed(42.0);
        let cmds = s.song_click(Some(1));
        assert_eq!(cmds, vec![EngineCommand::Pause]);
        assert_eq!(s.current_index(), Some(1));
        // Pausing keeps the position.
        assert_eq!(s.position(), 42.0);
    }

    #[test]
    fn click_current_paused_song_resumes_without_reattach() {
        let mut s = session(3);
        s.song_click(Some(1));
        s.song_click(Some(1));
        let cmds = s.song_click(Some(1));
        assert_eq!(cmds, vec![EngineCommand::Play]);
    }

    #[test]
    fn click_other_song_while_playing_switches_and_discards_position() {
        let mut s = session(3);
        s.song_click(Some(0));
        s.duration_changed(180.0);
        s.position_changed(90.0);
        let cmds = s.song_click(Some(2));
        assert_eq!(
            cmds,
            vec![
                EngineCommand::Attach {
                    source: "/audio/track-2.mp3".into()
                },
                EngineCommand::Play,
            ]
        );
        assert_eq!(s.current_index(), Some(2));
        assert_eq!(s.position(), 0.0);
        assert_eq!(s.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn prev_click_at_first_track_replays_without_reattach() {
        let mut s = session(3);
        s.song_click(Some(0));
        let cmds = s.prev_click();
        assert_eq!(cmds, vec![EngineCommand::Play]);
        assert_eq!(s.current_index(), Some(0));
    }

    #[test]
    fn next_click_at_last_track_replays_without_reattach() {
        let mut s = session(3);
        s.song_click(Some(2));
        let cmds = s.next_click();
        assert_eq!(cmds, vec![EngineCommand::Play]);
        assert_eq!(s.current_index(), Some(2));
    }

    #[test]
    fn prev_and_next_move_by_one() {
        let mut s = session(3);
        s.song_click(Some(1));
        s.next_click();
        assert_eq!(s.current_index(), Some(2));
        s.prev_click();
        assert_eq!(s.current_index(), Some(1));
        s.prev_click();
        assert_eq!(s.current_index(), Some(0));
    }

    #[test]
    fn prev_and_next_from_idle_select_first_track() {
        let mut s = session(3);
        let cmds = s.prev_click();
        assert_eq!(s.current_index(), Some(0));
        assert_eq!(s.status(), PlaybackStatus::Playing);
        assert_eq!(cmds.len(), 2);

        let mut s = session(3);
        s.next_click();
        assert_eq!(s.current_index(), Some(0));
    }

    #[test]
    fn next_click_on_empty_album_is_noop() {
        let mut s = session(0);
        assert!(s.next_click().is_empty());
        assert!(s.prev_click().is_empty());
        assert_eq!(s.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn seek_with_unknown_duration_resets_position() {
        let mut s = session(3);
        s.song_click(Some(0));
        s.position_changed(30.0);
        assert_eq!(s.seek_fraction(0.5), None);
        assert_eq!(s.position(), 0.0);
    }

    #[test]
    fn seek_targets_fraction_of_duration() {
        let mut s = session(3);
        s.song_click(Some(0));
        s.duration_changed(200.0);
        let cmd = s.seek_fraction(0.25);
        assert_eq!(cmd, Some(EngineCommand::SeekTo { seconds: 50.0 }));
        assert_eq!(s.position(), 50.0);
    }

    #[test]
    fn seek_fraction_is_clamped() {
        let mut s = session(3);
        s.song_click(Some(0));
        s.duration_changed(200.0);
        assert_eq!(
            s.seek_fraction(1.5),
            Some(EngineCommand::SeekTo { seconds: 200.0 })
        );
        assert_eq!(
            s.seek_fraction(-0.5),
            Some(EngineCommand::SeekTo { seconds: 0.0 })
        );
    }

    #[test]
    fn set_volume_is_clamped() {
        let mut s = session(3);
        assert_eq!(
            s.set_volume(1.7),
            EngineCommand::SetVolume { level: 1.0 }
        );
        assert_eq!(s.volume(), 1.0);
        s.set_volume(-0.2);
        assert_eq!(s.volume(), 0.0);
    }

    #[test]
    fn duration_change_ignores_non_finite_values() {
        let mut s = session(3);
        s.duration_changed(f64::NAN);
        assert_eq!(s.duration(), None);
        s.duration_changed(f64::INFINITY);
        assert_eq!(s.duration(), None);
        s.duration_changed(180.0);
        assert_eq!(s.duration(), Some(180.0));
    }

    #[test]
    fn hover_toggles_on_repeat_of_same_index() {
        let mut s = session(3);
        s.toggle_hover(1);
        assert_eq!(s.hovered(), Some(1));
        s.toggle_hover(1);
        assert_eq!(s.hovered(), None);
    }

    #[test]
    fn hover_moves_to_new_index() {
        let mut s = session(3);
        s.toggle_hover(0);
        s.toggle_hover(2);
        assert_eq!(s.hovered(), Some(2));
    }

    #[test]
    fn row_affordance_defaults_to_track_number() {
        let s = session(3);
        assert_eq!(s.row_affordance(0), RowAffordance::Number(1));
        assert_eq!(s.row_affordance(2), RowAffordance::Number(3));
    }

    #[test]
    fn row_affordance_shows_play_on_hover() {
        let mut s = session(3);
        s.toggle_hover(1);
        assert_eq!(s.row_affordance(1), RowAffordance::Play);
        assert_eq!(s.row_affordance(0), RowAffordance::Number(1));
    }

    #[test]
    fn row_affordance_tracks_current_song_state() {
        let mut s = session(3);
        s.song_click(Some(1));
        assert_eq!(s.row_affordance(1), RowAffordance::Pause);
        s.song_click(Some(1));
        // Paused-and-current shows play even without hover.
        assert_eq!(s.row_affordance(1), RowAffordance::Play);
    }
}
