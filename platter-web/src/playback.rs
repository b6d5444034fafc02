//! Web playback service managing an HTML <audio> element.
//!
//! The element is created off-document (it is never inserted into the
//! page) and held for the life of one album view. Session transitions
//! come back as [`EngineCommand`]s which this service applies to the
//! element; the element's own notifications feed the session signal.
//!
//! Teardown is a single path: dropping the service pauses the engine,
//! clears its source, and removes every listener, so a stale engine
//! notification can never mutate a session that is logically gone.

use dioxus::prelude::*;
use platter_common::{EngineCommand, PlaybackSession};
use tracing::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;

/// A registered engine notification: event name plus its retained closure.
type Listener = (&'static str, Closure<dyn FnMut()>);

/// Owns the audio element and its three engine subscriptions
/// (`timeupdate`, `durationchange`, `volumechange`) for one session.
pub struct WebPlayback {
    session: Signal<PlaybackSession>,
    audio: Option<HtmlAudioElement>,
    listeners: Vec<Listener>,
}

impl WebPlayback {
    /// Acquire the audio engine for `session`. If the element cannot be
    /// created the transport degrades to a silent no-op and the view
    /// still renders.
    pub fn new(session: Signal<PlaybackSession>) -> Self {
        let mut service = Self {
            session,
            audio: None,
            listeners: Vec::new(),
        };
        match HtmlAudioElement::new() {
            Ok(audio) => {
                audio.set_volume(session.peek().volume());
                service.audio = Some(audio);
                service.subscribe();
            }
            Err(err) => warn!("failed to create audio element: {:?}", err),
        }
        service
    }

    fn subscribe(&mut self) {
        let Some(audio) = self.audio.clone() else {
            return;
        };
        let mut session = self.session;

        let el = audio.clone();
        let on_time = Closure::<dyn FnMut()>::new(move || {
            session.write().position_changed(el.current_time());
        });
        let el = audio.clone();
        let on_duration = Closure::<dyn FnMut()>::new(move || {
            session.write().duration_changed(el.duration());
        });
        let el = audio.clone();
        let on_volume = Closure::<dyn FnMut()>::new(move || {
            session.write().volume_changed(el.volume());
        });

        for (event, closure) in [
            ("timeupdate", on_time),
            ("durationchange", on_duration),
            ("volumechange", on_volume),
        ] {
            if let Err(err) =
                audio.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                warn!("failed to subscribe to {}: {:?}", event, err);
            }
            self.listeners.push((event, closure));
        }
    }

    /// Apply session-produced commands to the engine.
    fn apply(&self, commands: impl IntoIterator<Item = EngineCommand>) {
        let Some(ref audio) = self.audio else {
            return;
        };
        for command in commands {
            match command {
                EngineCommand::Attach { source } => {
                    info!("attaching source: {}", source);
                    audio.set_src(&source);
                }
                EngineCommand::Play => {
                    let _ = audio.play();
                }
                EngineCommand::Pause => {
                    let _ = audio.pause();
                }
                EngineCommand::SeekTo { seconds } => audio.set_current_time(seconds),
                EngineCommand::SetVolume { level } => audio.set_volume(level),
            }
        }
    }

    // Transport actions, delegated to the session.

    pub fn song_click(&mut self, index: Option<usize>) {
        let commands = self.session.write().song_click(index);
        self.apply(commands);
    }

    /// Transport bar toggle: acts on the current song. With nothing
    /// loaded there is nothing to start, so this logs and falls through
    /// to the pause no-op instead of handing the engine an undefined
    /// source.
    pub fn toggle_play(&mut self) {
        let index = self.session.peek().current_index();
        if index.is_none() {
            warn!("transport toggled with no song loaded");
        }
        self.song_click(index);
    }

    pub fn prev(&mut self) {
        let commands = self.session.write().prev_click();
        self.apply(commands);
    }

    pub fn next(&mut self) {
        let commands = self.session.write().next_click();
        self.apply(commands);
    }

    pub fn seek(&mut self, fraction: f64) {
        let command = self.session.write().seek_fraction(fraction);
        self.apply(command);
    }

    pub fn set_volume(&mut self, level: f64) {
        let command = self.session.write().set_volume(level);
        self.apply([command]);
    }

    pub fn hover(&mut self, index: usize) {
        self.session.write().toggle_hover(index);
    }
}

impl Drop for WebPlayback {
    fn drop(&mut self) {
        let Some(audio) = self.audio.take() else {
            return;
        };
        let _ = audio.pause();
        audio.set_src("");
        for (event, closure) in self.listeners.drain(..) {
            let _ = audio
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}
