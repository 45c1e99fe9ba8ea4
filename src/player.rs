//! Audio player state and transport controls.
//!
//! [`Player`] owns the playback state and drives a [`MediaElement`]. The
//! presentation layer does not read the state directly; it subscribes and
//! reconciles the DOM from [`PlayerEvent`]s.

use crate::playlist::{Playlist, Track};

/// Seek range used until the media reports its duration (an `<input
/// type=range>` defaults to 0..100).
pub const DEFAULT_SEEK_MAX: f64 = 100.0;

/// The native playback object.
pub trait MediaElement {
    fn set_source(&mut self, src: &str);
    /// Begin or resume output. May start asynchronously.
    fn play(&mut self);
    fn pause(&mut self);
    fn set_current_time(&mut self, seconds: f64);
    fn set_volume(&mut self, level: f64);
}

/// Change notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    TrackLoaded { index: usize, title: String },
    PlayingChanged(bool),
    /// Position the seek control should display.
    PositionChanged(f64),
    /// New maximum for the seek control.
    SeekRangeChanged(f64),
    VolumeChanged(f64),
}

type Observer = Box<dyn FnMut(&PlayerEvent)>;

pub struct Player<M> {
    playlist: Playlist,
    media: M,
    index: usize,
    playing: bool,
    position: f64,
    seek_max: f64,
    volume: f64,
    observers: Vec<Observer>,
}

impl<M: MediaElement> Player<M> {
    /// Creates a paused player with the first track loaded.
    pub fn new(playlist: Playlist, media: M) -> Self {
        let mut player = Self {
            playlist,
            media,
            index: 0,
            playing: false,
            position: 0.0,
            seek_max: DEFAULT_SEEK_MAX,
            volume: 1.0,
            observers: Vec::new(),
        };
        player.load(0);
        player
    }

    /// Register a presentation callback. It is immediately replayed the
    /// current state so the view starts consistent.
    pub fn subscribe<F>(&mut self, mut observer: F)
    where
        F: FnMut(&PlayerEvent) + 'static,
    {
        for event in self.snapshot() {
            observer(&event);
        }
        self.observers.push(Box::new(observer));
    }

    fn snapshot(&self) -> [PlayerEvent; 5] {
        [
            PlayerEvent::TrackLoaded {
                index: self.index,
                title: self.current_track().title.clone(),
            },
            PlayerEvent::PlayingChanged(self.playing),
            PlayerEvent::SeekRangeChanged(self.seek_max),
            PlayerEvent::PositionChanged(self.position),
            PlayerEvent::VolumeChanged(self.volume),
        ]
    }

    fn emit(&mut self, event: PlayerEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    /// Select track `index` without starting playback. Out-of-range indices
    /// wrap into the playlist.
    pub fn load(&mut self, index: usize) {
        self.index = index % self.playlist.len();
        let track = self.current_track().clone();
        log::debug!("loading track {}: {}", self.index, track.title);
        self.media.set_source(&track.src);
        self.position = 0.0;
        self.emit(PlayerEvent::TrackLoaded {
            index: self.index,
            title: track.title,
        });
        self.emit(PlayerEvent::PositionChanged(0.0));
    }

    pub fn play(&mut self) {
        self.playing = true;
        self.media.play();
        self.emit(PlayerEvent::PlayingChanged(true));
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.media.pause();
        self.emit(PlayerEvent::PlayingChanged(false));
    }

    /// Play if paused, pause if playing. The single play button does this.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) {
        let index = self.playlist.next_index(self.index);
        self.load(index);
        self.play();
    }

    pub fn previous(&mut self) {
        let index = self.playlist.previous_index(self.index);
        self.load(index);
        self.play();
    }

    /// Jump to `position` seconds, bounded to the seek control's range.
    pub fn seek(&mut self, position: f64) {
        if position.is_nan() {
            return;
        }
        let position = position.clamp(0.0, self.seek_max);
        self.position = position;
        self.media.set_current_time(position);
        self.emit(PlayerEvent::PositionChanged(position));
    }

    /// Set output volume. Values in `[0, 1]` are applied exactly; others are
    /// clamped and NaN is ignored.
    pub fn set_volume(&mut self, level: f64) {
        if level.is_nan() {
            return;
        }
        let level = level.clamp(0.0, 1.0);
        self.volume = level;
        self.media.set_volume(level);
        self.emit(PlayerEvent::VolumeChanged(level));
    }

    /// Media `timeupdate`. Position reads as 0 while the duration is unknown.
    pub fn on_time_update(&mut self, current: f64, duration: f64) {
        self.position = if duration.is_nan() || current.is_nan() {
            0.0
        } else {
            current
        };
        self.emit(PlayerEvent::PositionChanged(self.position));
    }

    /// Media `loadedmetadata`.
    pub fn on_loaded_metadata(&mut self, duration: f64) {
        if !duration.is_finite() {
            // Live streams report Infinity; keep the current range.
            return;
        }
        self.seek_max = duration;
        self.emit(PlayerEvent::SeekRangeChanged(duration));
    }

    /// Media `ended`: continue with the next track.
    pub fn on_ended(&mut self) {
        self.next();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_track(&self) -> &Track {
        // `index` is kept in range by `load`.
        &self.playlist.tracks()[self.index]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn seek_max(&self) -> f64 {
        self.seek_max
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn media(&self) -> &M {
        &self.media
    }
}
