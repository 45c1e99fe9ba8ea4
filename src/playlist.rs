use crate::error::{PageError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    /// Local path or remote URL, assigned to the media element as-is.
    pub src: String,
}

impl Track {
    pub fn new(title: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            src: src.into(),
        }
    }
}

/// Tracks bundled with the page.
pub const DEFAULT_TRACKS: &[(&str, &str)] = &[
    ("Night Drive", "audio/night-drive.mp3"),
    ("Phosphor", "audio/phosphor.mp3"),
    ("Green Screen", "audio/green-screen.mp3"),
    ("Carrier Lost", "audio/carrier-lost.mp3"),
];

/// An ordered, non-empty, immutable list of tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PageError::EmptyPlaylist);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index after `index`, wrapping to 0 past the end.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last track below 0.
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            tracks: DEFAULT_TRACKS
                .iter()
                .map(|(title, src)| Track::new(*title, *src))
                .collect(),
        }
    }
}
