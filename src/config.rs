//! Page configuration: which elements to bind and how to draw.
//!
//! Defaults match `static/index.html`. A page can override a few settings with
//! `data-*` attributes on `<body>`; see [`PageConfig::apply_setting`].

use crate::error::{PageError, Result};
use crate::shader::ShaderVariant;

/// Attributes read from `<body data-*>`, in `dataset` (camelCase) spelling.
pub const SETTING_KEYS: [&str; 3] = ["shader", "logLevel", "volume"];

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryIds {
    pub overlay: String,
    pub image: String,
    pub close: String,
    /// Class shared by every thumbnail `<img>`.
    pub thumb_class: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerIds {
    pub widget: String,
    pub handle: String,
    pub audio: String,
    pub title: String,
    pub play: String,
    pub prev: String,
    pub next: String,
    pub seek: String,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub canvas: String,
    pub gallery: GalleryIds,
    pub player: PlayerIds,
    pub shader: ShaderVariant,
    pub log_level: log::Level,
    pub initial_volume: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            canvas: "shader-canvas".into(),
            gallery: GalleryIds {
                overlay: "gallery-modal".into(),
                image: "gallery-modal-img".into(),
                close: "gallery-close".into(),
                thumb_class: "gallery-thumb".into(),
            },
            player: PlayerIds {
                widget: "music-player".into(),
                handle: "player-handle".into(),
                audio: "player-audio".into(),
                title: "track-title".into(),
                play: "play-btn".into(),
                prev: "prev-btn".into(),
                next: "next-btn".into(),
                seek: "seek-bar".into(),
                volume: "volume-bar".into(),
            },
            shader: ShaderVariant::Crt,
            log_level: log::Level::Info,
            initial_volume: 1.0,
        }
    }
}

impl PageConfig {
    /// Apply one `data-*` override. Unknown keys are ignored so pages can carry
    /// unrelated data attributes.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || PageError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "shader" => self.shader = value.parse().map_err(|_| invalid())?,
            "logLevel" => self.log_level = value.parse().map_err(|_| invalid())?,
            "volume" => {
                let v: f64 = value.trim().parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&v) {
                    return Err(invalid());
                }
                self.initial_volume = v;
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply every override, keeping defaults for the ones that fail.
    /// Returns the failures so the caller can log them once logging is up.
    pub fn apply_settings<'a, I>(&mut self, settings: I) -> Vec<PageError>
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        settings
            .into_iter()
            .filter_map(|(key, value)| self.apply_setting(key, &value).err())
            .collect()
    }
}
