//! A personal homepage: CRT shader background, image gallery and a draggable
//! audio player.
//!
//! Widget state lives in plain modules that build and test on any target.
//! The DOM/WebGL bindings under [`wasm`] only exist on wasm32.

pub mod clock;
pub mod config;
pub mod drag;
pub mod error;
pub mod frame;
pub mod gallery;
pub mod logging;
pub mod player;
pub mod playlist;
pub mod shader;
pub mod viewport;

pub use error::{PageError, Result};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::{PageConfig, SETTING_KEYS};
    use crate::error::PageError;
    use crate::logging;

    mod dom;
    mod gallery;
    pub mod player;
    pub mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let mut config = PageConfig::default();
        let rejected = match document.body() {
            Some(body) => {
                let data = body.dataset();
                config.apply_settings(
                    SETTING_KEYS
                        .iter()
                        .filter_map(|key| data.get(key).map(|value| (*key, value))),
                )
            }
            None => Vec::new(),
        };

        logging::init(config.log_level);
        for err in rejected {
            log::warn!("keeping default: {}", err);
        }
        log::info!("page starting (shader: {})", config.shader);

        // Each widget is independent; one failing must not take the others down.
        match dom::element(&document, &config.canvas) {
            Ok(canvas) => match render::start(canvas, config.shader) {
                Ok(()) => {}
                Err(PageError::UnsupportedContext) => {
                    log::error!("WebGL2 not supported; hiding background");
                    dom::hide_background(&document, &config.canvas);
                }
                Err(err) => log::error!("background disabled: {}", err),
            },
            Err(err) => log::warn!("background skipped: {}", err),
        }

        if let Err(err) = gallery::bind(&document, &config.gallery) {
            log::warn!("gallery skipped: {}", err);
        }

        if let Err(err) = player::bind(&document, &config.player, config.initial_volume) {
            log::warn!("player skipped: {}", err);
        }

        Ok(())
    }
}
