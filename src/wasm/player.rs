use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, HtmlAudioElement, HtmlElement, HtmlInputElement, MouseEvent};

use super::dom;
use crate::config::PlayerIds;
use crate::drag::{DragState, Point};
use crate::error::PageError;
use crate::player::{MediaElement, Player, PlayerEvent};
use crate::playlist::Playlist;

const PLAYING_CLASS: &str = "playing";

/// An `<audio>` element as the player's media backend.
pub struct HtmlMedia {
    audio: HtmlAudioElement,
    // Shared by every `play()` promise; output starting late is not an error,
    // but a rejection (autoplay policy, bad source) is worth a log line.
    on_rejected: Closure<dyn FnMut(JsValue)>,
}

impl HtmlMedia {
    pub fn new(audio: HtmlAudioElement) -> Self {
        let on_rejected = Closure::wrap(Box::new(|err: JsValue| {
            log::warn!("playback did not start: {:?}", err);
        }) as Box<dyn FnMut(JsValue)>);
        Self { audio, on_rejected }
    }

    pub fn audio(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl MediaElement for HtmlMedia {
    fn set_source(&mut self, src: &str) {
        self.audio.set_src(src);
    }

    fn play(&mut self) {
        match self.audio.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_rejected);
            }
            Err(err) => log::warn!("play() threw: {:?}", err),
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.audio.pause() {
            log::warn!("pause() threw: {:?}", err);
        }
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn set_volume(&mut self, level: f64) {
        self.audio.set_volume(level);
    }
}

/// DOM controls the player reconciles on every [`PlayerEvent`].
struct PlayerView {
    widget: HtmlElement,
    title: HtmlElement,
    seek: HtmlInputElement,
    volume: HtmlInputElement,
}

impl PlayerView {
    fn apply(&self, event: &PlayerEvent) {
        match event {
            PlayerEvent::TrackLoaded { title, .. } => self.title.set_text_content(Some(title.as_str())),
            PlayerEvent::PlayingChanged(true) => {
                self.widget.class_list().add_1(PLAYING_CLASS).ok();
            }
            PlayerEvent::PlayingChanged(false) => {
                self.widget.class_list().remove_1(PLAYING_CLASS).ok();
            }
            PlayerEvent::PositionChanged(position) => self.seek.set_value_as_number(*position),
            PlayerEvent::SeekRangeChanged(max) => self.seek.set_max(&max.to_string()),
            PlayerEvent::VolumeChanged(level) => self.volume.set_value_as_number(*level),
        }
    }
}

pub type SharedPlayer = Rc<RefCell<Player<HtmlMedia>>>;

/// Build the player over the page's `<audio>` and wire its controls.
pub fn bind(document: &Document, ids: &PlayerIds, initial_volume: f64) -> Result<SharedPlayer, PageError> {
    let audio: HtmlAudioElement = dom::element(document, &ids.audio)?;
    let widget: HtmlElement = dom::element(document, &ids.widget)?;
    let handle: HtmlElement = dom::element(document, &ids.handle)?;
    let play: HtmlElement = dom::element(document, &ids.play)?;
    let prev: HtmlElement = dom::element(document, &ids.prev)?;
    let next: HtmlElement = dom::element(document, &ids.next)?;
    let view = PlayerView {
        widget: widget.clone(),
        title: dom::element(document, &ids.title)?,
        seek: dom::element(document, &ids.seek)?,
        volume: dom::element(document, &ids.volume)?,
    };
    let seek = view.seek.clone();
    let volume = view.volume.clone();

    let mut player = Player::new(Playlist::default(), HtmlMedia::new(audio.clone()));
    player.set_volume(initial_volume);
    player.subscribe(move |event| view.apply(event));
    let player = Rc::new(RefCell::new(player));

    bind_transport(&player, &play, &prev, &next)?;

    {
        let player = player.clone();
        let input = seek.clone();
        dom::listen(&seek, "input", move |_| {
            player.borrow_mut().seek(input.value_as_number());
        })?;
    }
    {
        let player = player.clone();
        let input = volume.clone();
        dom::listen(&volume, "input", move |_| {
            player.borrow_mut().set_volume(input.value_as_number());
        })?;
    }

    bind_media(&player, &audio)?;
    bind_drag(document, widget, &handle)?;

    log::info!(
        "player ready with {} tracks",
        player.borrow().playlist().len()
    );
    Ok(player)
}

fn bind_transport(
    player: &SharedPlayer,
    play: &HtmlElement,
    prev: &HtmlElement,
    next: &HtmlElement,
) -> Result<(), PageError> {
    let p = player.clone();
    dom::listen(play, "click", move |_| p.borrow_mut().toggle())?;
    let p = player.clone();
    dom::listen(prev, "click", move |_| p.borrow_mut().previous())?;
    let p = player.clone();
    dom::listen(next, "click", move |_| p.borrow_mut().next())?;
    Ok(())
}

fn bind_media(player: &SharedPlayer, audio: &HtmlAudioElement) -> Result<(), PageError> {
    let (p, a) = (player.clone(), audio.clone());
    dom::listen(audio, "timeupdate", move |_| {
        p.borrow_mut().on_time_update(a.current_time(), a.duration());
    })?;

    let (p, a) = (player.clone(), audio.clone());
    dom::listen(audio, "loadedmetadata", move |_| {
        p.borrow_mut().on_loaded_metadata(a.duration());
    })?;

    let p = player.clone();
    dom::listen(audio, "ended", move |_| p.borrow_mut().on_ended())?;
    Ok(())
}

fn pointer(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

fn bind_drag(document: &Document, widget: HtmlElement, handle: &HtmlElement) -> Result<(), PageError> {
    let drag = Rc::new(RefCell::new(DragState::new()));

    {
        let (drag, widget) = (drag.clone(), widget.clone());
        dom::listen(handle, "mousedown", move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            event.prevent_default();
            let origin = Point::new(widget.offset_left() as f64, widget.offset_top() as f64);
            drag.borrow_mut().pointer_down(pointer(mouse), origin);
        })?;
    }
    {
        let drag = drag.clone();
        dom::listen(document, "mousemove", move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Some(origin) = drag.borrow().pointer_move(pointer(mouse)) {
                dom::move_to(&widget, origin);
            }
        })?;
    }
    dom::listen(document, "mouseup", move |_| drag.borrow_mut().pointer_up())?;
    Ok(())
}
