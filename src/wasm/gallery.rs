use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, HtmlImageElement};

use super::dom;
use crate::config::GalleryIds;
use crate::error::PageError;
use crate::gallery::{Gallery, OverlayClick};

struct GalleryView {
    overlay: HtmlElement,
    image: HtmlImageElement,
}

impl GalleryView {
    fn apply(&self, state: &Gallery) {
        if let Some(src) = state.image() {
            if self.image.src() != src {
                self.image.set_src(src);
            }
        }
        dom::set_visible(&self.overlay, state.is_visible());
    }

    fn is_backdrop(&self, event: &Event) -> bool {
        let overlay: &JsValue = self.overlay.as_ref();
        event.target().is_some_and(|target| {
            let target: &JsValue = target.as_ref();
            target == overlay
        })
    }
}

/// Wire every thumbnail, the close control and the backdrop to one gallery.
pub fn bind(document: &Document, ids: &GalleryIds) -> Result<(), PageError> {
    let view = Rc::new(GalleryView {
        overlay: dom::element(document, &ids.overlay)?,
        image: dom::element(document, &ids.image)?,
    });
    let close: HtmlElement = dom::element(document, &ids.close)?;
    let state = Rc::new(RefCell::new(Gallery::new()));
    view.apply(&state.borrow());

    let thumbs = document.query_selector_all(&format!(".{}", ids.thumb_class))?;
    let mut bound = 0;
    for i in 0..thumbs.length() {
        let Some(thumb) = thumbs
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        else {
            continue;
        };
        let (view, state, src_of) = (view.clone(), state.clone(), thumb.clone());
        dom::listen(&thumb, "click", move |_| {
            state.borrow_mut().show(src_of.src());
            view.apply(&state.borrow());
        })?;
        bound += 1;
    }

    {
        let (view, state) = (view.clone(), state.clone());
        dom::listen(&close, "click", move |_| {
            state.borrow_mut().hide();
            view.apply(&state.borrow());
        })?;
    }

    let overlay = view.overlay.clone();
    dom::listen(&overlay, "click", move |event| {
        let target = if view.is_backdrop(&event) {
            OverlayClick::Background
        } else {
            OverlayClick::Content
        };
        let changed = state.borrow_mut().click_overlay(target);
        if changed {
            view.apply(&state.borrow());
        }
    })?;

    log::debug!("gallery bound to {} thumbnails", bound);
    Ok(())
}
