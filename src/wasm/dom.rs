use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Event, EventTarget, HtmlElement};

use crate::drag::Point;
use crate::error::PageError;

/// Look up `#id` and cast it to the expected element type.
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, PageError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| PageError::MissingElement(format!("#{} has the wrong element type", id)))
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_visible(el: &HtmlElement, visible: bool) {
    let display = if visible { "flex" } else { "none" };
    el.style().set_property("display", display).ok();
}

/// Place a positioned element with its top-left corner at `origin`.
pub fn move_to(el: &HtmlElement, origin: Point) {
    let style = el.style();
    style.set_property("left", &format!("{}px", origin.x)).ok();
    style.set_property("top", &format!("{}px", origin.y)).ok();
    // A stylesheet anchoring right/bottom would otherwise stretch the widget.
    style.set_property("right", "auto").ok();
    style.set_property("bottom", "auto").ok();
}

/// Fallback when there is no graphics context: plain black page.
pub fn hide_background(document: &Document, canvas_id: &str) {
    if let Ok(canvas) = element::<HtmlElement>(document, canvas_id) {
        canvas.style().set_property("display", "none").ok();
    }
    if let Some(body) = document.body() {
        body.style().set_property("background-color", "#000").ok();
    }
}
