//! DOM helpers

use glam::DVec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use crate::sim::{BoardPlacement, Viewport};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Look up an element by id and cast it
pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} has the wrong element type", id)))
}

/// First element matching a selector, cast
pub fn query<T: JsCast>(selector: &str) -> Result<T, JsValue> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("nothing matches {}", selector)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("{} has the wrong element type", selector)))
}

pub fn set_display(el: &HtmlElement, display: &str) -> Result<(), JsValue> {
    el.style().set_property("display", display)
}

/// Current window size
pub fn viewport() -> Result<Viewport, JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width, height))
}

/// Where the board canvas sits in the viewport, and its cell size
pub fn board_placement(canvas: &HtmlCanvasElement, grid_size: u32) -> BoardPlacement {
    let rect = canvas.get_bounding_client_rect();
    BoardPlacement::new(
        DVec2::new(rect.left(), rect.top()),
        canvas.width() as f64 / grid_size as f64,
    )
}

/// Attach a click handler for the life of the page
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
