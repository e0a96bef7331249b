//! Overlay elements
//!
//! A `DomOverlay` owns one absolutely positioned element. Dropping it removes
//! the element, so whoever holds it controls how long it stays on the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use super::timer;
use crate::sim::{BoardPlacement, Overlay, OverlayKind, OverlayPhase, OverlayView};

pub struct DomOverlay {
    element: HtmlElement,
    kind: OverlayKind,
}

impl DomOverlay {
    /// Create the element for `overlay` and append it to the body
    pub fn create(
        document: &Document,
        overlay: &Overlay,
        board: &BoardPlacement,
        miss_image: &str,
    ) -> Result<Self, JsValue> {
        let element: HtmlElement = match overlay.kind {
            OverlayKind::Explosion => {
                let div: HtmlElement = document.create_element("div")?.dyn_into()?;
                div.class_list().add_1("explosion")?;
                div
            }
            OverlayKind::MissMarker => {
                let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
                img.set_src(miss_image);
                img.into()
            }
        };

        let (pos, size) = overlay.screen_rect(board);
        let style = element.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &format!("{}px", pos.x))?;
        style.set_property("top", &format!("{}px", pos.y))?;
        style.set_property("width", &format!("{}px", size))?;
        style.set_property("height", &format!("{}px", size))?;

        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&element)?;

        Ok(Self {
            element,
            kind: overlay.kind,
        })
    }
}

impl OverlayView for DomOverlay {
    fn enter_phase(&mut self, phase: OverlayPhase) {
        let result = match (self.kind, phase) {
            (OverlayKind::Explosion, OverlayPhase::Shown) => {
                // Next frame, so the CSS transition starts from the base style
                let element = self.element.clone();
                timer::request_animation_frame(move |_| {
                    if let Err(e) = element.class_list().add_1("explode") {
                        log::warn!("Explosion class not applied: {:?}", e);
                    }
                })
            }
            (OverlayKind::Explosion, OverlayPhase::Fading) => {
                let classes = self.element.class_list();
                classes
                    .remove_1("explode")
                    .and_then(|_| classes.add_1("fade-out"))
            }
            _ => Ok(()),
        };
        if let Err(e) = result {
            log::warn!("Overlay phase {:?} not applied: {:?}", phase, e);
        }
    }
}

impl Drop for DomOverlay {
    fn drop(&mut self) {
        self.element.remove();
    }
}
