//! Frame callbacks, timeouts, and async image loading

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use super::dom::window;

/// High resolution timestamp (ms), same clock as frame callbacks
pub fn now() -> Result<f64, JsValue> {
    window()?
        .performance()
        .map(|p| p.now())
        .ok_or_else(|| JsValue::from_str("no performance timer"))
}

/// Run `f` on the next display frame with the frame timestamp
pub fn request_animation_frame<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce(f64) + 'static,
{
    let closure = Closure::once(f);
    window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`
pub fn set_timeout<F>(delay_ms: f64, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms.max(0.0).ceil() as i32,
    )?;
    closure.forget();
    Ok(())
}

/// Load an image, resolving once it can be drawn
pub async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    JsFuture::from(promise).await?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}
