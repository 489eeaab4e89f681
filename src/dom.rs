use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the page's monotonic clock.
#[inline]
pub fn now_ms() -> f64 {
    instant::now()
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Matching descendants of `root`.
pub fn query_within(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one<T: JsCast>(root: &web::Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::EventTarget, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    add_listener::<web::MouseEvent>(el, "click", move |ev| handler(ev));
}

/// One-shot timer. Returns the handle for [`clear_timeout`].
pub fn set_timeout(delay_ms: f64, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::once(f);
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.max(0.0).round() as i32,
        )
        .ok();
    closure.forget();
    handle
}

#[inline]
pub fn clear_timeout(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(handle);
    }
}

/// Run `step` at the timestamps it asks for. `step` receives the current
/// time and returns the next due time, or `None` to end the chain.
pub fn chain_timeouts(first_due: f64, step: impl FnMut(f64) -> Option<f64> + 'static) {
    let step = Rc::new(RefCell::new(step));
    schedule_link(step, first_due);
}

fn schedule_link(step: Rc<RefCell<dyn FnMut(f64) -> Option<f64>>>, due: f64) {
    let delay = due - now_ms();
    let next = step.clone();
    let scheduled = set_timeout(delay, move || {
        let due = {
            let mut f = next.borrow_mut();
            (&mut *f)(now_ms())
        };
        if let Some(due) = due {
            schedule_link(next, due);
        }
    });
    if scheduled.is_none() {
        log::warn!("[dom] timer unavailable, chain dropped");
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: f64) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        set_timeout(ms, move || {
            _ = resolve.call0(&JsValue::NULL);
        });
    });
    _ = JsFuture::from(promise).await;
}

/// Match the canvas backing store to the viewport.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = viewport_size();
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
    (w as f32, h as f32)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
