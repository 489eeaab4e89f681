//! One-shot visibility callbacks on top of `IntersectionObserver`.

use crate::dom;
use martone_core::visibility::{ObserverOptions, VisibilityTrigger};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn observer_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Call `on_visible` once per target, the first time it crosses the
/// threshold. Without observer support every target fires immediately.
pub fn observe_once<T: Clone + 'static>(
    tag: &str,
    targets: Vec<(web::Element, T)>,
    options: &ObserverOptions,
    mut on_visible: impl FnMut(web::Element, T) + 'static,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut trigger = VisibilityTrigger::new(options.clone());
    for (el, payload) in &targets {
        trigger.register(el.clone(), payload.clone());
    }

    if !observer_supported(&window) {
        log::info!("[{tag}] IntersectionObserver unavailable, revealing all");
        for (el, payload) in trigger.fire_all_pending() {
            on_visible(el, payload);
        }
        return Ok(());
    }

    let trigger = Rc::new(RefCell::new(trigger));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let fired = trigger.borrow_mut().report(
                    &target,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if let Some(payload) = fired {
                    observer.unobserve(&target);
                    on_visible(target, payload);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    callback.forget();
    for (el, _) in &targets {
        observer.observe(el);
    }
    log::debug!("[{tag}] observing {} elements", targets.len());
    Ok(())
}
