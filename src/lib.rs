#![cfg(target_arch = "wasm32")]
use martone_core::config::FxConfig;
use martone_core::tasks::StopHandle;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod markup;
mod observe;
mod overlay;
mod particles;
mod reveal;
mod scroll;
mod toast;

/// Log a component's wiring failure without disturbing the others.
fn isolate<T>(tag: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("[{tag}] init failed: {e:?}");
            None
        }
    }
}

fn wire_fault_logging(window: &web::Window) {
    dom::add_listener::<web::ErrorEvent>(window, "error", |ev| {
        log::error!(
            "[page] {} ({}:{}:{})",
            ev.message(),
            ev.filename(),
            ev.lineno(),
            ev.colno()
        );
    });
    dom::add_listener::<web::PromiseRejectionEvent>(window, "unhandledrejection", |ev| {
        log::error!("[page] unhandled rejection: {:?}", ev.reason());
    });
}

fn read_config(document: &web::Document) -> FxConfig {
    let Some(body) = document.body() else {
        return FxConfig::default();
    };
    let (cfg, errors) = FxConfig::from_attributes(|name| body.get_attribute(name));
    for e in errors {
        log::warn!("[config] {e}; keeping default");
    }
    cfg
}

fn stop_on_pagehide(window: &web::Window, handles: Vec<StopHandle>) {
    if handles.is_empty() {
        return;
    }
    dom::add_listener::<web::Event>(window, "pagehide", move |_| {
        for h in &handles {
            h.stop();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("martone-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    wire_fault_logging(&window);
    let cfg = read_config(&document);
    let motion = frame::Motion::new();
    let toasts = toast::Toasts::new(&document, cfg.notify);

    isolate("loader", overlay::init_loader(&document));
    isolate("reveal", reveal::init(&document, &cfg, &motion));
    isolate("animate", reveal::init_animate_on_scroll(&document, &cfg));
    isolate("hero", reveal::init_hero(&document, &motion));
    isolate("sections", reveal::init_sections(&document, &motion));
    isolate("stats", reveal::init_stats(&document, &cfg));
    isolate("lazy", reveal::init_lazy_images(&document, &cfg));
    isolate("scroll", scroll::init(&document));
    isolate("navigation", scroll::init_navigation(&document, &motion));
    isolate("navbar", events::wire_navbar(&document));
    isolate("pointer", events::wire_pointer_effects(&document, &motion));
    isolate("newsletter", events::wire_newsletter(&document, &cfg, &toasts));
    isolate("social", events::wire_social_sidebar(&document));
    isolate("keyboard", events::wire_keyboard_access(&document));
    isolate("text", effects::init_word_reveal(&document));
    isolate("floating", effects::init_floating(&document));

    let mut loops = Vec::new();
    if let Some(Some(handle)) = isolate("particles", particles::init(&document, &cfg)) {
        loops.push(handle);
    }
    if let Some(handles) = isolate("effects", effects::init_repeating(&document)) {
        loops.extend(handles);
    }
    stop_on_pagehide(&window, loops);

    log::info!("[init] ready");
    Ok(())
}
