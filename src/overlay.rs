use crate::constants::{BODY_LOADING_CLASS, LOADED_CLASS, LOADING_SCREEN_ID};
use crate::dom;
use martone_core::loader::{LoaderEvent, LoadingScreen};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply(document: &web::Document, el: &web::Element, event: LoaderEvent) {
    match event {
        LoaderEvent::MarkLoaded => {
            _ = el.class_list().add_1(LOADED_CLASS);
            if let Some(body) = document.body() {
                _ = body.class_list().remove_1(BODY_LOADING_CLASS);
            }
            log::info!("[loader] hidden");
        }
        LoaderEvent::Remove => el.remove(),
    }
}

fn schedule(document: web::Document, el: web::Element, screen: Rc<RefCell<LoadingScreen>>) {
    let Some(deadline) = screen.borrow().next_deadline() else {
        return;
    };
    dom::set_timeout(deadline - dom::now_ms(), move || {
        let events = screen.borrow_mut().tick(dom::now_ms());
        for event in events {
            apply(&document, &el, event);
        }
        schedule(document, el, screen);
    });
}

/// Loading screen: hidden shortly after window `load`, or at the fallback
/// deadline, then detached once its fade has played.
pub fn init_loader(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) else {
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let screen = Rc::new(RefCell::new(LoadingScreen::new(dom::now_ms())));

    if document.ready_state() == "complete" {
        screen.borrow_mut().on_window_load(dom::now_ms());
    } else {
        let screen = screen.clone();
        let doc = document.clone();
        let el = el.clone();
        dom::add_listener::<web::Event>(&window, "load", move |_| {
            screen.borrow_mut().on_window_load(dom::now_ms());
            // the pending timer may be aimed at the later fallback
            schedule(doc.clone(), el.clone(), screen.clone());
        });
    }
    schedule(document.clone(), el, screen);
    Ok(())
}
