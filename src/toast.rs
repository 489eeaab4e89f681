//! Page notifications rendered from [`NotificationCenter`] events.

use crate::constants::{NOTIFICATION_CLOSE_SELECTOR, NOTIFICATION_SHOW_CLASS};
use crate::dom;
use crate::markup;
use martone_core::notify::{
    NotificationCenter, NotificationEvent, NotificationId, NotificationKind, NotifyTimings,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ToastState {
    center: NotificationCenter,
    elements: HashMap<NotificationId, web::HtmlElement>,
    timer: Option<i32>,
}

/// Cheap handle; clones share one notification stack.
#[derive(Clone)]
pub struct Toasts {
    document: web::Document,
    state: Rc<RefCell<ToastState>>,
}

impl Toasts {
    pub fn new(document: &web::Document, timings: NotifyTimings) -> Self {
        Self {
            document: document.clone(),
            state: Rc::new(RefCell::new(ToastState {
                center: NotificationCenter::new(timings),
                elements: HashMap::new(),
                timer: None,
            })),
        }
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        let id = self
            .state
            .borrow_mut()
            .center
            .notify(message, kind, dom::now_ms());
        match self.build(id, message, kind) {
            Ok(el) => {
                self.state.borrow_mut().elements.insert(id, el);
            }
            Err(e) => log::error!("[notify] {e:?}"),
        }
        self.pump();
    }

    fn build(
        &self,
        id: NotificationId,
        message: &str,
        kind: NotificationKind,
    ) -> anyhow::Result<web::HtmlElement> {
        let el: web::HtmlElement = self
            .document
            .create_element("div")
            .map_err(dom::js_err)?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(&markup::notification_class(kind));
        el.set_inner_html(&markup::notification_html(message, kind));
        self.document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?
            .append_child(&el)
            .map_err(dom::js_err)?;

        if let Some(close) = dom::query_one::<web::HtmlElement>(&el, NOTIFICATION_CLOSE_SELECTOR) {
            let toasts = self.clone();
            dom::add_click_listener(&close, move |_| toasts.dismiss(id));
        }
        Ok(el)
    }

    pub fn dismiss(&self, id: NotificationId) {
        if self.state.borrow_mut().center.dismiss(id, dom::now_ms()) {
            if let Some(el) = self.state.borrow().elements.get(&id) {
                _ = el.class_list().remove_1(NOTIFICATION_SHOW_CLASS);
            }
            self.pump();
        }
    }

    /// Apply due transitions, then sleep until the next deadline.
    fn pump(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(handle) = state.timer.take() {
            dom::clear_timeout(handle);
        }
        let events = state.center.tick(dom::now_ms());
        for event in events {
            match event {
                NotificationEvent::Show(id) => {
                    if let Some(el) = state.elements.get(&id) {
                        _ = el.class_list().add_1(NOTIFICATION_SHOW_CLASS);
                    }
                }
                NotificationEvent::Hide(id) => {
                    if let Some(el) = state.elements.get(&id) {
                        _ = el.class_list().remove_1(NOTIFICATION_SHOW_CLASS);
                    }
                }
                NotificationEvent::Remove(id) => {
                    if let Some(el) = state.elements.remove(&id) {
                        el.remove();
                    }
                }
            }
        }
        if let Some(deadline) = state.center.next_deadline() {
            let toasts = self.clone();
            state.timer = dom::set_timeout(deadline - dom::now_ms(), move || toasts.pump());
        }
    }
}
