use crate::constants::*;
use crate::dom;
use crate::frame::{self, Motion};
use martone_core::animator::{Animation, Tween};
use martone_core::constants::SMOOTH_SCROLL_MS;
use martone_core::easing::{lerp, Easing};
use martone_core::scroll::{anchor_scroll_target, ElementBox, ScrollFrame, ScrollMetrics, ScrollReactor};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements whose presentation follows the scroll position.
struct ScrollTargets {
    parallax: Vec<web::HtmlElement>,
    fade: Vec<web::HtmlElement>,
    scale: Vec<web::HtmlElement>,
    progress_bar: Option<web::HtmlElement>,
    navbar: Option<web::HtmlElement>,
    back_to_top: Option<web::HtmlElement>,
}

fn element_box(el: &web::HtmlElement) -> ElementBox {
    ElementBox {
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    }
}

fn metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let (_, viewport_height) = dom::viewport_size();
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport_height);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        viewport_height,
        document_height,
    }
}

#[inline]
fn toggle_class(el: &web::HtmlElement, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

impl ScrollTargets {
    fn apply(&self, frame: &ScrollFrame) {
        let parallax = format!("translateY({:.2}px)", frame.parallax_y);
        for el in &self.parallax {
            dom::set_style(el, "transform", &parallax);
        }
        for (el, opacity) in self.fade.iter().zip(&frame.fade_opacities) {
            dom::set_style(el, "opacity", &format!("{opacity:.3}"));
        }
        for (el, scale) in self.scale.iter().zip(&frame.scale_factors) {
            dom::set_style(el, "transform", &format!("scale({scale:.4})"));
        }
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{:.2}%", frame.progress_percent));
        }
        if let Some(nav) = &self.navbar {
            toggle_class(nav, SCROLLED_CLASS, frame.navbar_scrolled);
        }
        if let Some(btn) = &self.back_to_top {
            toggle_class(btn, VISIBLE_CLASS, frame.back_to_top_visible);
        }
    }
}

fn create_progress_bar(document: &web::Document) -> Option<web::HtmlElement> {
    let bar: web::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    bar.set_class_name(SCROLL_PROGRESS_CLASS);
    document.body()?.append_child(&bar).ok()?;
    Some(bar)
}

/// Coalesced scroll handling: every scroll event requests an update and at
/// most one recomputation runs per rendered frame.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let targets = Rc::new(ScrollTargets {
        parallax: dom::query_all(document, PARALLAX_SELECTOR),
        fade: dom::query_all(document, FADE_ON_SCROLL_SELECTOR),
        scale: dom::query_all(document, SCALE_ON_SCROLL_SELECTOR),
        progress_bar: create_progress_bar(document),
        navbar: dom::query_all(document, NAVBAR_SELECTOR).into_iter().next(),
        back_to_top: document
            .get_element_by_id(BACK_TO_TOP_ID)
            .and_then(|el| el.dyn_into().ok()),
    });
    let reactor = Rc::new(RefCell::new(ScrollReactor::new()));

    let doc = document.clone();
    let win = window.clone();
    let on_scroll = move |_: web::Event| {
        if !reactor.borrow_mut().request() {
            return;
        }
        let reactor = reactor.clone();
        let targets = targets.clone();
        let doc = doc.clone();
        let win = win.clone();
        frame::on_next_frame(move || {
            let fade: Vec<ElementBox> = targets.fade.iter().map(element_box).collect();
            let scale: Vec<ElementBox> = targets.scale.iter().map(element_box).collect();
            let update = reactor
                .borrow_mut()
                .recompute(&metrics(&win, &doc), &fade, &scale);
            targets.apply(&update);
        });
    };
    dom::add_listener::<web::Event>(&window, "scroll", on_scroll);
    Ok(())
}

/// Ease the window scroll position to `target_y`.
pub fn smooth_scroll_to(motion: &Motion, target_y: f64) {
    let Some(window) = web::window() else {
        return;
    };
    let start_y = window.scroll_y().unwrap_or(0.0);
    let tween = Tween::new(SMOOTH_SCROLL_MS, Easing::EaseInOutCubic);
    motion.start(Animation::new(dom::now_ms(), tween, move |eased| {
        window.scroll_to_with_x_and_y(0.0, lerp(start_y, target_y, eased));
    }));
}

/// Back-to-top button and same-page anchor links.
pub fn init_navigation(document: &web::Document, motion: &Motion) -> anyhow::Result<()> {
    if let Some(btn) = document.get_element_by_id(BACK_TO_TOP_ID) {
        let motion = motion.clone();
        dom::add_click_listener(&btn, move |_| smooth_scroll_to(&motion, 0.0));
    }

    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let motion = motion.clone();
        let doc = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::add_click_listener(&link, move |ev| {
            if href.len() < 2 {
                return;
            }
            let Some(target) = doc.query_selector(&href).ok().flatten() else {
                return;
            };
            ev.prevent_default();
            let scroll_y = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let top = target.get_bounding_client_rect().top() + scroll_y;
            smooth_scroll_to(&motion, anchor_scroll_target(top));
        });
    }
    Ok(())
}
