use crate::constants::{
    DIMMED_CLASS, FEATURED_CARD_SELECTOR, HOVERED_CLASS, IMAGE_PLACEHOLDER_SELECTOR,
    MAGNETIC_SELECTOR, RIPPLE_CLASS, RIPPLE_SELECTOR, SOCIAL_LINK_ANY_SELECTOR, TILT_SELECTOR,
};
use crate::dom;
use crate::frame::Motion;
use crate::input;
use crate::markup;
use martone_core::animator::{Animation, Transform, Tween};
use martone_core::constants::RIPPLE_DURATION_MS;
use martone_core::easing::Easing;
use martone_core::interaction::{magnetic_pull, tilt, Ripple, Tilt};
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_magnetic(document: &web::Document) {
    for el in dom::query_all(document, MAGNETIC_SELECTOR) {
        let target = el.clone();
        dom::add_listener::<web::MouseEvent>(&el, "mousemove", move |ev| {
            let (x, y) = input::client_point(&ev);
            let pull = magnetic_pull(&input::rect_of(&target), x, y);
            dom::set_style(&target, "transform", &pull.to_css());
        });
        let target = el.clone();
        dom::add_listener::<web::MouseEvent>(&el, "mouseleave", move |_| {
            dom::set_style(&target, "transform", &Transform::IDENTITY.to_css());
        });
    }
}

fn wire_tilt(document: &web::Document) {
    for el in dom::query_all(document, TILT_SELECTOR) {
        let target = el.clone();
        dom::add_listener::<web::MouseEvent>(&el, "mousemove", move |ev| {
            let (x, y) = input::client_point(&ev);
            let t = tilt(&input::rect_of(&target), x, y);
            dom::set_style(&target, "transform", &t.to_css());
        });
        let target = el.clone();
        dom::add_listener::<web::MouseEvent>(&el, "mouseleave", move |_| {
            dom::set_style(&target, "transform", &Tilt::FLAT.to_css());
        });
    }
}

fn spawn_ripple(
    document: &web::Document,
    motion: &Motion,
    host: &web::HtmlElement,
    ev: &web::MouseEvent,
) -> Option<()> {
    let (x, y) = input::client_point(ev);
    let geometry = Ripple::at(&input::rect_of(host), x, y);
    let span: web::HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
    span.set_class_name(RIPPLE_CLASS);
    _ = span.set_attribute(
        "style",
        &markup::ripple_style(geometry.size, geometry.left, geometry.top),
    );
    host.append_child(&span).ok()?;

    let frame_span = span.clone();
    let tween = Tween::new(RIPPLE_DURATION_MS, Easing::EaseOutCubic);
    let animation = Animation::new(dom::now_ms(), tween, move |t| {
        let (scale, opacity) = Ripple::frame(t);
        dom::set_style(&frame_span, "transform", &format!("scale({scale:.4})"));
        dom::set_style(&frame_span, "opacity", &format!("{opacity:.3}"));
    })
    .on_complete(move || span.remove());
    motion.start(animation);
    Some(())
}

fn wire_ripple(document: &web::Document, motion: &Motion) {
    for el in dom::query_all(document, RIPPLE_SELECTOR) {
        let host = el.clone();
        let doc = document.clone();
        let motion = motion.clone();
        dom::add_click_listener(&el, move |ev| {
            if spawn_ripple(&doc, &motion, &host, &ev).is_none() {
                log::debug!("[pointer] ripple skipped");
            }
        });
    }
}

fn on_hover(el: &web::HtmlElement, apply: impl Fn(bool) + Clone + 'static) {
    let enter = apply.clone();
    dom::add_listener::<web::MouseEvent>(el, "mouseenter", move |_| enter(true));
    dom::add_listener::<web::MouseEvent>(el, "mouseleave", move |_| apply(false));
}

fn siblings_of(el: &web::HtmlElement) -> Vec<web::Element> {
    let Some(parent) = el.parent_element() else {
        return Vec::new();
    };
    let node: &web::Node = el;
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|child| !child.is_same_node(Some(node)))
        .collect()
}

fn wire_hover_classes(document: &web::Document) {
    for card in dom::query_all(document, FEATURED_CARD_SELECTOR) {
        let placeholders = dom::query_within(&card, IMAGE_PLACEHOLDER_SELECTOR);
        on_hover(&card, move |on| {
            for p in &placeholders {
                _ = p.class_list().toggle_with_force(HOVERED_CLASS, on);
            }
        });
    }
    for button in dom::query_all(document, MAGNETIC_SELECTOR) {
        let target = button.clone();
        on_hover(&button, move |on| {
            _ = target.class_list().toggle_with_force(HOVERED_CLASS, on);
        });
    }
    for link in dom::query_all(document, SOCIAL_LINK_ANY_SELECTOR) {
        let target = link.clone();
        on_hover(&link, move |on| {
            for sibling in siblings_of(&target) {
                _ = sibling.class_list().toggle_with_force(DIMMED_CLASS, on);
            }
        });
    }
}

/// Magnetic buttons, tilting cards, hover classes and click ripples.
pub fn wire_pointer_effects(document: &web::Document, motion: &Motion) -> anyhow::Result<()> {
    wire_magnetic(document);
    wire_tilt(document);
    wire_hover_classes(document);
    wire_ripple(document, motion);
    Ok(())
}
