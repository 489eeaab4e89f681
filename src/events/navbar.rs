use crate::constants::{
    ACTIVE_CLASS, COLLAPSED_CLASS, MENU_OPEN_CLASS, NAVBAR_SELECTOR, NAV_COLLAPSE_SELECTOR,
    NAV_LINK_SELECTOR, NAV_TOGGLER_SELECTOR,
};
use crate::dom;
use martone_core::constants::MENU_FOCUS_DELAY_MS;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_active_link(links: &[web::HtmlElement]) {
    for link in links {
        let all = links.to_vec();
        let current = link.clone();
        dom::add_click_listener(link, move |_| {
            for other in &all {
                _ = other.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = current.class_list().add_1(ACTIVE_CLASS);
        });
    }
}

fn wire_toggler(
    togglers: &[web::HtmlElement],
    collapses: &[web::HtmlElement],
    links: &[web::HtmlElement],
) {
    let first_link = links.first().cloned();
    for toggler in togglers {
        let el = toggler.clone();
        let collapses = collapses.to_vec();
        let first_link = first_link.clone();
        dom::add_click_listener(toggler, move |_| {
            _ = el.class_list().toggle(COLLAPSED_CLASS);
            let collapses = collapses.clone();
            let first_link = first_link.clone();
            dom::set_timeout(MENU_FOCUS_DELAY_MS, move || {
                let open = collapses.iter().any(|c| c.class_list().contains(MENU_OPEN_CLASS));
                if let Some(link) = first_link.filter(|_| open) {
                    _ = link.focus();
                }
            });
        });
    }
}

fn inside_navbar(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(NAVBAR_SELECTOR).ok().flatten())
        .is_some()
}

/// Active link highlight, the mobile menu toggler and closing the menu on
/// clicks outside the navbar.
pub fn wire_navbar(document: &web::Document) -> anyhow::Result<()> {
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let togglers = dom::query_all(document, NAV_TOGGLER_SELECTOR);
    let collapses = dom::query_all(document, NAV_COLLAPSE_SELECTOR);

    wire_active_link(&links);
    wire_toggler(&togglers, &collapses, &links);

    if togglers.is_empty() && collapses.is_empty() {
        return Ok(());
    }
    dom::add_click_listener(document, move |ev| {
        if inside_navbar(ev.target()) {
            return;
        }
        for c in &collapses {
            _ = c.class_list().remove_1(MENU_OPEN_CLASS);
        }
        for t in &togglers {
            _ = t.class_list().add_1(COLLAPSED_CLASS);
        }
    });
    Ok(())
}
